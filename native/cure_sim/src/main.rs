//! Path: native/cure_sim/src/main.rs
//! Summary: ヘッドレスランナー（固定 tick で GameWorld を回し、イベントをログ出力）

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use cure_sim::{physics_step, skip_intro, Autopilot, FrameEvent, GameWorld, HudSnapshot, RunnerConfig};

#[derive(Parser, Debug)]
#[command(about = "Run the bloodstream shooter simulation headless", version)]
struct Args {
    /// RON 設定ファイル（省略時はデフォルト値）
    #[arg(long)] config: Option<PathBuf>,
    #[arg(long)] seed: Option<u64>,
    /// 0 = ゲームオーバーまで
    #[arg(long)] ticks: Option<u64>,
    #[arg(long)] tick_ms: Option<u64>,
    #[arg(long)] skip_intro: bool,
    /// 最終 HUD スナップショットを JSON で書き出す
    #[arg(long)] snapshot: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<RunnerConfig, String> {
    let mut cfg = match &args.config {
        Some(path) => RunnerConfig::load_from_file(path)?,
        None => RunnerConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        cfg.max_ticks = ticks;
    }
    if let Some(tick_ms) = args.tick_ms {
        if tick_ms == 0 {
            return Err("--tick-ms must be > 0".to_string());
        }
        cfg.tick_ms = tick_ms;
    }
    cfg.skip_intro |= args.skip_intro;
    Ok(cfg)
}

fn log_event(frame_id: u32, ev: &FrameEvent) {
    match ev {
        FrameEvent::Notify { text, .. } | FrameEvent::GameOver { text } => {
            log::info!("[{}] {}", frame_id, text.replace('\n', " / "));
        }
        FrameEvent::PhaseBanner { phase, .. } | FrameEvent::BackgroundChanged { phase, .. } => {
            log::info!("[{}] {:?}", frame_id, phase);
        }
        FrameEvent::DialogueAdvanced { index } => {
            if let Some(line) = cure_core::dialogue::line(*index) {
                log::info!("[{}] {:?}: {}", frame_id, line.speaker, line.text.replace('\n', " "));
            }
        }
        FrameEvent::EncounterEnded { outcome } => log::info!("[{}] encounter {:?}", frame_id, outcome),
        other => log::debug!("[{}] {:?}", frame_id, other),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();
    let args = Args::parse();
    let cfg = load_config(&args)?;
    log::info!("cure_sim: {:?}", cfg);

    let mut world = GameWorld::new(cfg.seed);
    if cfg.skip_intro {
        skip_intro(&mut world);
    }
    let mut pilot = Autopilot::new();

    let mut tick: u64 = 0;
    while cfg.max_ticks == 0 || tick < cfg.max_ticks {
        let input = pilot.next_input(&world);
        physics_step(&mut world, cfg.tick_ms, &input);
        for ev in world.drain_frame_events() {
            log_event(world.frame_id, &ev);
        }
        tick += 1;

        if cfg.log_hud_every > 0 && tick % cfg.log_hud_every == 0 {
            let hud = HudSnapshot::capture(&world);
            log::info!("{}", hud.status_text().replace('\n', " | "));
            if let Some(boss) = hud.boss_text() {
                log::info!("{}", boss.replace('\n', " | "));
            }
        }
        if world.run.game_over {
            break;
        }
    }

    let hud = HudSnapshot::capture(&world);
    println!("{}", hud.status_text());
    println!(
        "ticks: {}  cured: {}  wiped: {}  missed: {}  game_over: {}",
        tick, hud.stats.cured, hud.stats.wiped, hud.stats.missed, hud.game_over
    );

    if let Some(path) = &args.snapshot {
        let json = serde_json::to_string_pretty(&hud).map_err(|e| format!("serialize snapshot: {e}"))?;
        fs::write(path, json).map_err(|e| format!("write {}: {e}", path.display()))?;
        log::info!("snapshot written to {}", path.display());
    }
    Ok(())
}
