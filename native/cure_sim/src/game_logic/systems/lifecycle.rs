//! Path: native/cure_sim/src/game_logic/systems/lifecycle.rs
//! Summary: run のリセット・再起動・ゲームオーバー、イントロ会話と開始

use super::boss::destroy_boss_stuff;
use super::effects::{notify, set_shield};
use super::spawn::start_wave_timer;
use crate::world::{FrameEvent, GameWorld, RunState, TimerKey};
use cure_core::constants::INTRO_FADE_MS;
use cure_core::dialogue::DIALOGUE;
use cure_core::phase::Phase;

/// セル・薬剤・弾を全消去
pub(crate) fn clear_field(w: &mut GameWorld) {
    w.cells.clear();
    w.pickups.clear();
    w.bullets.clear();
    w.collision_events.clear();
}

/// 正規状態へ戻す（安定度 20・フェーズ 0・所持なし・ボスなし・全タイマー/エフェクト解除）。
/// `fresh_boot` なら会話も最初から。何度呼んでも同じ状態になる。
pub fn reset_run(w: &mut GameWorld, fresh_boot: bool) {
    let dialogue_index = if fresh_boot { 0 } else { w.run.dialogue_index };
    w.run = RunState { dialogue_index, ..RunState::new() };

    destroy_boss_stuff(w);
    w.scheduler.cancel_all();
    w.effects.reset();
    set_shield(w, false);
    clear_field(w);
    w.player.respawn();

    w.last_fired_ms = 0;
    w.physics_paused = false;
    w.run_epoch += 1;
    log::debug!("run reset (epoch {}, fresh_boot={})", w.run_epoch, fresh_boot);
}

/// ボス戦の決着後: リセットしてすぐ VEINS から再開する
pub fn restart_run(w: &mut GameWorld, message: Option<&'static str>) {
    reset_run(w, false);
    w.run.is_active = true;
    w.run.dialogue_index = DIALOGUE.len();
    w.frame_events.push(FrameEvent::BackgroundChanged {
        phase: Phase::Veins,
        key: Phase::Veins.params().background,
    });
    start_wave_timer(w);
    notify(w, message.unwrap_or("RUN RESET\nStability: 20%"), 900);
    w.frame_events.push(FrameEvent::RunRestarted);
    log::info!("run restarted (epoch {})", w.run_epoch);
}

/// 唯一の終端状態。以後 tick は何もしない。
pub fn end_game(w: &mut GameWorld) {
    if w.run.game_over {
        return;
    }
    w.run.is_active = false;
    w.run.game_over = true;
    destroy_boss_stuff(w);
    w.scheduler.cancel_all();
    w.physics_paused = true;
    w.frame_events.push(FrameEvent::GameOver { text: "SYSTEM FAILURE\nPatient Lost" });
    log::info!(
        "game over at frame {} (cured {}, missed {})",
        w.frame_id,
        w.stats.cured,
        w.stats.missed
    );
}

/// 会話を 1 ページ進める。最後のページの次でフェードを挟んで開始。
pub(crate) fn advance_dialogue(w: &mut GameWorld) {
    if w.run.is_active || w.run.boss_mode || w.run.is_transitioning || w.run.game_over {
        return;
    }
    if w.scheduler.is_scheduled(TimerKey::IntroFade) {
        return;
    }
    w.run.dialogue_index += 1;
    if w.run.dialogue_index < DIALOGUE.len() {
        w.frame_events.push(FrameEvent::DialogueAdvanced { index: w.run.dialogue_index });
    } else {
        w.scheduler.after(TimerKey::IntroFade, w.now_ms, INTRO_FADE_MS);
    }
}

/// IntroFade 完了: ゲーム開始
pub(crate) fn activate(w: &mut GameWorld) {
    if w.run.is_active || w.run.game_over {
        return;
    }
    w.run.is_active = true;
    start_wave_timer(w);
    w.frame_events.push(FrameEvent::GameStarted);
    log::info!("game started: {}", w.run.phase.params().name);
}

/// 会話を飛ばして即開始（ヘッドレス実行・テスト用）
pub fn skip_intro(w: &mut GameWorld) {
    w.scheduler.cancel(TimerKey::IntroFade);
    w.run.dialogue_index = DIALOGUE.len();
    activate(w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::{physics_step, test_world};
    use crate::world::InputState;
    use cure_core::consumable::ConsumableKind;
    use cure_core::effect::EffectKind;

    #[test]
    fn reset_twice_yields_canonical_state() {
        let mut w = test_world();
        w.run.stability = 63;
        w.run.phase = Phase::Organs;
        w.run.boss_mode = true;
        w.run.inventory.collect(ConsumableKind::Insulin);
        w.effects.apply(EffectKind::BossSpeed, 0.4, 6000, w.now_ms);

        reset_run(&mut w, true);
        let first = w.run.clone();
        reset_run(&mut w, true);
        assert_eq!(w.run, first);
        assert_eq!(w.run, RunState::new());
        assert_eq!(w.run.stability, 20);
        assert_eq!(w.run.phase, Phase::Veins);
        assert!(w.run.inventory.is_empty());
        assert!(!w.run.boss_mode);
        assert_eq!(w.effects.boss_speed_mul(), 1.0);
        assert!(!w.scheduler.is_scheduled(TimerKey::WaveSpawn));
    }

    #[test]
    fn reset_bumps_epoch() {
        let mut w = test_world();
        let e = w.run_epoch;
        reset_run(&mut w, false);
        assert_eq!(w.run_epoch, e + 1);
    }

    #[test]
    fn end_game_is_terminal_and_once() {
        let mut w = test_world();
        end_game(&mut w);
        end_game(&mut w);
        let overs = w
            .drain_frame_events()
            .iter()
            .filter(|e| matches!(e, FrameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
        let frame = w.frame_id;
        let input = InputState { advance: true, ..InputState::default() };
        physics_step(&mut w, 16, &input);
        assert_eq!(w.frame_id, frame + 1);
        assert!(w.drain_frame_events().is_empty());
        assert!(w.cells.is_empty());
    }

    #[test]
    fn dialogue_walks_pages_then_starts_after_fade() {
        let mut w = GameWorld::new(1);
        let press = InputState { advance: true, ..InputState::default() };
        let idle = InputState::default();
        for expected in 1..DIALOGUE.len() {
            physics_step(&mut w, 16, &press);
            assert_eq!(w.run.dialogue_index, expected);
        }
        physics_step(&mut w, 16, &press);
        assert!(!w.run.is_active);
        // フェード中の連打は無視
        physics_step(&mut w, 16, &press);
        assert_eq!(w.run.dialogue_index, DIALOGUE.len());

        for _ in 0..(INTRO_FADE_MS / 16 + 1) {
            physics_step(&mut w, 16, &idle);
        }
        assert!(w.run.is_active);
        assert!(w.scheduler.is_scheduled(TimerKey::WaveSpawn));
    }

    #[test]
    fn restart_keeps_game_active_with_message() {
        let mut w = test_world();
        w.run.stability = 5;
        restart_run(&mut w, None);
        assert!(w.run.is_active);
        assert_eq!(w.run.stability, 20);
        assert!(w
            .frame_events
            .iter()
            .any(|e| *e == FrameEvent::Notify { text: "RUN RESET\nStability: 20%", duration_ms: 900 }));
    }
}
