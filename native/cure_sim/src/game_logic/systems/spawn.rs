//! Path: native/cure_sim/src/game_logic/systems/spawn.rs
//! Summary: ウェーブスポーンとミス判定（安定度減少・ボス突入・敗北）

use super::boss::begin_final_stand;
use super::lifecycle::end_game;
use crate::world::{FrameEvent, GameWorld, TimerKey};
use cure_core::consumable::ConsumableKind;
use cure_core::constants::{
    CELL_MISS_Y, CELL_SPAWN_Y, FINAL_STAND_TRIGGER, PICKUP_WAVE_SPEED, STAB_LOSS_ON_MISS,
};
use cure_core::util::{clamp_stability, spawn_x};

/// 現フェーズの間隔でウェーブタイマーを（再）起動する
pub(crate) fn start_wave_timer(w: &mut GameWorld) {
    let delay = w.run.phase.params().spawn_delay_ms;
    w.scheduler.every(TimerKey::WaveSpawn, w.now_ms, delay);
}

pub(crate) fn spawn_wave(w: &mut GameWorld) {
    if !w.run.is_active || w.run.is_transitioning || w.run.boss_mode {
        return;
    }
    let params = w.run.phase.params();
    let mul = w.effects.cell_speed_mul();

    let x = spawn_x(&mut w.rng);
    let i = w.cells.spawn(x, CELL_SPAWN_Y, params.enemy_health, params.enemy_speed, mul);
    w.frame_events.push(FrameEvent::CellSpawned { index: i, health: params.enemy_health });
    log::debug!("cell #{} at x={} hp={}", i, x, params.enemy_health);

    if w.rng.chance(params.med_chance) {
        let kind = ConsumableKind::random_drop(&mut w.rng);
        let px = spawn_x(&mut w.rng);
        w.pickups.spawn(px, CELL_SPAWN_Y, kind, PICKUP_WAVE_SPEED, mul);
        log::debug!("pickup {:?} at x={}", kind, px);
    }
}

/// 画面下端を越えた生存セルをミスとして処理する。
/// 敗北判定はループ内、ボス突入はループ後なので、同じ tick で両方満たせば敗北が勝つ。
pub(crate) fn scan_misses(w: &mut GameWorld) {
    let mut should_start_boss = false;
    for i in 0..w.cells.len() {
        if !w.cells.is_active(i) || w.cells.positions_y[i] <= CELL_MISS_Y {
            continue;
        }
        register_miss(w, i);

        if !w.run.boss_mode && w.run.stability <= FINAL_STAND_TRIGGER {
            should_start_boss = true;
        }
        if w.run.stability <= 0 && !w.run.boss_mode {
            end_game(w);
        }
    }

    if should_start_boss && !w.run.boss_mode && !w.run.game_over {
        begin_final_stand(w);
    }
}

fn register_miss(w: &mut GameWorld, i: usize) {
    w.run.stability = clamp_stability(w.run.stability - STAB_LOSS_ON_MISS);
    w.cells.kill(i);
    w.stats.missed += 1;
    log::debug!("miss: cell #{} stability={}", i, w.run.stability);
    w.frame_events.push(FrameEvent::CellMissed { index: i, stability: w.run.stability });
    w.frame_events.push(FrameEvent::StabilityChanged { stability: w.run.stability });
}
