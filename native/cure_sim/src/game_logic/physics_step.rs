//! Path: native/cure_sim/src/game_logic/physics_step.rs
//! Summary: 1 tick の処理（タイマー → 入力 → 移動 → 衝突解決 → ミス判定 → ボス突入判定）

use super::systems::boss::{update_boss, watchdog};
use super::systems::collision::{detect_collisions, resolve_collisions};
use super::systems::items::{combine, use_consumable};
use super::systems::lifecycle::advance_dialogue;
use super::systems::projectiles::{auto_fire, move_bullets};
use super::systems::spawn::scan_misses;
use super::timers::run_timers;
use crate::world::{GameWorld, InputState};
use cure_core::constants::{
    CELL_MISS_Y, FRAME_BUDGET_MS, PLAYER_HALF_H, PLAYER_HALF_W, PLAYER_SPEED, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// 固定 tick で呼ぶ。`delta_ms` だけシミュレーション時刻を進める。
pub fn physics_step(w: &mut GameWorld, delta_ms: u64, input: &InputState) {
    // trace にしておき、RUST_LOG=trace のときだけ毎フレーム出力
    log::trace!("physics_step: delta={}ms frame_id={}", delta_ms, w.frame_id);
    let t_start = std::time::Instant::now();

    w.frame_id += 1;
    w.now_ms += delta_ms;
    if w.physics_paused {
        return;
    }
    let dt = delta_ms as f32 / 1000.0;

    run_timers(w);
    if w.run.game_over {
        return;
    }

    if input.advance {
        advance_dialogue(w);
    }

    // 会話中・フェーズ移行中: 入力とスポーンは止め、既存の物体だけ動かす
    if !w.run.is_active || w.run.is_transitioning {
        w.player.vx = 0.0;
        w.player.vy = 0.0;
        integrate_bodies(w, dt);
        record_frame_time(w, t_start);
        return;
    }

    if watchdog(w) {
        record_frame_time(w, t_start);
        return;
    }

    // ── 入力 ────────────────────────────────────────────────────
    w.player.vx = if input.left {
        -PLAYER_SPEED
    } else if input.right {
        PLAYER_SPEED
    } else {
        0.0
    };
    w.player.vy = if input.up {
        -PLAYER_SPEED
    } else if input.down {
        PLAYER_SPEED
    } else {
        0.0
    };
    if input.use_slot_1 {
        use_consumable(w, 0);
    }
    if input.use_slot_2 {
        use_consumable(w, 1);
    }
    if input.combine {
        combine(w);
    }
    auto_fire(w);

    // ── 移動 ────────────────────────────────────────────────────
    w.player.x = (w.player.x + w.player.vx * dt).clamp(PLAYER_HALF_W, SCREEN_WIDTH - PLAYER_HALF_W);
    w.player.y = (w.player.y + w.player.vy * dt).clamp(PLAYER_HALF_H, SCREEN_HEIGHT - PLAYER_HALF_H);
    integrate_bodies(w, dt);
    update_boss(w, dt);

    // ── 衝突 → ミス判定（ボス突入はこの中の最後） ─────────────────
    detect_collisions(w);
    resolve_collisions(w);
    if !w.run.game_over {
        scan_misses(w);
    }

    record_frame_time(w, t_start);
}

/// 弾・セル・薬剤を速度で進める。治癒済みセルは期限で消え、画面外の薬剤は消える。
fn integrate_bodies(w: &mut GameWorld, dt: f32) {
    move_bullets(w, dt);

    for i in 0..w.cells.len() {
        if !w.cells.alive[i] {
            continue;
        }
        if w.cells.cured[i] && w.now_ms >= w.cells.despawn_at_ms[i] {
            w.cells.kill(i);
            continue;
        }
        w.cells.positions_y[i] += w.cells.velocities_y[i] * dt;
    }

    for i in 0..w.pickups.len() {
        if !w.pickups.alive[i] {
            continue;
        }
        w.pickups.positions_y[i] += w.pickups.velocities_y[i] * dt;
        if w.pickups.positions_y[i] > CELL_MISS_Y {
            w.pickups.kill(i);
        }
    }
}

fn record_frame_time(w: &mut GameWorld, t_start: std::time::Instant) {
    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
    w.last_frame_time_ms = elapsed_ms;
    if elapsed_ms > FRAME_BUDGET_MS {
        log::warn!(
            "frame budget exceeded: {:.2}ms (cells: {}, bullets: {})",
            elapsed_ms,
            w.cells.count,
            w.bullets.count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::test_world;
    use crate::world::{EncounterState, FrameEvent};
    use cure_core::constants::{CELL_SPAWN_Y, PLAYER_SPAWN_X};
    use cure_core::phase::Phase;

    fn idle() -> InputState {
        InputState::default()
    }

    #[test]
    fn player_moves_and_is_clamped() {
        let mut w = test_world();
        let right = InputState { right: true, ..idle() };
        physics_step(&mut w, 100, &right);
        assert!((w.player.x - (PLAYER_SPAWN_X + 35.0)).abs() < 0.01);
        for _ in 0..100 {
            physics_step(&mut w, 16, &right);
        }
        assert_eq!(w.player.x, SCREEN_WIDTH - PLAYER_HALF_W);
    }

    #[test]
    fn one_miss_from_start() {
        let mut w = test_world();
        w.cells.spawn(100.0, CELL_MISS_Y - 1.0, 10, 140.0, 1.0);
        physics_step(&mut w, 16, &idle());
        assert_eq!(w.run.stability, 17);
        assert_eq!(w.run.phase, Phase::Veins);
    }

    #[test]
    fn seven_misses_in_one_tick_end_the_game_once() {
        let mut w = test_world();
        for k in 0..7 {
            w.cells.spawn(30.0 + k as f32 * 60.0, CELL_MISS_Y - 1.0, 10, 140.0, 1.0);
        }
        physics_step(&mut w, 16, &idle());
        assert_eq!(w.run.stability, 0);
        assert!(w.run.game_over);
        assert!(!w.run.boss_mode);
        assert_eq!(w.encounter.state, EncounterState::Inactive);

        for _ in 0..10 {
            physics_step(&mut w, 16, &idle());
        }
        let overs = w
            .drain_frame_events()
            .iter()
            .filter(|e| matches!(e, FrameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
        assert!(w.boss.is_none());
    }

    #[test]
    fn final_stand_body_appears_on_following_tick() {
        let mut w = test_world();
        w.run.stability = 10;
        w.cells.spawn(100.0, CELL_MISS_Y - 1.0, 10, 140.0, 1.0);
        physics_step(&mut w, 16, &idle());
        assert!(w.run.boss_mode);
        assert!(w.boss.is_none());
        physics_step(&mut w, 16, &idle());
        assert_eq!(w.encounter.state, EncounterState::Active);
        assert!(w.boss.is_some());
    }

    #[test]
    fn cured_cell_rises_then_despawns() {
        let mut w = test_world();
        let c = w.cells.spawn(30.0, 300.0, 1, 140.0, 1.0);
        crate::game_logic::systems::collision::hit_cell(&mut w, None, c, false);
        physics_step(&mut w, 16, &idle());
        assert!(w.cells.positions_y[c] < 300.0);
        for _ in 0..60 {
            physics_step(&mut w, 16, &idle());
        }
        assert!(!w.cells.alive[c]);
    }

    #[test]
    fn pickups_fall_off_the_bottom() {
        let mut w = test_world();
        w.run.inventory.collect(cure_core::consumable::ConsumableKind::Insulin);
        w.run.inventory.collect(cure_core::consumable::ConsumableKind::Insulin);
        let p = w.pickups.spawn(30.0, CELL_SPAWN_Y, cure_core::consumable::ConsumableKind::Adrenaline, 220.0, 1.0);
        for _ in 0..300 {
            physics_step(&mut w, 16, &idle());
        }
        assert!(!w.pickups.alive[p]);
    }

    #[test]
    fn invariants_hold_over_long_autopilot_free_run() {
        let mut w = test_world();
        let inputs = [
            InputState { left: true, ..idle() },
            InputState { right: true, use_slot_1: true, ..idle() },
            InputState { combine: true, ..idle() },
            InputState { up: true, use_slot_2: true, ..idle() },
        ];
        for t in 0..20_000usize {
            physics_step(&mut w, 16, &inputs[(t / 40) % inputs.len()]);
            assert!((0..=100).contains(&w.run.stability));
            assert!(w.run.inventory.len() <= 2);
            assert!(!(w.run.boss_mode && w.run.is_transitioning));
            if w.run.boss_mode && w.encounter.state == EncounterState::Active {
                assert!(w.boss.is_some());
            }
            w.frame_events.clear();
            if w.run.game_over {
                break;
            }
        }
    }
}
