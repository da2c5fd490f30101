//! Path: native/cure_sim/src/game_logic/systems/effects.rs
//! Summary: エフェクト適用・セル速度の再計算・シールド・通知

use crate::world::{FrameEvent, GameWorld, TimerKey};
use cure_core::effect::EffectKind;
use cure_core::recipe::EffectRecipe;

/// 画面中央の一時通知
pub(crate) fn notify(w: &mut GameWorld, text: &'static str, duration_ms: u64) {
    w.frame_events.push(FrameEvent::Notify { text, duration_ms });
}

pub(crate) fn set_shield(w: &mut GameWorld, on: bool) {
    if w.player.shielded == on {
        return;
    }
    w.player.shielded = on;
    w.frame_events.push(FrameEvent::ShieldChanged { on });
}

/// レジストリに書き込み、CellSpeed なら生存中の全セル・薬剤へ即反映する
pub(crate) fn apply_effect(w: &mut GameWorld, kind: EffectKind, magnitude: f32, duration_ms: i64) {
    let prev = w.effects.apply(kind, magnitude, duration_ms, w.now_ms);
    log::debug!(
        "effect {:?}: {} for {}ms (prev {:?})",
        kind,
        magnitude,
        duration_ms,
        prev.map(|e| e.magnitude)
    );
    if kind == EffectKind::CellSpeed {
        apply_cell_speed(w);
    }
}

pub(crate) fn apply_recipe(w: &mut GameWorld, recipe: &EffectRecipe) {
    for &(kind, magnitude) in recipe.effects {
        apply_effect(w, kind, magnitude, recipe.duration_ms);
    }
    if recipe.shield {
        set_shield(w, true);
        if recipe.duration_ms > 0 {
            // 使用ごとに独立。先に使った分の解除で後のシールドも切れる。
            w.shield_seq = w.shield_seq.wrapping_add(1);
            w.scheduler.after(TimerKey::ShieldOff(w.shield_seq), w.now_ms, recipe.duration_ms as u64);
        }
    }
    notify(w, recipe.notice, recipe.notice_ms);
}

/// 実効速度 = base_speed × 現在の CellSpeed 倍率。
/// フェーズ移行中は全体が停止しているので触らない（再開時に呼ばれる）。
pub(crate) fn apply_cell_speed(w: &mut GameWorld) {
    if w.run.is_transitioning {
        return;
    }
    let mul = w.effects.cell_speed_mul();
    for i in 0..w.cells.len() {
        if w.cells.is_active(i) {
            w.cells.velocities_y[i] = w.cells.base_speeds[i] * mul;
        }
    }
    for i in 0..w.pickups.len() {
        if w.pickups.alive[i] {
            w.pickups.velocities_y[i] = w.pickups.base_speeds[i] * mul;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::test_world;
    use cure_core::consumable::ConsumableKind;
    use cure_core::recipe::normal_use;

    #[test]
    fn cell_speed_reapplies_to_live_bodies() {
        let mut w = test_world();
        let c = w.cells.spawn(100.0, 100.0, 10, 140.0, 1.0);
        let p = w.pickups.spawn(200.0, 100.0, ConsumableKind::Insulin, 220.0, 1.0);
        apply_effect(&mut w, EffectKind::CellSpeed, 0.35, 4000);
        assert!((w.cells.velocities_y[c] - 49.0).abs() < 0.01);
        assert!((w.pickups.velocities_y[p] - 77.0).abs() < 0.01);
    }

    #[test]
    fn cured_cells_keep_rising() {
        let mut w = test_world();
        let c = w.cells.spawn(100.0, 100.0, 1, 140.0, 1.0);
        w.cells.cure(c, w.now_ms);
        apply_effect(&mut w, EffectKind::CellSpeed, 0.5, 1000);
        assert!(w.cells.velocities_y[c] < 0.0);
    }

    #[test]
    fn shield_recipe_schedules_shield_off() {
        let mut w = test_world();
        let recipe = normal_use(ConsumableKind::Nanoserum).expect("nanoserum recipe");
        apply_recipe(&mut w, recipe);
        assert!(w.player.shielded);
        assert_eq!(w.scheduler.due_at(TimerKey::ShieldOff(w.shield_seq)), Some(w.now_ms + 6500));
        assert_eq!(w.effects.fire_rate_ms(), 85);
        assert!(w
            .frame_events
            .iter()
            .any(|e| matches!(e, FrameEvent::ShieldChanged { on: true })));
    }
}
