//! Path: native/cure_sim/src/game_logic/systems/items.rs
//! Summary: 薬剤の取得・使用・合成、抗生物質による一掃

use super::collision::hit_cell;
use super::effects::{apply_recipe, notify};
use crate::world::{FrameEvent, GameWorld};
use cure_core::consumable::ConsumableKind;
use cure_core::recipe::{boss_combo, boss_use, normal_use, NORMAL_COMBINE_NOTICE, NORMAL_WIPE_NOTICE};

/// プレイヤーが薬剤に触れた。所持枠が満杯なら薬剤は残る。
pub(crate) fn collect_pickup(w: &mut GameWorld, i: usize) {
    if i >= w.pickups.len() || !w.pickups.alive[i] {
        return;
    }
    let kind = w.pickups.kinds[i];
    if w.run.inventory.collect(kind) {
        w.pickups.kill(i);
        log::debug!("pickup {:?} -> [{}]", kind, w.run.inventory.arsenal_label());
        w.frame_events.push(FrameEvent::ItemPickup { kind });
    }
}

/// `slot` の薬剤を使う（空スロットは何もしない）
pub(crate) fn use_consumable(w: &mut GameWorld, slot: usize) {
    let Some(kind) = w.run.inventory.take(slot) else {
        return;
    };
    let boss_mode = w.run.boss_mode;
    w.frame_events.push(FrameEvent::ConsumableUsed { kind, boss_mode });

    if boss_mode {
        apply_recipe(w, boss_use(kind));
        return;
    }
    match normal_use(kind) {
        Some(recipe) => apply_recipe(w, recipe),
        None => {
            wipe(w);
            let (text, ms) = NORMAL_WIPE_NOTICE;
            notify(w, text, ms);
        }
    }
}

/// 先頭 2 つを合成する。ボス戦ではコンボ、通常時は最終フェーズでのみ Nanoserum を作る。
pub(crate) fn combine(w: &mut GameWorld) {
    let boss_mode = w.run.boss_mode;
    if boss_mode {
        let Some((first, second)) = w.run.inventory.take_pair() else {
            return;
        };
        w.frame_events.push(FrameEvent::Combined { first, second, boss_mode });
        apply_recipe(w, boss_combo(first, second));
        return;
    }

    if !w.run.phase.is_final() {
        return;
    }
    let Some((first, second)) = w.run.inventory.take_pair() else {
        return;
    };
    // 2 枠空いた直後なので必ず入る
    w.run.inventory.collect(ConsumableKind::Nanoserum);
    w.frame_events.push(FrameEvent::Combined { first, second, boss_mode });
    let (text, ms) = NORMAL_COMBINE_NOTICE;
    notify(w, text, ms);
}

/// 抗生物質: 画面内の全セルを一撃で治癒（安定度は増えない）
fn wipe(w: &mut GameWorld) {
    let targets: Vec<usize> = w.cells.active_indices().collect();
    log::debug!("wipe: {} cells", targets.len());
    for i in targets {
        w.cells.health[i] = 1;
        hit_cell(w, None, i, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::test_world;
    use crate::game_logic::timers::run_timers;
    use cure_core::phase::Phase;
    use ConsumableKind::*;

    fn hold(w: &mut GameWorld, kinds: &[ConsumableKind]) {
        w.run.inventory.clear();
        for &k in kinds {
            w.run.inventory.collect(k);
        }
    }

    #[test]
    fn collect_when_full_leaves_pickup_in_world() {
        let mut w = test_world();
        hold(&mut w, &[Insulin, Adrenaline]);
        let p = w.pickups.spawn(225.0, 700.0, Antibiotic, 220.0, 1.0);
        collect_pickup(&mut w, p);
        assert!(w.pickups.alive[p]);
        assert_eq!(w.run.inventory.as_slice(), &[Insulin, Adrenaline]);
    }

    #[test]
    fn collect_consumes_pickup() {
        let mut w = test_world();
        let p = w.pickups.spawn(225.0, 700.0, Antibiotic, 220.0, 1.0);
        collect_pickup(&mut w, p);
        assert!(!w.pickups.alive[p]);
        assert_eq!(w.run.inventory.as_slice(), &[Antibiotic]);
    }

    #[test]
    fn using_empty_slot_is_noop() {
        let mut w = test_world();
        hold(&mut w, &[Insulin]);
        use_consumable(&mut w, 1);
        assert_eq!(w.run.inventory.len(), 1);
        assert_eq!(w.effects.cell_speed_mul(), 1.0);
    }

    #[test]
    fn normal_insulin_slows_cells() {
        let mut w = test_world();
        hold(&mut w, &[Adrenaline, Insulin]);
        use_consumable(&mut w, 1);
        assert_eq!(w.effects.cell_speed_mul(), 0.35);
        assert_eq!(w.effects.remaining_ms(cure_core::effect::EffectKind::CellSpeed, w.now_ms), Some(4000));
        assert_eq!(w.run.inventory.as_slice(), &[Adrenaline]);
    }

    #[test]
    fn antibiotic_wipe_cures_without_stability_gain() {
        let mut w = test_world();
        let a = w.cells.spawn(100.0, 100.0, 10, 140.0, 1.0);
        let b = w.cells.spawn(300.0, 200.0, 16, 140.0, 1.0);
        let before = w.run.stability;
        hold(&mut w, &[Antibiotic]);
        use_consumable(&mut w, 0);
        assert!(!w.cells.is_active(a) && !w.cells.is_active(b));
        assert_eq!(w.run.stability, before);
        assert_eq!(w.stats.wiped, 2);
        assert!(w.run.inventory.is_empty());
    }

    #[test]
    fn boss_antibiotic_boosts_damage() {
        let mut w = test_world();
        w.run.boss_mode = true;
        hold(&mut w, &[Antibiotic]);
        use_consumable(&mut w, 0);
        assert_eq!(w.effects.bullet_damage(), 3);
    }

    #[test]
    fn boss_combine_overclock() {
        let mut w = test_world();
        w.run.boss_mode = true;
        hold(&mut w, &[Insulin, Adrenaline]);
        combine(&mut w);
        assert_eq!(w.effects.boss_speed_mul(), 0.4);
        assert_eq!(w.effects.fire_rate_ms(), 80);
        assert!(w.run.inventory.is_empty());
    }

    #[test]
    fn earlier_shield_timer_cuts_later_shield() {
        let mut w = test_world();
        w.run.boss_mode = true;
        let start = w.now_ms;
        hold(&mut w, &[Nanoserum]);
        use_consumable(&mut w, 0);
        assert!(w.player.shielded);

        w.now_ms = start + 3000;
        hold(&mut w, &[Nanoserum]);
        use_consumable(&mut w, 0);
        assert!(w.player.shielded);

        w.now_ms = start + 6600;
        run_timers(&mut w);
        assert!(!w.player.shielded);
    }

    #[test]
    fn combine_needs_two_items_in_both_modes() {
        let mut w = test_world();
        w.run.phase = Phase::NeuralCore;
        hold(&mut w, &[Insulin]);
        combine(&mut w);
        assert_eq!(w.run.inventory.as_slice(), &[Insulin]);

        w.run.boss_mode = true;
        combine(&mut w);
        assert_eq!(w.run.inventory.as_slice(), &[Insulin]);
        assert_eq!(w.effects.boss_speed_mul(), 1.0);
    }

    #[test]
    fn normal_combine_requires_final_phase() {
        let mut w = test_world();
        hold(&mut w, &[Insulin, Antibiotic]);
        w.run.phase = Phase::Organs;
        combine(&mut w);
        assert_eq!(w.run.inventory.len(), 2);

        w.run.phase = Phase::NeuralCore;
        combine(&mut w);
        assert_eq!(w.run.inventory.as_slice(), &[Nanoserum]);
    }
}
