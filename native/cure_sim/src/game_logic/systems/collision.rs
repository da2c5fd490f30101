//! Path: native/cure_sim/src/game_logic/systems/collision.rs
//! Summary: 重なり検出（CollisionEvent キューへ積む）と、決まった順序での解決

use super::boss::{on_player_contact, on_projectile_hit};
use super::items::collect_pickup;
use super::phase::check_phase_progress;
use crate::world::{CollisionEvent, FrameEvent, GameWorld};
use cure_core::constants::{STABILITY_MAX, STAB_GAIN_ON_CURE};
use cure_core::util::clamp_stability;

/// 1 tick 分の重なりを検出してキューに積む。
/// 順序: 弾 vs セル → プレイヤー vs 薬剤 → 弾 vs ボス → ボス vs プレイヤー
pub(crate) fn detect_collisions(w: &mut GameWorld) {
    w.collision_events.clear();
    w.rebuild_collision();

    // 弾 vs セル（Spatial Hash で候補を絞る）
    for b in 0..w.bullets.len() {
        if !w.bullets.alive[b] {
            continue;
        }
        let bb = w.bullets.bounds(b);
        let query_r = bb.bounding_radius() + w.collision.cell_size;
        w.collision.query_nearby_into(bb.cx, bb.cy, query_r, &mut w.query_buf);
        for &c in &w.query_buf {
            if w.cells.is_active(c) && bb.overlaps(&w.cells.bounds(c)) {
                w.collision_events.push(CollisionEvent::CellHit { bullet: b, cell: c });
            }
        }
    }

    // プレイヤー vs 薬剤
    let pb = w.player.bounds();
    for p in w.pickups.alive_indices() {
        if pb.overlaps(&w.pickups.bounds(p)) {
            w.collision_events.push(CollisionEvent::PickupTouched { pickup: p });
        }
    }

    let Some(boss) = w.boss.as_ref() else {
        return;
    };
    let boss_box = boss.bounds();

    // 弾 vs ボス
    for b in 0..w.bullets.len() {
        if w.bullets.alive[b] && boss_box.overlaps(&w.bullets.bounds(b)) {
            w.collision_events.push(CollisionEvent::BossHit { bullet: b });
        }
    }

    // ボス vs プレイヤー
    if boss_box.overlaps(&pb) {
        w.collision_events.push(CollisionEvent::BossContact);
    }
}

/// キューを先頭から解決する。run が作り直されたら（ボス撃破・撃墜）残りは捨てる。
pub(crate) fn resolve_collisions(w: &mut GameWorld) {
    let epoch = w.run_epoch;
    let mut events = std::mem::take(&mut w.collision_events);
    for &ev in &events {
        if w.run_epoch != epoch || w.run.game_over {
            break;
        }
        match ev {
            CollisionEvent::CellHit { bullet, cell } => {
                // 1 発の弾は 1 体にしか当たらない
                if w.bullets.alive[bullet] {
                    hit_cell(w, Some(bullet), cell, false);
                }
            }
            CollisionEvent::PickupTouched { pickup } => collect_pickup(w, pickup),
            CollisionEvent::BossHit { bullet } => on_projectile_hit(w, bullet),
            CollisionEvent::BossContact => on_player_contact(w),
        }
    }
    events.clear();
    w.collision_events = events;
}

/// セルに 1 ダメージ。`wipe` は抗生物質による一掃で、安定度・フェーズ判定を行わない。
pub(crate) fn hit_cell(w: &mut GameWorld, bullet: Option<usize>, i: usize, wipe: bool) {
    if i >= w.cells.len() || !w.cells.is_active(i) {
        return;
    }
    if let Some(b) = bullet {
        w.bullets.kill(b);
    }

    let health = w.cells.health[i].saturating_sub(1);
    w.cells.health[i] = health;
    if health > 0 {
        w.frame_events.push(FrameEvent::CellDamaged { index: i, health });
        return;
    }

    w.cells.cure(i, w.now_ms);
    w.frame_events.push(FrameEvent::CellCured { index: i, wipe });
    if wipe {
        w.stats.wiped += 1;
        return;
    }
    w.stats.cured += 1;

    if w.run.stability < STABILITY_MAX {
        w.run.stability = clamp_stability(w.run.stability + STAB_GAIN_ON_CURE);
        w.frame_events.push(FrameEvent::StabilityChanged { stability: w.run.stability });
        check_phase_progress(w);
    }
}
