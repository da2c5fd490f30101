//! Path: native/cure_sim/src/game_logic/systems/projectiles.rs
//! Summary: 自動射撃と弾の移動・画面外回収

use crate::world::GameWorld;
use cure_core::constants::{BULLET_OFFSET_Y, BULLET_RECYCLE_Y, BULLET_SPEED};

/// 自動射撃。`now > last_fired_ms` なら 1 発撃ち、次の基準を now + 連射間隔にする。
pub(crate) fn auto_fire(w: &mut GameWorld) {
    if !w.run.is_active || w.now_ms <= w.last_fired_ms {
        return;
    }
    // プール満杯ならその 1 発はスキップ（間隔はリセットする）
    let _ = w.bullets.spawn(w.player.x, w.player.y - BULLET_OFFSET_Y, -BULLET_SPEED);
    w.last_fired_ms = w.now_ms + w.effects.fire_rate_ms();
}

/// 弾丸移動。画面上端を抜けたものはプールへ返却する。
pub(crate) fn move_bullets(w: &mut GameWorld, dt: f32) {
    for i in 0..w.bullets.len() {
        if !w.bullets.alive[i] {
            continue;
        }
        w.bullets.positions_y[i] += w.bullets.velocities_y[i] * dt;
        if w.bullets.positions_y[i] < BULLET_RECYCLE_Y {
            w.bullets.kill(i);
        }
    }
}
