//! Path: native/cure_sim/src/world/player.rs
//! Summary: プレイヤー状態（座標・速度・シールド）

use cure_core::constants::{PLAYER_HALF_H, PLAYER_HALF_W, PLAYER_SPAWN_X, PLAYER_SPAWN_Y};
use cure_core::physics::aabb::Aabb;

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub x:        f32,
    pub y:        f32,
    pub vx:       f32,
    pub vy:       f32,
    pub shielded: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            x: PLAYER_SPAWN_X,
            y: PLAYER_SPAWN_Y,
            vx: 0.0,
            vy: 0.0,
            shielded: false,
        }
    }

    pub fn respawn(&mut self) {
        self.x = PLAYER_SPAWN_X;
        self.y = PLAYER_SPAWN_Y;
        self.vx = 0.0;
        self.vy = 0.0;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, PLAYER_HALF_W, PLAYER_HALF_H)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
