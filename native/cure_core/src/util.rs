//! Path: native/cure_core/src/util.rs
//! Summary: 安定度のクランプ・スポーン位置・追跡方向などの共通ユーティリティ

use crate::constants::{CELL_SPAWN_MAX_X, CELL_SPAWN_MIN_X, STABILITY_MAX};
use crate::physics::rng::SimpleRng;

/// 安定度を [0, 100] に収める
pub fn clamp_stability(value: i32) -> i32 {
    value.clamp(0, STABILITY_MAX)
}

/// 画面上端のスポーン x 座標（50〜400 の整数）
pub fn spawn_x(rng: &mut SimpleRng) -> f32 {
    rng.range_i32(CELL_SPAWN_MIN_X as i32, CELL_SPAWN_MAX_X as i32) as f32
}

/// (from → to) の単位ベクトル。距離が 1 未満のときは 1 で割る（ゼロ除算回避）
pub fn direction_to(from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> (f32, f32) {
    let dx = to_x - from_x;
    let dy = to_y - from_y;
    let len = (dx * dx + dy * dy).sqrt().max(1.0);
    (dx / len, dy / len)
}
