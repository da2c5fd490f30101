//! Path: native/cure_sim/src/game_logic/mod.rs
//! Summary: 物理ステップ・タイマー処理・ゲームプレイ系システム

mod physics_step;
pub(crate) mod systems;
mod timers;

pub use physics_step::physics_step;
pub use systems::lifecycle::{end_game, reset_run, restart_run, skip_intro};

/// イントロを飛ばして開始済みのワールド
#[cfg(test)]
pub(crate) fn test_world() -> crate::world::GameWorld {
    let mut w = crate::world::GameWorld::new(cure_core::constants::DEFAULT_RNG_SEED);
    skip_intro(&mut w);
    w.frame_events.clear();
    w
}
