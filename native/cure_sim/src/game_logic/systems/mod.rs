//! Path: native/cure_sim/src/game_logic/systems/mod.rs
//! Summary: ゲームプレイ系システム

pub(crate) mod boss;
pub(crate) mod collision;
pub(crate) mod effects;
pub(crate) mod items;
pub(crate) mod lifecycle;
pub(crate) mod phase;
pub(crate) mod projectiles;
pub(crate) mod spawn;
