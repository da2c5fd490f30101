//! Path: native/cure_sim/src/lib.rs
//! Summary: モジュール宣言と pub use のみ

mod autopilot;
mod config;
mod game_logic;
mod hud;
mod world;

pub use autopilot::Autopilot;
pub use config::RunnerConfig;
pub use game_logic::{end_game, physics_step, reset_run, restart_run, skip_intro};
pub use hud::{EffectHud, HudSnapshot};
pub use world::{
    BossState, BulletWorld, CellWorld, CollisionEvent, Encounter, EncounterOutcome,
    EncounterState, FrameEvent, GameWorld, InputState, PlayerState, RunState, RunStats,
    Scheduler, TimerKey,
};
