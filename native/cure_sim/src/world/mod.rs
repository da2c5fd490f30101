//! Path: native/cure_sim/src/world/mod.rs
//! Summary: ワールド型（RunState, CellWorld, BulletWorld, BossState, Scheduler, GameWorld）

mod boss;
mod bullet;
mod cell;
mod collision_event;
mod frame_event;
mod game_world;
mod input;
mod player;
mod run_state;
mod scheduler;

pub use boss::{BossState, Encounter, EncounterOutcome, EncounterState};
pub use bullet::BulletWorld;
pub use cell::CellWorld;
pub use collision_event::CollisionEvent;
pub use frame_event::FrameEvent;
pub use game_world::{GameWorld, RunStats};
pub use input::InputState;
pub use player::PlayerState;
pub use run_state::RunState;
pub use scheduler::{Scheduler, TimerKey};
