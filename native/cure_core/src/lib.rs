//! Path: native/cure_core/src/lib.rs
//! Summary: ゲームルール共通定義（定数・フェーズ・薬剤・エフェクト・物理プリミティブ）

pub mod constants;
pub mod consumable;
pub mod dialogue;
pub mod effect;
pub mod inventory;
pub mod phase;
pub mod physics;
pub mod recipe;
pub mod util;
