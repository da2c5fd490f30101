//! Path: native/cure_sim/src/world/input.rs
//! Summary: 1 tick 分の入力（方向はレベル、アクションはエッジ）

/// キーボード・タッチは上流で統合済みの前提
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left:       bool,
    pub right:      bool,
    pub up:         bool,
    pub down:       bool,
    /// 以下はこの tick に押された瞬間だけ true
    pub use_slot_1: bool,
    pub use_slot_2: bool,
    pub combine:    bool,
    pub advance:    bool,
}
