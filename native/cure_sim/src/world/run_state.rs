//! Path: native/cure_sim/src/world/run_state.rs
//! Summary: 1 回の run の進行状態（安定度・フェーズ・インベントリ・各種フラグ）

use cure_core::constants::STABILITY_START;
use cure_core::inventory::Inventory;
use cure_core::phase::Phase;

#[derive(Clone, Debug, PartialEq)]
pub struct RunState {
    /// 0..=100
    pub stability:        i32,
    pub phase:            Phase,
    pub inventory:        Inventory,
    /// イントロ終了後に true（スポーン・入力が有効）
    pub is_active:        bool,
    pub is_transitioning: bool,
    pub boss_mode:        bool,
    pub game_over:        bool,
    pub dialogue_index:   usize,
    /// 移行中に切り替え待ちのフェーズ
    pub pending_phase:    Option<Phase>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            stability: STABILITY_START,
            phase: Phase::Veins,
            inventory: Inventory::new(),
            is_active: false,
            is_transitioning: false,
            boss_mode: false,
            game_over: false,
            dialogue_index: 0,
            pending_phase: None,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
