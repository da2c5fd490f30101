//! Path: native/cure_sim/src/autopilot.rs
//! Summary: ヘッドレス実行用の簡易入力スクリプト

use crate::world::{GameWorld, InputState};
use cure_core::constants::BOSS_HALF_EXTENT;

/// 薬剤ボタンの連打間隔
const ACTION_COOLDOWN_MS: u64 = 600;
/// この数以上のセルが画面にいたら薬剤を使う
const CROWD_THRESHOLD: usize = 4;
/// ボスがこの距離まで近づいたら避ける
const DODGE_DISTANCE: f32 = 220.0;
const DEADZONE: f32 = 6.0;

#[derive(Clone, Debug, Default)]
pub struct Autopilot {
    next_action_ms: u64,
    advance_held:   bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_input(&mut self, w: &GameWorld) -> InputState {
        let mut input = InputState::default();

        // 会話中は 1 tick おきに advance（エッジ入力）
        if !w.run.is_active && !w.run.boss_mode {
            self.advance_held = !self.advance_held;
            input.advance = self.advance_held;
            return input;
        }
        self.advance_held = false;

        let target_x = if let Some(boss) = w.boss.as_ref() {
            let dx = w.player.x - boss.x;
            let dy = w.player.y - boss.y;
            if (dx * dx + dy * dy).sqrt() < DODGE_DISTANCE {
                // 近すぎる: ボスと反対側へ
                if dx >= 0.0 { boss.x + BOSS_HALF_EXTENT * 3.0 } else { boss.x - BOSS_HALF_EXTENT * 3.0 }
            } else {
                boss.x
            }
        } else {
            // 一番下（ミス寸前）のセルを狙う
            w.cells
                .active_indices()
                .max_by(|&a, &b| w.cells.positions_y[a].total_cmp(&w.cells.positions_y[b]))
                .map(|i| w.cells.positions_x[i])
                .unwrap_or(w.player.x)
        };
        if target_x < w.player.x - DEADZONE {
            input.left = true;
        } else if target_x > w.player.x + DEADZONE {
            input.right = true;
        }

        if w.now_ms >= self.next_action_ms && !w.run.inventory.is_empty() {
            let inv = &w.run.inventory;
            if w.run.boss_mode {
                if inv.is_full() {
                    input.combine = true;
                } else {
                    input.use_slot_1 = true;
                }
            } else if w.run.phase.is_final() && inv.is_full() {
                input.combine = true;
            } else if w.cells.active_indices().count() >= CROWD_THRESHOLD {
                input.use_slot_1 = true;
            }
            if input.combine || input.use_slot_1 {
                self.next_action_ms = w.now_ms + ACTION_COOLDOWN_MS;
            }
        }
        input
    }
}
