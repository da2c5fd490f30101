//! Path: native/cure_sim/src/hud.rs
//! Summary: GameWorld から HUD 表示用スナップショットを構築
//!
//! 描画側は色やフォントを持つので、ここではテキストと数値だけを渡す。

use crate::world::{GameWorld, RunStats};
use cure_core::consumable::ConsumableKind;
use cure_core::effect::EffectKind;
use cure_core::phase::Phase;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EffectHud {
    pub kind:         EffectKind,
    pub magnitude:    f32,
    /// 永続エフェクトは None
    pub remaining_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub frame_id:         u32,
    pub now_ms:           u64,
    pub phase:            Phase,
    pub phase_name:       &'static str,
    pub stability:        i32,
    pub shielded:         bool,
    pub arsenal:          Vec<ConsumableKind>,
    /// "INSULIN | ADRENALINE" / "EMPTY"
    pub arsenal_label:    String,
    /// 最終フェーズ（通常モード）のみ合成ヒントを出す
    pub combine_hint:     bool,
    pub is_active:        bool,
    pub is_transitioning: bool,
    pub boss_mode:        bool,
    pub game_over:        bool,
    pub boss_hp:          Option<u32>,
    pub player_hp:        Option<u32>,
    pub effects:          Vec<EffectHud>,
    pub cells:            usize,
    pub pickups:          usize,
    pub bullets:          usize,
    pub stats:            RunStats,
}

impl HudSnapshot {
    pub fn capture(w: &GameWorld) -> Self {
        let effects = EffectKind::ALL
            .iter()
            .filter_map(|&kind| {
                w.effects.entry(kind).map(|e| EffectHud {
                    kind,
                    magnitude: e.magnitude,
                    remaining_ms: w.effects.remaining_ms(kind, w.now_ms),
                })
            })
            .collect();

        Self {
            frame_id: w.frame_id,
            now_ms: w.now_ms,
            phase: w.run.phase,
            phase_name: w.run.phase.params().name,
            stability: w.run.stability,
            shielded: w.player.shielded,
            arsenal: w.run.inventory.as_slice().to_vec(),
            arsenal_label: w.run.inventory.arsenal_label(),
            combine_hint: w.run.phase.is_final(),
            is_active: w.run.is_active,
            is_transitioning: w.run.is_transitioning,
            boss_mode: w.run.boss_mode,
            game_over: w.run.game_over,
            boss_hp: w.boss.as_ref().map(|b| b.hp),
            player_hp: w.boss.as_ref().map(|_| w.encounter.player_hp),
            effects,
            cells: w.cells.count,
            pickups: w.pickups.count,
            bullets: w.bullets.count,
            stats: w.stats,
        }
    }

    /// 左上のステータス表示
    pub fn status_text(&self) -> String {
        let mut text = format!(
            "PHASE: {}\nSTABILITY: {}%\nSHIELD: {}\nARSENAL: [{}]\n",
            self.phase_name,
            self.stability,
            if self.shielded { "ON" } else { "OFF" },
            self.arsenal_label,
        );
        if self.combine_hint {
            text.push_str("COMBINE: Press C (needs 2 meds)");
        }
        text
    }

    /// ボス戦中だけの 2 行
    pub fn boss_text(&self) -> Option<String> {
        let boss_hp = self.boss_hp?;
        let player_hp = self.player_hp.unwrap_or(0);
        Some(format!("VIRUS CORE: {}\nBOT INTEGRITY: {}", boss_hp, player_hp))
    }
}
