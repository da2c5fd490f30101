//! Path: native/cure_core/src/phase.rs
//! Summary: フェーズ（VEINS / ORGANS / NEURAL_CORE）とフェーズ別スポーンパラメータテーブル

use serde::Serialize;

/// 難易度フェーズ（ボス戦前の 3 段階）
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Serialize)]
#[repr(u8)]
pub enum Phase {
    #[default]
    Veins      = 0,
    Organs     = 1,
    NeuralCore = 2,
}

impl Phase {
    pub fn params(self) -> &'static PhaseParams {
        &PHASE_TABLE[self as usize]
    }

    /// 最終フェーズ（C キーで合成可能）
    pub fn is_final(self) -> bool {
        self == Self::NeuralCore
    }

    /// フェーズ移行時のバナー本文。Veins へは移行しないので None。
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Veins => None,
            Self::Organs => Some(
                "VIRAL SPREAD DETECTED\n\nThe infection has reached the VITAL ORGANS.\nBlood flow accelerates... targets harden.\n\n[ STABILIZE NOW ]",
            ),
            Self::NeuralCore => Some(
                "CRITICAL BREACH\n\nThe virus has reached the NEURAL CORE.\nNeural signals spike... defenses escalate.\n\n[ STABILIZE NOW ]",
            ),
        }
    }
}

/// フェーズ別パラメータ
#[derive(Clone, Copy, Debug)]
pub struct PhaseParams {
    /// HUD 表示名
    pub name:           &'static str,
    /// 背景テクスチャキー（描画側に渡すだけ）
    pub background:     &'static str,
    pub spawn_delay_ms: u64,
    pub enemy_speed:    f32,
    pub enemy_health:   u32,
    /// 敵スポーン時に薬剤も落とす確率
    pub med_chance:     f32,
}

static PHASE_TABLE: [PhaseParams; 3] = [
    PhaseParams { name: "THE VEINS",        background: "bg1", spawn_delay_ms: 1900, enemy_speed: 140.0, enemy_health: 10, med_chance: 0.25 },
    PhaseParams { name: "THE VITAL ORGANS", background: "bg2", spawn_delay_ms: 1600, enemy_speed: 175.0, enemy_health: 13, med_chance: 0.32 },
    PhaseParams { name: "THE NEURAL CORE",  background: "bg3", spawn_delay_ms: 1150, enemy_speed: 220.0, enemy_health: 16, med_chance: 0.35 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_escalate() {
        let v = Phase::Veins.params();
        let o = Phase::Organs.params();
        let n = Phase::NeuralCore.params();
        assert!(v.spawn_delay_ms > o.spawn_delay_ms && o.spawn_delay_ms > n.spawn_delay_ms);
        assert!(v.enemy_speed < o.enemy_speed && o.enemy_speed < n.enemy_speed);
        assert_eq!((v.enemy_health, o.enemy_health, n.enemy_health), (10, 13, 16));
    }

    #[test]
    fn only_final_phase_is_final() {
        assert!(!Phase::Veins.is_final());
        assert!(!Phase::Organs.is_final());
        assert!(Phase::NeuralCore.is_final());
        assert!(Phase::Veins.banner().is_none());
        assert!(Phase::NeuralCore.banner().expect("banner").contains("NEURAL CORE"));
    }
}
