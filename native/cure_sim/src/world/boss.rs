//! Path: native/cure_sim/src/world/boss.rs
//! Summary: ボス本体（BossState）とボス戦の進行状態（Encounter）

use cure_core::constants::{BOSS_HALF_EXTENT, BOSS_MAX_HP, BOSS_SPAWN_X, BOSS_SPAWN_Y, PLAYER_BOSS_HP};
use cure_core::physics::aabb::Aabb;
use serde::Serialize;

/// ボス戦の段階
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub enum EncounterState {
    #[default]
    Inactive,
    /// ボスモードに入ったが本体はまだ出ていない
    Spawning,
    Active,
}

/// ボス戦の決着
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum EncounterOutcome {
    Defeated,
    PlayerDown,
    /// 本体が行方不明のまま時間切れ（ウォッチドッグ）
    Lost,
}

/// ボス本体
#[derive(Clone, Debug, PartialEq)]
pub struct BossState {
    pub x:  f32,
    pub y:  f32,
    pub vx: f32,
    pub vy: f32,
    pub hp: u32,
    /// この時刻までは被弾無効
    pub invulnerable_until_ms:   u64,
    /// 連続ヒットのクールダウン
    pub hit_cooldown_until_ms:   u64,
    /// プレイヤー接触ダメージのクールダウン
    pub touch_cooldown_until_ms: u64,
}

impl BossState {
    pub fn new(now_ms: u64, grace_ms: u64) -> Self {
        Self {
            x: BOSS_SPAWN_X,
            y: BOSS_SPAWN_Y,
            vx: 0.0,
            vy: 0.0,
            hp: BOSS_MAX_HP,
            invulnerable_until_ms: now_ms + grace_ms,
            hit_cooldown_until_ms: 0,
            touch_cooldown_until_ms: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.x, self.y, BOSS_HALF_EXTENT)
    }
}

/// ボス戦の進行状態。プレイヤー HP はボス戦中だけ意味を持つ。
#[derive(Clone, Debug, PartialEq)]
pub struct Encounter {
    pub state:         EncounterState,
    pub spawned_at_ms: Option<u64>,
    pub player_hp:     u32,
    pub last_outcome:  Option<EncounterOutcome>,
}

impl Encounter {
    pub fn new() -> Self {
        Self {
            state: EncounterState::Inactive,
            spawned_at_ms: None,
            player_hp: PLAYER_BOSS_HP,
            last_outcome: None,
        }
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self::new()
    }
}
