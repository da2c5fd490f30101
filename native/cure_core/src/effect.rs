//! Path: native/cure_core/src/effect.rs
//! Summary: 時限エフェクト（速度倍率・弾ダメージ・連射間隔）のレジストリ
//!
//! 種類ごとに高々 1 エントリ。再適用は加算せず上書き（後勝ち）し、
//! 期限を過ぎたエントリは削除されてベースライン値に戻る。

use rustc_hash::FxHashMap;
use serde::Serialize;

/// エフェクトの種類
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize)]
pub enum EffectKind {
    /// 敵セル・薬剤の落下速度倍率
    CellSpeed,
    /// ボスの追跡・突進速度倍率
    BossSpeed,
    /// 弾 1 発あたりのボスへのダメージ
    BulletDamage,
    /// 連射間隔（ms）
    FireRate,
}

impl EffectKind {
    pub const ALL: [EffectKind; 4] = [
        Self::CellSpeed,
        Self::BossSpeed,
        Self::BulletDamage,
        Self::FireRate,
    ];

    /// エフェクトが切れたときに戻る値
    pub fn baseline(self) -> f32 {
        match self {
            Self::CellSpeed => 1.0,
            Self::BossSpeed => 1.0,
            Self::BulletDamage => 1.0,
            Self::FireRate => 250.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEffect {
    pub magnitude:     f32,
    /// None は reset されるまで永続
    pub expires_at_ms: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    active: FxHashMap<EffectKind, ActiveEffect>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `kind` の値を即座に `magnitude` にし、`duration_ms` 後にベースラインへ戻す。
    /// `duration_ms <= 0` は永続。既存エントリは置き換えられ、直前の値を返す。
    pub fn apply(
        &mut self,
        kind: EffectKind,
        magnitude: f32,
        duration_ms: i64,
        now_ms: u64,
    ) -> Option<ActiveEffect> {
        let expires_at_ms = (duration_ms > 0).then(|| now_ms.saturating_add(duration_ms as u64));
        self.active.insert(kind, ActiveEffect { magnitude, expires_at_ms })
    }

    /// 現在の実効値（エントリがなければベースライン）
    pub fn value(&self, kind: EffectKind) -> f32 {
        self.active
            .get(&kind)
            .map(|e| e.magnitude)
            .unwrap_or_else(|| kind.baseline())
    }

    pub fn entry(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.active.get(&kind)
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.active.contains_key(&kind)
    }

    /// 残り時間。永続・非アクティブは None。
    pub fn remaining_ms(&self, kind: EffectKind, now_ms: u64) -> Option<u64> {
        self.active
            .get(&kind)
            .and_then(|e| e.expires_at_ms)
            .map(|t| t.saturating_sub(now_ms))
    }

    /// 期限切れのエントリを削除し、ベースラインに戻った種類を返す（順序は EffectKind 順）
    pub fn expire_due(&mut self, now_ms: u64) -> Vec<EffectKind> {
        let mut expired: Vec<EffectKind> = self
            .active
            .iter()
            .filter(|(_, e)| e.expires_at_ms.is_some_and(|t| t <= now_ms))
            .map(|(&k, _)| k)
            .collect();
        expired.sort_unstable();
        for k in &expired {
            self.active.remove(k);
        }
        expired
    }

    /// 全エフェクトをベースラインへ戻す
    pub fn reset(&mut self) {
        self.active.clear();
    }

    pub fn cell_speed_mul(&self) -> f32 {
        self.value(EffectKind::CellSpeed)
    }

    pub fn boss_speed_mul(&self) -> f32 {
        self.value(EffectKind::BossSpeed)
    }

    pub fn bullet_damage(&self) -> u32 {
        self.value(EffectKind::BulletDamage).max(0.0).round() as u32
    }

    pub fn fire_rate_ms(&self) -> u64 {
        self.value(EffectKind::FireRate).max(0.0).round() as u64
    }
}
