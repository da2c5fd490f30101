//! Path: native/cure_core/src/recipe.rs
//! Summary: 薬剤の単体使用・ボス戦コンボのエフェクトテーブル
//!
//! ボス戦コンボは順不同ペア（小さい方, 大きい方）で引き、該当しなければ
//! BALANCED_COMBO にフォールバックする。

use crate::consumable::ConsumableKind;
use crate::effect::EffectKind;

/// 1 回の使用で適用されるエフェクト群
#[derive(Clone, Copy, Debug)]
pub struct EffectRecipe {
    pub effects:     &'static [(EffectKind, f32)],
    pub duration_ms: i64,
    /// true なら同じ時間だけシールドを張る
    pub shield:      bool,
    pub notice:      &'static str,
    pub notice_ms:   u64,
}

/// 通常モードでの抗生物質は一掃攻撃なのでエフェクトではない
pub const NORMAL_WIPE_NOTICE: (&str, u64) = ("ANTIBIOTICS\nZone Wiped!", 700);

pub const NORMAL_COMBINE_NOTICE: (&str, u64) =
    ("COMBINE SUCCESS: NANO-SERUM READY (Purple)\nPress 1/2 to deploy", 1200);

static NORMAL_INSULIN: EffectRecipe = EffectRecipe {
    effects: &[(EffectKind::CellSpeed, 0.35)],
    duration_ms: 4000,
    shield: false,
    notice: "INSULIN DEPLOYED\nCells Slowed!",
    notice_ms: 700,
};

static NORMAL_ADRENALINE: EffectRecipe = EffectRecipe {
    effects: &[(EffectKind::FireRate, 100.0)],
    duration_ms: 6000,
    shield: false,
    notice: "ADRENALINE\nFire Rate Up!",
    notice_ms: 700,
};

static NORMAL_NANOSERUM: EffectRecipe = EffectRecipe {
    effects: &[(EffectKind::CellSpeed, 0.5), (EffectKind::FireRate, 85.0)],
    duration_ms: 6500,
    shield: true,
    notice: "NANO-SERUM\nSLOW + RAPID FIRE + SHIELD!",
    notice_ms: 900,
};

static BOSS_ANTIBIOTIC: EffectRecipe = EffectRecipe {
    effects: &[(EffectKind::BulletDamage, 3.0)],
    duration_ms: 5000,
    shield: false,
    notice: "ANTIBIOTICS ACTIVE\nDamage Boost!",
    notice_ms: 700,
};

static BOSS_INSULIN: EffectRecipe = EffectRecipe {
    effects: &[(EffectKind::BossSpeed, 0.45)],
    duration_ms: 4500,
    shield: false,
    notice: "INSULIN DEPLOYED\nBoss Slowed!",
    notice_ms: 700,
};

static BOSS_ADRENALINE: EffectRecipe = EffectRecipe {
    effects: &[(EffectKind::FireRate, 110.0)],
    duration_ms: 5000,
    shield: false,
    notice: "ADRENALINE\nFire Rate Up!",
    notice_ms: 700,
};

static BOSS_NANOSERUM: EffectRecipe = EffectRecipe {
    effects: &[
        (EffectKind::BossSpeed, 0.6),
        (EffectKind::BulletDamage, 2.0),
        (EffectKind::FireRate, 85.0),
    ],
    duration_ms: 6500,
    shield: true,
    notice: "NANO-SERUM\nBOOST + SLOW + SHIELD!",
    notice_ms: 900,
};

/// 通常モードの単体使用。抗生物質は一掃なので None。
pub fn normal_use(kind: ConsumableKind) -> Option<&'static EffectRecipe> {
    match kind {
        ConsumableKind::Antibiotic => None,
        ConsumableKind::Insulin => Some(&NORMAL_INSULIN),
        ConsumableKind::Adrenaline => Some(&NORMAL_ADRENALINE),
        ConsumableKind::Nanoserum => Some(&NORMAL_NANOSERUM),
    }
}

/// ボス戦の単体使用
pub fn boss_use(kind: ConsumableKind) -> &'static EffectRecipe {
    match kind {
        ConsumableKind::Antibiotic => &BOSS_ANTIBIOTIC,
        ConsumableKind::Insulin => &BOSS_INSULIN,
        ConsumableKind::Adrenaline => &BOSS_ADRENALINE,
        ConsumableKind::Nanoserum => &BOSS_NANOSERUM,
    }
}

/// ペアに当てはまらない組み合わせ（同種 2 つを含む）
pub static BALANCED_COMBO: EffectRecipe = EffectRecipe {
    effects: &[
        (EffectKind::BossSpeed, 0.6),
        (EffectKind::BulletDamage, 2.0),
        (EffectKind::FireRate, 95.0),
    ],
    duration_ms: 5500,
    shield: false,
    notice: "COMBO: SYNTHESIS\nBalanced Boost!",
    notice_ms: 800,
};

/// キーは (小さい方, 大きい方) に正規化済み
static BOSS_COMBOS: [((ConsumableKind, ConsumableKind), EffectRecipe); 3] = [
    (
        (ConsumableKind::Adrenaline, ConsumableKind::Antibiotic),
        EffectRecipe {
            effects: &[(EffectKind::FireRate, 75.0), (EffectKind::BulletDamage, 4.0)],
            duration_ms: 6000,
            shield: false,
            notice: "COMBO: RAGE BURST\nFast Fire + Huge Damage!",
            notice_ms: 900,
        },
    ),
    (
        (ConsumableKind::Insulin, ConsumableKind::Antibiotic),
        EffectRecipe {
            effects: &[(EffectKind::BossSpeed, 0.35), (EffectKind::BulletDamage, 3.0)],
            duration_ms: 6000,
            shield: false,
            notice: "COMBO: SUPPRESSION\nBoss Slow + Damage Up!",
            notice_ms: 900,
        },
    ),
    (
        (ConsumableKind::Insulin, ConsumableKind::Adrenaline),
        EffectRecipe {
            effects: &[(EffectKind::BossSpeed, 0.4), (EffectKind::FireRate, 80.0)],
            duration_ms: 6000,
            shield: false,
            notice: "COMBO: OVERCLOCK\nBoss Slow + Rapid Fire!",
            notice_ms: 900,
        },
    ),
];

fn unordered(a: ConsumableKind, b: ConsumableKind) -> (ConsumableKind, ConsumableKind) {
    if a <= b { (a, b) } else { (b, a) }
}

/// ボス戦コンボ（順不同）
pub fn boss_combo(a: ConsumableKind, b: ConsumableKind) -> &'static EffectRecipe {
    let key = unordered(a, b);
    BOSS_COMBOS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, r)| r)
        .unwrap_or(&BALANCED_COMBO)
}
