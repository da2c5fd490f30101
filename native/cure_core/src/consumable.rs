//! Path: native/cure_core/src/consumable.rs
//! Summary: 薬剤の種類と、落下中の薬剤ピックアップ SoA（PickupWorld）

use crate::constants::PICKUP_HALF_EXTENT;
use crate::physics::aabb::Aabb;
use crate::physics::rng::SimpleRng;
use serde::Serialize;

/// 薬剤の種類
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize)]
#[repr(u8)]
pub enum ConsumableKind {
    Insulin    = 0, // 敵を減速
    Adrenaline = 1, // 連射速度アップ
    Antibiotic = 2, // 画面内の敵を一掃（ボス戦ではダメージアップ）
    Nanoserum  = 3, // 合成でのみ入手
}

/// フィールドに落ちてくる薬剤（Nanoserum は落ちない）
pub const DROP_KINDS: [ConsumableKind; 3] = [
    ConsumableKind::Insulin,
    ConsumableKind::Adrenaline,
    ConsumableKind::Antibiotic,
];

impl ConsumableKind {
    /// HUD の ARSENAL 表示用
    pub fn label(self) -> &'static str {
        match self {
            Self::Insulin => "INSULIN",
            Self::Adrenaline => "ADRENALINE",
            Self::Antibiotic => "ANTIBIOTIC",
            Self::Nanoserum => "NANOSERUM",
        }
    }

    /// 落下する 3 種からランダムに選ぶ
    pub fn random_drop(rng: &mut SimpleRng) -> Self {
        rng.pick(&DROP_KINDS).copied().unwrap_or(Self::Insulin)
    }
}

/// 薬剤ピックアップ SoA（Structure of Arrays）
///
/// フリーリストにより消えたスロットを O(1) で再利用する。
pub struct PickupWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub velocities_y: Vec<f32>,
    /// 速度倍率を掛ける前の落下速度
    pub base_speeds:  Vec<f32>,
    pub kinds:        Vec<ConsumableKind>,
    pub alive:        Vec<bool>,
    pub count:        usize,
    free_list:        Vec<usize>,
}

impl PickupWorld {
    pub fn new() -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            velocities_y: Vec::new(),
            base_speeds:  Vec::new(),
            kinds:        Vec::new(),
            alive:        Vec::new(),
            count:        0,
            free_list:    Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 薬剤をスポーンしてスロット番号を返す。`speed_mul` は現在の CellSpeed 倍率。
    pub fn spawn(&mut self, x: f32, y: f32, kind: ConsumableKind, base_speed: f32, speed_mul: f32) -> usize {
        let vy = base_speed * speed_mul;
        let i = if let Some(i) = self.free_list.pop() {
            self.positions_x[i]  = x;
            self.positions_y[i]  = y;
            self.velocities_y[i] = vy;
            self.base_speeds[i]  = base_speed;
            self.kinds[i]        = kind;
            self.alive[i]        = true;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_y.push(vy);
            self.base_speeds.push(base_speed);
            self.kinds.push(kind);
            self.alive.push(true);
            self.positions_x.len() - 1
        };
        self.count += 1;
        i
    }

    /// 薬剤を消去し、スロットをフリーリストに返却する。
    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.len() {
            self.kill(i);
        }
    }

    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.alive.iter().enumerate().filter(|&(_, &a)| a).map(|(i, _)| i)
    }

    pub fn bounds(&self, i: usize) -> Aabb {
        Aabb::square(self.positions_x[i], self.positions_y[i], PICKUP_HALF_EXTENT)
    }
}

impl Default for PickupWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_applies_speed_multiplier() {
        let mut p = PickupWorld::new();
        let i = p.spawn(100.0, -50.0, ConsumableKind::Insulin, 220.0, 0.5);
        assert!((p.velocities_y[i] - 110.0).abs() < 0.001);
        assert!((p.base_speeds[i] - 220.0).abs() < 0.001);
        assert_eq!(p.count, 1);
    }

    #[test]
    fn killed_slot_is_reused() {
        let mut p = PickupWorld::new();
        let a = p.spawn(0.0, 0.0, ConsumableKind::Insulin, 200.0, 1.0);
        p.spawn(0.0, 0.0, ConsumableKind::Adrenaline, 200.0, 1.0);
        p.kill(a);
        p.kill(a);
        assert_eq!(p.count, 1);
        let c = p.spawn(1.0, 1.0, ConsumableKind::Antibiotic, 200.0, 1.0);
        assert_eq!(a, c);
        assert_eq!(p.len(), 2);
        assert_eq!(p.kinds[c], ConsumableKind::Antibiotic);
    }

    #[test]
    fn random_drop_never_yields_nanoserum() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..200 {
            assert_ne!(ConsumableKind::random_drop(&mut rng), ConsumableKind::Nanoserum);
        }
    }

    #[test]
    fn clear_kills_everything() {
        let mut p = PickupWorld::new();
        for _ in 0..4 {
            p.spawn(0.0, 0.0, ConsumableKind::Insulin, 200.0, 1.0);
        }
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.alive_indices().count(), 0);
    }
}
