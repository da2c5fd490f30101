//! Path: native/cure_sim/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）。プール上限つき

use cure_core::constants::{BULLET_HALF_H, BULLET_HALF_W, MAX_BULLETS};
use cure_core::physics::aabb::Aabb;

/// 弾丸 SoA（Structure of Arrays）
pub struct BulletWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub velocities_y: Vec<f32>,
    pub alive:        Vec<bool>,
    /// ボスへのヒットを解決済み（同じ弾で二重にダメージを入れない）
    pub resolved:     Vec<bool>,
    pub count:        usize,
    free_list:        Vec<usize>,
}

impl BulletWorld {
    pub fn new() -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            velocities_y: Vec::new(),
            alive:        Vec::new(),
            resolved:     Vec::new(),
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

    /// プールが満杯なら None（その発射はスキップ）
    pub fn spawn(&mut self, x: f32, y: f32, vy: f32) -> Option<usize> {
        if self.count >= MAX_BULLETS {
            return None;
        }
        let i = if let Some(i) = self.free_list.pop() {
            self.positions_x[i]  = x;
            self.positions_y[i]  = y;
            self.velocities_y[i] = vy;
            self.alive[i]        = true;
            self.resolved[i]     = false;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_y.push(vy);
            self.alive.push(true);
            self.resolved.push(false);
            self.positions_x.len() - 1
        };
        self.count += 1;
        Some(i)
    }

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

    pub fn bounds(&self, i: usize) -> Aabb {
        Aabb::new(self.positions_x[i], self.positions_y[i], BULLET_HALF_W, BULLET_HALF_H)
    }
}

impl Default for BulletWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_capped() {
        let mut b = BulletWorld::new();
        for _ in 0..MAX_BULLETS {
            assert!(b.spawn(0.0, 0.0, -800.0).is_some());
        }
        assert!(b.spawn(0.0, 0.0, -800.0).is_none());
        b.kill(3);
        assert_eq!(b.spawn(1.0, 1.0, -800.0), Some(3));
    }

    #[test]
    fn reused_bullet_is_unresolved() {
        let mut b = BulletWorld::new();
        let i = b.spawn(0.0, 0.0, -800.0).expect("bullet slot");
        b.resolved[i] = true;
        b.kill(i);
        let j = b.spawn(0.0, 0.0, -800.0).expect("bullet slot");
        assert_eq!(i, j);
        assert!(!b.resolved[j]);
    }
}
