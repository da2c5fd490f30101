//! Path: native/cure_sim/src/world/cell.rs
//! Summary: 敵セル SoA（CellWorld）。体力 0 で治癒状態になり、表示遅延のあと消える

use cure_core::constants::{CELL_HALF_EXTENT, CURED_DESPAWN_MS, CURED_RISE_SPEED};
use cure_core::physics::aabb::Aabb;

/// 敵セル SoA（Structure of Arrays）
#[derive(Clone)]
pub struct CellWorld {
    pub positions_x:   Vec<f32>,
    pub positions_y:   Vec<f32>,
    pub velocities_y:  Vec<f32>,
    /// 速度倍率を掛ける前の落下速度
    pub base_speeds:   Vec<f32>,
    /// 頭上に表示する残り体力
    pub health:        Vec<u32>,
    pub alive:         Vec<bool>,
    /// 治癒済み（以後の衝突対象外）
    pub cured:         Vec<bool>,
    /// 治癒済みセルを消す時刻
    pub despawn_at_ms: Vec<u64>,
    pub count:         usize,
    /// 空きスロットのインデックススタック（O(1) で取得・返却）
    free_list:         Vec<usize>,
}

impl CellWorld {
    pub fn new() -> Self {
        Self {
            positions_x:   Vec::new(),
            positions_y:   Vec::new(),
            velocities_y:  Vec::new(),
            base_speeds:   Vec::new(),
            health:        Vec::new(),
            alive:         Vec::new(),
            cured:         Vec::new(),
            despawn_at_ms: Vec::new(),
            count:         0,
            free_list:     Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// セルをスポーンしてスロット番号を返す
    pub fn spawn(&mut self, x: f32, y: f32, health: u32, base_speed: f32, speed_mul: f32) -> usize {
        let vy = base_speed * speed_mul;
        let i = if let Some(i) = self.free_list.pop() {
            self.positions_x[i]   = x;
            self.positions_y[i]   = y;
            self.velocities_y[i]  = vy;
            self.base_speeds[i]   = base_speed;
            self.health[i]        = health;
            self.alive[i]         = true;
            self.cured[i]         = false;
            self.despawn_at_ms[i] = 0;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_y.push(vy);
            self.base_speeds.push(base_speed);
            self.health.push(health);
            self.alive.push(true);
            self.cured.push(false);
            self.despawn_at_ms.push(0);
            self.positions_x.len() - 1
        };
        self.count += 1;
        i
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

    /// 生存していて、まだ治癒していない（当たり判定・ミス判定の対象）
    pub fn is_active(&self, i: usize) -> bool {
        self.alive[i] && !self.cured[i]
    }

    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.is_active(i))
    }

    /// 治癒状態へ: 上向きに飛ばし、`CURED_DESPAWN_MS` 後に消える
    pub fn cure(&mut self, i: usize, now_ms: u64) {
        self.cured[i] = true;
        self.velocities_y[i] = -CURED_RISE_SPEED;
        self.despawn_at_ms[i] = now_ms + CURED_DESPAWN_MS;
    }

    pub fn bounds(&self, i: usize) -> Aabb {
        Aabb::square(self.positions_x[i], self.positions_y[i], CELL_HALF_EXTENT)
    }
}

impl Default for CellWorld {
    fn default() -> Self {
        Self::new()
    }
}
