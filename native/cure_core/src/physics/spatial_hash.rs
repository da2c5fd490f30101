//! Path: native/cure_core/src/physics/spatial_hash.rs
//! Summary: 空間ハッシュによる近傍クエリ（弾 vs セルの広域判定用）

use rustc_hash::FxHashMap;

pub struct SpatialHash {
    pub cell_size: f32,
    cells: FxHashMap<(i32, i32), Vec<usize>>,
}

impl SpatialHash {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn insert(&mut self, id: usize, x: f32, y: f32) {
        let key = self.cell_key(x, y);
        self.cells.entry(key).or_default().push(id);
    }

    fn cell_key(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// 指定円の範囲内にあるエンティティ ID を `buf` に書き込む（アロケーションなし）。
    /// 呼び出し前に `buf` をクリアする必要はない（内部で `clear()` する）。
    pub fn query_nearby_into(&self, x: f32, y: f32, radius: f32, buf: &mut Vec<usize>) {
        buf.clear();
        let r = (radius / self.cell_size).ceil() as i32;
        let cx = (x / self.cell_size).floor() as i32;
        let cy = (y / self.cell_size).floor() as i32;
        for ix in (cx - r)..=(cx + r) {
            for iy in (cy - r)..=(cy + r) {
                if let Some(ids) = self.cells.get(&(ix, iy)) {
                    buf.extend_from_slice(ids);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_finds_neighbours_and_skips_far_ids() {
        let mut h = SpatialHash::new(64.0);
        h.insert(0, 10.0, 10.0);
        h.insert(1, 70.0, 10.0);
        h.insert(2, 400.0, 700.0);
        let mut buf = vec![99];
        h.query_nearby_into(30.0, 30.0, 40.0, &mut buf);
        buf.sort_unstable();
        assert_eq!(buf, vec![0, 1]);
    }

    #[test]
    fn negative_coordinates_hash_separately() {
        let mut h = SpatialHash::new(64.0);
        h.insert(7, 100.0, -50.0);
        let mut buf = Vec::new();
        h.query_nearby_into(100.0, -40.0, 10.0, &mut buf);
        assert_eq!(buf, vec![7]);
        h.clear();
        h.query_nearby_into(100.0, -40.0, 10.0, &mut buf);
        assert!(buf.is_empty());
    }
}
