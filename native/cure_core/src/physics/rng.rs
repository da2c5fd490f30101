//! Path: native/cure_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータ（スポーン位置・薬剤抽選用）

#[derive(Clone, Debug)]
pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// [0, 1) の一様乱数。next_u32 は 31 bit なので上位 24 bit を使う。
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 7) as f32 / (1u32 << 24) as f32
    }

    /// [min, max] の整数を一様に返す（min > max のときは min）
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u32 + 1;
        min + (self.next_u32() % span) as i32
    }

    /// 確率 `p` で true
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// スライスから 1 要素を選ぶ。空なら None。
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_u32() as usize % items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_reproducibility() {
        let mut rng = SimpleRng::new(12345);
        let a: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        let mut rng2 = SimpleRng::new(12345);
        let b: Vec<u32> = (0..10).map(|_| rng2.next_u32()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn range_i32_is_inclusive_and_bounded() {
        let mut rng = SimpleRng::new(999);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let v = rng.range_i32(50, 55);
            assert!((50..=55).contains(&v));
            seen_min |= v == 50;
            seen_max |= v == 55;
        }
        assert!(seen_min && seen_max);
        assert_eq!(rng.range_i32(9, 3), 9);
    }

    #[test]
    fn pick_empty_is_none() {
        let mut rng = SimpleRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.pick(&[42]), Some(&42));
    }

    #[test]
    fn next_f32_spans_unit_interval() {
        let mut rng = SimpleRng::new(67890);
        let mut max = 0.0f32;
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
            max = max.max(v);
        }
        assert!(max > 0.9);
    }

    #[test]
    fn chance_matches_requested_rate() {
        let mut rng = SimpleRng::new(67890);
        for p in [0.25f32, 0.32, 0.35] {
            let draws = 100_000;
            let hits = (0..draws).filter(|_| rng.chance(p)).count();
            let rate = hits as f32 / draws as f32;
            assert!((rate - p).abs() < 0.02, "chance({}) rate = {}", p, rate);
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }
}
