//! Path: native/cure_core/src/physics/aabb.rs
//! Summary: 中心 + 半幅で表す軸平行矩形と重なり判定

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub cx:     f32,
    pub cy:     f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn new(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self { cx, cy, half_w, half_h }
    }

    pub fn square(cx: f32, cy: f32, half: f32) -> Self {
        Self::new(cx, cy, half, half)
    }

    /// 辺が接しているだけの場合は重なりとみなさない
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.cx - other.cx).abs() < self.half_w + other.half_w
            && (self.cy - other.cy).abs() < self.half_h + other.half_h
    }

    /// 広域クエリ用の外接円半径
    pub fn bounding_radius(&self) -> f32 {
        (self.half_w * self.half_w + self.half_h * self.half_h).sqrt()
    }
}
