//! Path: native/cure_core/src/physics/mod.rs
//! Summary: 物理モジュールの再エクスポート（AABB・RNG・空間ハッシュ）

pub mod aabb;
pub mod rng;
pub mod spatial_hash;
