//! Path: native/cure_sim/src/world/collision_event.rs
//! Summary: 重なり検出の結果キュー（1 tick に 1 回、決まった順序で解決する）

/// 検出順 = 解決順: CellHit → PickupTouched → BossHit → BossContact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    CellHit       { bullet: usize, cell: usize },
    PickupTouched { pickup: usize },
    BossHit       { bullet: usize },
    BossContact,
}
