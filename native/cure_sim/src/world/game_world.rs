//! Path: native/cure_sim/src/world/game_world.rs
//! Summary: ゲームワールド（GameWorld）。1 つの run の全状態を所有する

use super::{
    BossState, BulletWorld, CellWorld, CollisionEvent, Encounter, FrameEvent, PlayerState,
    RunState, Scheduler,
};
use cure_core::consumable::PickupWorld;
use cure_core::constants::CELL_SIZE;
use cure_core::effect::EffectRegistry;
use cure_core::physics::rng::SimpleRng;
use cure_core::physics::spatial_hash::SpatialHash;
use serde::Serialize;

/// セッション通算の集計（run の再起動ではリセットしない）
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub cured:  u32,
    pub wiped:  u32,
    pub missed: u32,
}

pub struct GameWorld {
    pub frame_id:           u32,
    /// シミュレーション時刻（ms）。tick ごとに delta を加算するだけ。
    pub now_ms:             u64,
    /// run を作り直すたびに +1。古い run 向けの処理を打ち切る判定に使う。
    pub run_epoch:          u32,
    pub run:                RunState,
    pub effects:            EffectRegistry,
    pub scheduler:          Scheduler,
    pub player:             PlayerState,
    pub cells:              CellWorld,
    pub pickups:            PickupWorld,
    pub bullets:            BulletWorld,
    pub boss:               Option<BossState>,
    pub encounter:          Encounter,
    pub rng:                SimpleRng,
    /// 生存セルの Spatial Hash（弾 vs セルの広域判定）
    pub collision:          SpatialHash,
    /// クエリ用バッファ（毎フレーム再利用）
    pub query_buf:          Vec<usize>,
    /// 検出済み・未解決の衝突
    pub collision_events:   Vec<CollisionEvent>,
    /// このフレームで発生したイベント（毎フレーム drain される）
    pub frame_events:       Vec<FrameEvent>,
    /// 次に発射できる時刻の基準（`now > last_fired_ms` で発射）
    pub last_fired_ms:      u64,
    /// ゲームオーバーで物理を止める
    pub physics_paused:     bool,
    /// 直近 tick の処理時間（ms）
    pub last_frame_time_ms: f64,
    pub stats:              RunStats,
    /// シールド解除タイマーの連番
    pub shield_seq:         u32,
}

impl GameWorld {
    pub fn new(seed: u64) -> Self {
        Self {
            frame_id: 0,
            now_ms: 0,
            run_epoch: 0,
            run: RunState::new(),
            effects: EffectRegistry::new(),
            scheduler: Scheduler::new(),
            player: PlayerState::new(),
            cells: CellWorld::new(),
            pickups: PickupWorld::new(),
            bullets: BulletWorld::new(),
            boss: None,
            encounter: Encounter::new(),
            rng: SimpleRng::new(seed),
            collision: SpatialHash::new(CELL_SIZE),
            query_buf: Vec::new(),
            collision_events: Vec::new(),
            frame_events: Vec::new(),
            last_fired_ms: 0,
            physics_paused: false,
            last_frame_time_ms: 0.0,
            stats: RunStats::default(),
            shield_seq: 0,
        }
    }

    /// このフレームまでに溜まったイベントを取り出す
    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.frame_events)
    }

    /// 衝突判定用の Spatial Hash を再構築する（治癒済みセルは入れない）
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.clear();
        for i in 0..self.cells.len() {
            if self.cells.is_active(i) {
                self.collision.insert(i, self.cells.positions_x[i], self.cells.positions_y[i]);
            }
        }
    }
}
