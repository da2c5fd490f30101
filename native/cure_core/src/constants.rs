//! Path: native/cure_core/src/constants.rs
//! Summary: プレイフィールド寸法・移動速度・安定度/ボス調整値などの定数定義

// Playfield（縦長 450x800）
pub const SCREEN_WIDTH:  f32 = 450.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

// Player
pub const PLAYER_SPAWN_X: f32 = 225.0;
pub const PLAYER_SPAWN_Y: f32 = 700.0;
pub const PLAYER_SPEED:   f32 = 350.0;
pub const PLAYER_HALF_W:  f32 = 24.0;
pub const PLAYER_HALF_H:  f32 = 28.0;

// Projectile
pub const BULLET_SPEED:     f32 = 800.0;
pub const BULLET_OFFSET_Y:  f32 = 40.0;
pub const BULLET_HALF_W:    f32 = 4.0;
pub const BULLET_HALF_H:    f32 = 12.0;
/// これより上に出た弾はプールへ返却
pub const BULLET_RECYCLE_Y: f32 = -80.0;
pub const MAX_BULLETS:      usize = 250;

// Cell（赤血球型の敵）
pub const CELL_HALF_EXTENT: f32 = 26.0;
pub const CELL_SPAWN_Y:     f32 = -50.0;
pub const CELL_SPAWN_MIN_X: f32 = 50.0;
pub const CELL_SPAWN_MAX_X: f32 = 400.0;
/// この y を越えた生存セルはミス扱い
pub const CELL_MISS_Y:      f32 = 850.0;
/// 治癒したセルの上昇速度（px/s、上向き）
pub const CURED_RISE_SPEED: f32 = 400.0;
/// 治癒表示から消去までの遅延
pub const CURED_DESPAWN_MS: u64 = 900;

// Pickup（薬剤）
pub const PICKUP_HALF_EXTENT:   f32 = 18.0;
pub const PICKUP_WAVE_SPEED:    f32 = 220.0;
pub const PICKUP_BOSS_SPEED:    f32 = 200.0;
/// フェーズ移行後、薬剤は敵速度 + この値で落下する
pub const PICKUP_PHASE_BONUS:   f32 = 20.0;

// Stability
pub const STABILITY_START:     i32 = 20;
pub const STABILITY_MAX:       i32 = 100;
pub const STAB_GAIN_ON_CURE:   i32 = 2;
pub const STAB_LOSS_ON_MISS:   i32 = 3;
pub const FINAL_STAND_TRIGGER: i32 = 7;
pub const PHASE_1_THRESHOLD:   i32 = 40;
pub const PHASE_2_THRESHOLD:   i32 = 80;

// Inventory
pub const INVENTORY_CAPACITY: usize = 2;

// Phase transition timeline (ms)
pub const TRANSITION_FADE_IN_MS:  u64 = 650;
pub const TRANSITION_DWELL_MS:    u64 = 1400;
pub const TRANSITION_FADE_OUT_MS: u64 = 500;

// Intro
pub const INTRO_FADE_MS: u64 = 900;

// Boss
pub const BOSS_SPAWN_X:        f32 = 225.0;
pub const BOSS_SPAWN_Y:        f32 = 200.0;
pub const BOSS_HALF_EXTENT:    f32 = 56.0;
pub const BOSS_BOUNCE:         f32 = 0.6;
pub const BOSS_MAX_HP:         u32 = 50;
pub const BOSS_BASE_CHASE:     f32 = 85.0;
pub const BOSS_BASE_DASH:      f32 = 520.0;
pub const BOSS_DROP_INTERVAL_MS:   u64 = 2000;
pub const BOSS_CHARGE_INTERVAL_MS: u64 = 1200;
pub const BOSS_TELEGRAPH_MS:       u64 = 140;
pub const BOSS_HIT_COOLDOWN_MS:    u64 = 120;
pub const BOSS_HIT_FLASH_MS:       u64 = 60;
pub const BOSS_TOUCH_COOLDOWN_MS:  u64 = 1200;
pub const BOSS_TOUCH_DAMAGE:       u32 = 10;
/// ボス本体が見つからない状態がこの時間続いたら run を再起動する
pub const BOSS_WATCHDOG_MS:        u64 = 1500;
/// スポーン直後の被弾無効時間（0 = なし）
pub const BOSS_SPAWN_GRACE_MS:     u64 = 0;

// Boss 戦のプレイヤー耐久
pub const PLAYER_BOSS_HP: u32 = 50;

// Camera shake（ボス接触時）
pub const SHAKE_DURATION_MS: u64 = 200;
pub const SHAKE_INTENSITY:   f32 = 0.02;

// Fixed tick
pub const TICK_MS: u64 = 16;
/// 1 tick の処理時間がこれを超えたら警告
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

// Spatial hash cell size
pub const CELL_SIZE: f32 = 64.0;

/// ゲームロジック用 RNG のデフォルトシード
pub const DEFAULT_RNG_SEED: u64 = 67890;
