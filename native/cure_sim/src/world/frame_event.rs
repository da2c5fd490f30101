//! Path: native/cure_sim/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（描画・UI 側が毎フレーム drain する）

use super::boss::EncounterOutcome;
use cure_core::consumable::ConsumableKind;
use cure_core::effect::EffectKind;
use cure_core::phase::Phase;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FrameEvent {
    /// 一時的な通知テキスト（フェードイン 200ms → 表示 → フェードアウト 250ms は描画側）
    Notify          { text: &'static str, duration_ms: u64 },
    DialogueAdvanced { index: usize },
    GameStarted,
    PhaseBanner     { phase: Phase, text: &'static str, fade_in_ms: u64, dwell_ms: u64, fade_out_ms: u64 },
    BackgroundChanged { phase: Phase, key: &'static str },
    CellSpawned     { index: usize, health: u32 },
    CellDamaged     { index: usize, health: u32 },
    CellCured       { index: usize, wipe: bool },
    CellMissed      { index: usize, stability: i32 },
    ItemPickup      { kind: ConsumableKind },
    ConsumableUsed  { kind: ConsumableKind, boss_mode: bool },
    Combined        { first: ConsumableKind, second: ConsumableKind, boss_mode: bool },
    EffectExpired   { kind: EffectKind },
    ShieldChanged   { on: bool },
    StabilityChanged { stability: i32 },
    EncounterArmed,
    EncounterStarted,
    BossTelegraph   { duration_ms: u64 },
    BossDash        { vx: f32, vy: f32 },
    BossDamaged     { hp: u32, flash_ms: u64 },
    PlayerDamaged   { hp: u32 },
    CameraShake     { duration_ms: u64, intensity: f32 },
    EncounterEnded  { outcome: EncounterOutcome },
    RunRestarted,
    GameOver        { text: &'static str },
}
