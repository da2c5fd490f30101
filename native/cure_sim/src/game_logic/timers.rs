//! Path: native/cure_sim/src/game_logic/timers.rs
//! Summary: エフェクト期限切れとスケジューラの発火を 1 つずつ処理する

use super::systems::boss::{drop_pickup, dash, telegraph};
use super::systems::effects::{apply_cell_speed, set_shield};
use super::systems::lifecycle::activate;
use super::systems::phase::{finish_transition, swap_phase};
use super::systems::spawn::spawn_wave;
use crate::world::{FrameEvent, GameWorld, TimerKey};
use cure_core::effect::EffectKind;

pub(crate) fn run_timers(w: &mut GameWorld) {
    for kind in w.effects.expire_due(w.now_ms) {
        log::debug!("effect {:?} expired", kind);
        w.frame_events.push(FrameEvent::EffectExpired { kind });
        if kind == EffectKind::CellSpeed {
            apply_cell_speed(w);
        }
    }

    // 1 つ発火するたびに取り直す（ハンドラが他をキャンセルしうる）
    while let Some(key) = w.scheduler.pop_due(w.now_ms) {
        if w.run.game_over {
            break;
        }
        log::trace!("timer {:?} fired at {}ms", key, w.now_ms);
        match key {
            TimerKey::WaveSpawn => spawn_wave(w),
            TimerKey::TransitionSwap => swap_phase(w),
            TimerKey::TransitionResume => finish_transition(w),
            TimerKey::IntroFade => activate(w),
            TimerKey::ShieldOff(_) => set_shield(w, false),
            TimerKey::BossDrop => drop_pickup(w),
            TimerKey::BossCharge => telegraph(w),
            TimerKey::BossDash => dash(w),
        }
    }
}
