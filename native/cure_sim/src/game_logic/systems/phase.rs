//! Path: native/cure_sim/src/game_logic/systems/phase.rs
//! Summary: フェーズ進行判定と移行タイムライン（停止 → バナー → 切替 → 再開）

use super::effects::apply_cell_speed;
use super::spawn::start_wave_timer;
use crate::world::{FrameEvent, GameWorld, TimerKey};
use cure_core::constants::{
    PHASE_1_THRESHOLD, PHASE_2_THRESHOLD, PICKUP_PHASE_BONUS, TRANSITION_DWELL_MS,
    TRANSITION_FADE_IN_MS, TRANSITION_FADE_OUT_MS,
};
use cure_core::phase::Phase;

/// 安定度が増えた直後に呼ぶ。高い閾値を優先するので 0 → 2 へ直接移行しうる。
pub(crate) fn check_phase_progress(w: &mut GameWorld) {
    if w.run.boss_mode || w.run.is_transitioning {
        return;
    }
    let stability = w.run.stability;
    if stability >= PHASE_2_THRESHOLD && w.run.phase < Phase::NeuralCore {
        begin_transition(w, Phase::NeuralCore);
    } else if stability >= PHASE_1_THRESHOLD && w.run.phase < Phase::Organs {
        begin_transition(w, Phase::Organs);
    }
}

fn begin_transition(w: &mut GameWorld, next: Phase) {
    log::info!("phase transition: {:?} -> {:?} (stability {})", w.run.phase, next, w.run.stability);
    w.run.is_transitioning = true;
    w.run.is_active = false;
    w.run.pending_phase = Some(next);

    w.scheduler.pause(TimerKey::WaveSpawn);
    for i in 0..w.cells.len() {
        w.cells.velocities_y[i] = 0.0;
    }
    for i in 0..w.pickups.len() {
        w.pickups.velocities_y[i] = 0.0;
    }

    if let Some(text) = next.banner() {
        w.frame_events.push(FrameEvent::PhaseBanner {
            phase: next,
            text,
            fade_in_ms: TRANSITION_FADE_IN_MS,
            dwell_ms: TRANSITION_DWELL_MS,
            fade_out_ms: TRANSITION_FADE_OUT_MS,
        });
    }
    w.scheduler.after(TimerKey::TransitionSwap, w.now_ms, TRANSITION_FADE_IN_MS);
    w.scheduler.after(
        TimerKey::TransitionResume,
        w.now_ms,
        TRANSITION_FADE_IN_MS + TRANSITION_DWELL_MS + TRANSITION_FADE_OUT_MS,
    );
}

/// バナーが出きったところで背景とスポーンパラメータを切り替える
pub(crate) fn swap_phase(w: &mut GameWorld) {
    if !w.run.is_transitioning {
        return;
    }
    let Some(next) = w.run.pending_phase.take() else {
        return;
    };
    w.run.phase = next;
    w.frame_events.push(FrameEvent::BackgroundChanged {
        phase: next,
        key: next.params().background,
    });
}

/// バナーが消えたら新しいフェーズの速度で再開する
pub(crate) fn finish_transition(w: &mut GameWorld) {
    if !w.run.is_transitioning {
        return;
    }
    if w.run.pending_phase.is_some() {
        swap_phase(w);
    }
    let params = w.run.phase.params();
    start_wave_timer(w);
    for i in 0..w.cells.len() {
        if w.cells.is_active(i) {
            w.cells.base_speeds[i] = params.enemy_speed;
        }
    }
    for i in 0..w.pickups.len() {
        if w.pickups.alive[i] {
            w.pickups.base_speeds[i] = params.enemy_speed + PICKUP_PHASE_BONUS;
        }
    }
    w.run.is_transitioning = false;
    w.run.is_active = true;
    apply_cell_speed(w);
    log::info!("phase {} live", params.name);
}
