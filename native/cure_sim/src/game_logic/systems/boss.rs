//! Path: native/cure_sim/src/game_logic/systems/boss.rs
//! Summary: ボス戦（突入・本体出現・追跡/突進 AI・被弾・接触・ウォッチドッグ・決着）

use super::effects::notify;
use super::lifecycle::{clear_field, restart_run};
use crate::world::{BossState, EncounterOutcome, EncounterState, FrameEvent, GameWorld, TimerKey};
use cure_core::consumable::ConsumableKind;
use cure_core::constants::{
    BOSS_BASE_CHASE, BOSS_BASE_DASH, BOSS_BOUNCE, BOSS_CHARGE_INTERVAL_MS, BOSS_DROP_INTERVAL_MS,
    BOSS_HALF_EXTENT, BOSS_HIT_COOLDOWN_MS, BOSS_HIT_FLASH_MS, BOSS_SPAWN_GRACE_MS,
    BOSS_TELEGRAPH_MS, BOSS_TOUCH_COOLDOWN_MS, BOSS_TOUCH_DAMAGE, BOSS_WATCHDOG_MS, CELL_SPAWN_Y,
    PICKUP_BOSS_SPEED, PLAYER_BOSS_HP, SCREEN_HEIGHT, SCREEN_WIDTH, SHAKE_DURATION_MS,
    SHAKE_INTENSITY,
};
use cure_core::util::{direction_to, spawn_x};

/// 安定度が閾値を割った: 通常ウェーブを止めてボス戦へ。本体は次の tick に出る。
pub(crate) fn begin_final_stand(w: &mut GameWorld) {
    log::info!("final stand: stability {}", w.run.stability);
    w.run.boss_mode = true;
    w.run.is_transitioning = false;
    w.run.is_active = true;
    w.run.pending_phase = None;

    w.scheduler.cancel(TimerKey::WaveSpawn);
    w.scheduler.cancel(TimerKey::TransitionSwap);
    w.scheduler.cancel(TimerKey::TransitionResume);
    clear_field(w);
    destroy_boss_stuff(w);

    w.encounter.state = EncounterState::Spawning;
    w.encounter.spawned_at_ms = Some(w.now_ms);
    w.frame_events.push(FrameEvent::EncounterArmed);
    notify(w, "FINAL STAND\nVIRUS CORE DETECTED", 650);
}

/// ボス本体・ボス用タイマーを片付ける（冪等）
pub(crate) fn destroy_boss_stuff(w: &mut GameWorld) {
    w.scheduler.cancel(TimerKey::BossDrop);
    w.scheduler.cancel(TimerKey::BossCharge);
    w.scheduler.cancel(TimerKey::BossDash);
    w.boss = None;
    w.encounter.state = EncounterState::Inactive;
    w.encounter.spawned_at_ms = None;
    w.encounter.player_hp = PLAYER_BOSS_HP;
}

fn spawn_boss_body(w: &mut GameWorld) {
    w.boss = Some(BossState::new(w.now_ms, BOSS_SPAWN_GRACE_MS));
    w.encounter.state = EncounterState::Active;
    w.encounter.player_hp = PLAYER_BOSS_HP;
    w.scheduler.every(TimerKey::BossDrop, w.now_ms, BOSS_DROP_INTERVAL_MS);
    w.scheduler.every(TimerKey::BossCharge, w.now_ms, BOSS_CHARGE_INTERVAL_MS);
    w.frame_events.push(FrameEvent::EncounterStarted);
    log::info!("virus core spawned");
}

/// 毎 tick: 出現待ちなら本体を出し、戦闘中なら追跡して移動・壁で反射
pub(crate) fn update_boss(w: &mut GameWorld, dt: f32) {
    match w.encounter.state {
        EncounterState::Inactive => {}
        EncounterState::Spawning => spawn_boss_body(w),
        EncounterState::Active => {
            let mul = w.effects.boss_speed_mul();
            let (px, py) = (w.player.x, w.player.y);
            let Some(boss) = w.boss.as_mut() else {
                return;
            };

            // 位置を直接合わせず速度に加算（dt でフレームレート非依存）
            let (dx, dy) = direction_to(boss.x, boss.y, px, py);
            boss.vx += dx * BOSS_BASE_CHASE * mul * dt;
            boss.vy += dy * BOSS_BASE_CHASE * mul * dt;
            boss.x += boss.vx * dt;
            boss.y += boss.vy * dt;

            let h = BOSS_HALF_EXTENT;
            if boss.x < h {
                boss.x = h;
                boss.vx = -boss.vx * BOSS_BOUNCE;
            } else if boss.x > SCREEN_WIDTH - h {
                boss.x = SCREEN_WIDTH - h;
                boss.vx = -boss.vx * BOSS_BOUNCE;
            }
            if boss.y < h {
                boss.y = h;
                boss.vy = -boss.vy * BOSS_BOUNCE;
            } else if boss.y > SCREEN_HEIGHT - h {
                boss.y = SCREEN_HEIGHT - h;
                boss.vy = -boss.vy * BOSS_BOUNCE;
            }
        }
    }
}

/// BossDrop タイマー: 薬剤を 1 つ落とす
pub(crate) fn drop_pickup(w: &mut GameWorld) {
    if w.boss.is_none() {
        return;
    }
    let kind = ConsumableKind::random_drop(&mut w.rng);
    let x = spawn_x(&mut w.rng);
    let mul = w.effects.cell_speed_mul();
    w.pickups.spawn(x, CELL_SPAWN_Y, kind, PICKUP_BOSS_SPEED, mul);
    log::debug!("boss drop {:?} at x={}", kind, x);
}

/// BossCharge タイマー: 予告してから BossDash で突進
pub(crate) fn telegraph(w: &mut GameWorld) {
    if w.boss.is_none() {
        return;
    }
    w.frame_events.push(FrameEvent::BossTelegraph { duration_ms: BOSS_TELEGRAPH_MS });
    w.scheduler.after(TimerKey::BossDash, w.now_ms, BOSS_TELEGRAPH_MS);
}

/// その時点のプレイヤー位置へ向けて速度を上書き
pub(crate) fn dash(w: &mut GameWorld) {
    let mul = w.effects.boss_speed_mul();
    let (px, py) = (w.player.x, w.player.y);
    let Some(boss) = w.boss.as_mut() else {
        return;
    };
    let (dx, dy) = direction_to(boss.x, boss.y, px, py);
    boss.vx = dx * BOSS_BASE_DASH * mul;
    boss.vy = dy * BOSS_BASE_DASH * mul;
    let (vx, vy) = (boss.vx, boss.vy);
    w.frame_events.push(FrameEvent::BossDash { vx, vy });
}

/// 弾がボスに当たった。同じ弾の二重解決は弾フラグで、同フレームの多段ヒットは
/// 全体クールダウンで弾く。
pub(crate) fn on_projectile_hit(w: &mut GameWorld, bullet: usize) {
    if bullet >= w.bullets.len() || !w.bullets.alive[bullet] || w.bullets.resolved[bullet] {
        return;
    }
    w.bullets.resolved[bullet] = true;
    w.bullets.kill(bullet);

    let now = w.now_ms;
    let damage = w.effects.bullet_damage();
    let Some(boss) = w.boss.as_mut() else {
        return;
    };
    if now < boss.invulnerable_until_ms || now < boss.hit_cooldown_until_ms {
        return;
    }
    boss.hit_cooldown_until_ms = now + BOSS_HIT_COOLDOWN_MS;
    boss.hp = boss.hp.saturating_sub(damage);
    let hp = boss.hp;
    w.frame_events.push(FrameEvent::BossDamaged { hp, flash_ms: BOSS_HIT_FLASH_MS });

    if hp == 0 {
        end_encounter(w, EncounterOutcome::Defeated);
    }
}

/// ボスがプレイヤーに触れた（シールド中は無効）
pub(crate) fn on_player_contact(w: &mut GameWorld) {
    let now = w.now_ms;
    let shielded = w.player.shielded;
    let Some(boss) = w.boss.as_mut() else {
        return;
    };
    if now < boss.touch_cooldown_until_ms || shielded {
        return;
    }
    boss.touch_cooldown_until_ms = now + BOSS_TOUCH_COOLDOWN_MS;
    w.encounter.player_hp = w.encounter.player_hp.saturating_sub(BOSS_TOUCH_DAMAGE);
    let hp = w.encounter.player_hp;
    w.frame_events.push(FrameEvent::PlayerDamaged { hp });
    w.frame_events.push(FrameEvent::CameraShake {
        duration_ms: SHAKE_DURATION_MS,
        intensity: SHAKE_INTENSITY,
    });

    if hp == 0 {
        end_encounter(w, EncounterOutcome::PlayerDown);
    }
}

/// ボスモードなのに本体がいないまま一定時間が過ぎたら run をやり直す。
/// 再起動したら true。
pub(crate) fn watchdog(w: &mut GameWorld) -> bool {
    if !w.run.boss_mode || w.boss.is_some() {
        return false;
    }
    let Some(at) = w.encounter.spawned_at_ms else {
        return false;
    };
    if w.now_ms.saturating_sub(at) <= BOSS_WATCHDOG_MS {
        return false;
    }
    log::warn!("boss body missing for {}ms, restarting run", w.now_ms - at);
    end_encounter(w, EncounterOutcome::Lost);
    true
}

fn end_encounter(w: &mut GameWorld, outcome: EncounterOutcome) {
    log::info!("encounter ended: {:?}", outcome);
    w.encounter.last_outcome = Some(outcome);
    w.frame_events.push(FrameEvent::EncounterEnded { outcome });
    let message = match outcome {
        EncounterOutcome::Defeated => "VIRUS CORE DESTROYED\nPatient Saved!",
        EncounterOutcome::PlayerDown => "NANO-BOT DESTROYED\nRun restarting...",
        EncounterOutcome::Lost => "BOSS LOST\nRestarting run...",
    };
    restart_run(w, Some(message));
}
