//! Path: native/cure_sim/src/world/scheduler.rs
//! Summary: 名前付きタイマー（単発・周期）。一時停止と冪等キャンセルに対応
//!
//! 同じキーへの再登録は上書き（後勝ち）。`pop_due` は 1 回に 1 つだけ返すので、
//! 発火したハンドラが他のタイマーをキャンセルすれば、そのタイマーは同じ tick 内でも発火しない。

use rustc_hash::FxHashMap;

/// タイマーの識別子
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum TimerKey {
    WaveSpawn,
    TransitionSwap,
    TransitionResume,
    IntroFade,
    /// シールド解除。使用ごとに独立した単発タイマー（連番で区別）
    ShieldOff(u32),
    BossDrop,
    BossCharge,
    BossDash,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerState {
    Armed { due_ms: u64 },
    /// 一時停止中。`after` / `every` で再登録されるまで発火しない。
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Timer {
    state:     TimerState,
    period_ms: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    timers: FxHashMap<TimerKey, Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `delay_ms` 後に 1 回だけ発火
    pub fn after(&mut self, key: TimerKey, now_ms: u64, delay_ms: u64) {
        self.timers.insert(key, Timer {
            state: TimerState::Armed { due_ms: now_ms + delay_ms },
            period_ms: None,
        });
    }

    /// `period_ms` ごとに発火（初回は `period_ms` 後）
    pub fn every(&mut self, key: TimerKey, now_ms: u64, period_ms: u64) {
        let period_ms = period_ms.max(1);
        self.timers.insert(key, Timer {
            state: TimerState::Armed { due_ms: now_ms + period_ms },
            period_ms: Some(period_ms),
        });
    }

    /// 登録されていなければ何もしない。取り消したら true。
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.timers.remove(&key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn pause(&mut self, key: TimerKey) {
        if let Some(t) = self.timers.get_mut(&key) {
            t.state = TimerState::Paused;
        }
    }

    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.timers.contains_key(&key)
    }

    pub fn is_paused(&self, key: TimerKey) -> bool {
        matches!(self.timers.get(&key).map(|t| t.state), Some(TimerState::Paused))
    }

    /// 次の発火予定時刻（一時停止中・未登録は None）
    pub fn due_at(&self, key: TimerKey) -> Option<u64> {
        match self.timers.get(&key)?.state {
            TimerState::Armed { due_ms } => Some(due_ms),
            TimerState::Paused => None,
        }
    }

    /// 期限が来たタイマーを 1 つ取り出す（最も早いもの、同時刻はキー順）。
    /// 単発は削除、周期は次回へ進める。
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TimerKey> {
        let (key, due_ms) = self
            .timers
            .iter()
            .filter_map(|(&k, t)| match t.state {
                TimerState::Armed { due_ms } if due_ms <= now_ms => Some((k, due_ms)),
                _ => None,
            })
            .min_by_key(|&(k, due)| (due, k))?;

        let period = self.timers.get(&key).and_then(|t| t.period_ms);
        match period {
            Some(p) => {
                let mut next = due_ms + p;
                // 大きく遅れた場合は追いつこうとせず now 基準に戻す
                if next <= now_ms {
                    next = now_ms + p;
                }
                if let Some(t) = self.timers.get_mut(&key) {
                    t.state = TimerState::Armed { due_ms: next };
                }
            }
            None => {
                self.timers.remove(&key);
            }
        }
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut s = Scheduler::new();
        s.after(TimerKey::IntroFade, 0, 900);
        assert_eq!(s.pop_due(899), None);
        assert_eq!(s.pop_due(900), Some(TimerKey::IntroFade));
        assert_eq!(s.pop_due(5000), None);
        assert!(!s.is_scheduled(TimerKey::IntroFade));
    }

    #[test]
    fn periodic_advances_by_period() {
        let mut s = Scheduler::new();
        s.every(TimerKey::WaveSpawn, 0, 1900);
        assert_eq!(s.pop_due(1900), Some(TimerKey::WaveSpawn));
        assert_eq!(s.due_at(TimerKey::WaveSpawn), Some(3800));
        assert_eq!(s.pop_due(3799), None);
    }

    #[test]
    fn late_periodic_rebases_on_now() {
        let mut s = Scheduler::new();
        s.every(TimerKey::BossDrop, 0, 100);
        assert_eq!(s.pop_due(1000), Some(TimerKey::BossDrop));
        assert_eq!(s.due_at(TimerKey::BossDrop), Some(1100));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = Scheduler::new();
        s.after(TimerKey::ShieldOff(1), 0, 10);
        assert!(s.cancel(TimerKey::ShieldOff(1)));
        assert!(!s.cancel(TimerKey::ShieldOff(1)));
        assert_eq!(s.pop_due(100), None);
    }

    #[test]
    fn reschedule_replaces_previous_due() {
        let mut s = Scheduler::new();
        s.after(TimerKey::BossDash, 0, 4000);
        s.after(TimerKey::BossDash, 1000, 6500);
        assert_eq!(s.pop_due(4000), None);
        assert_eq!(s.pop_due(7500), Some(TimerKey::BossDash));
    }

    #[test]
    fn distinct_shield_timers_fire_independently() {
        let mut s = Scheduler::new();
        s.after(TimerKey::ShieldOff(1), 0, 6500);
        s.after(TimerKey::ShieldOff(2), 3000, 6500);
        assert_eq!(s.pop_due(6500), Some(TimerKey::ShieldOff(1)));
        assert_eq!(s.pop_due(6500), None);
        assert_eq!(s.pop_due(9500), Some(TimerKey::ShieldOff(2)));
    }

    #[test]
    fn paused_timer_never_fires_until_rearmed() {
        let mut s = Scheduler::new();
        s.every(TimerKey::WaveSpawn, 0, 1900);
        s.pause(TimerKey::WaveSpawn);
        assert!(s.is_paused(TimerKey::WaveSpawn));
        assert_eq!(s.due_at(TimerKey::WaveSpawn), None);
        assert_eq!(s.pop_due(10_000), None);
        s.every(TimerKey::WaveSpawn, 10_000, 1600);
        assert_eq!(s.due_at(TimerKey::WaveSpawn), Some(11_600));
    }

    #[test]
    fn earliest_due_pops_first_and_ties_break_by_key() {
        let mut s = Scheduler::new();
        s.after(TimerKey::BossDash, 0, 50);
        s.after(TimerKey::TransitionResume, 0, 100);
        s.after(TimerKey::TransitionSwap, 0, 100);
        assert_eq!(s.pop_due(200), Some(TimerKey::BossDash));
        assert_eq!(s.pop_due(200), Some(TimerKey::TransitionSwap));
        // ハンドラが残りをキャンセルしたら発火しない
        s.cancel(TimerKey::TransitionResume);
        assert_eq!(s.pop_due(200), None);
    }
}
