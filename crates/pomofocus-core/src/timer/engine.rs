//! Timer engine implementation.
//!
//! The engine is a tick-driven state machine. It owns no thread and reads no
//! clock - the render loop calls `tick()` once per second while running.
//!
//! ## Mode Transitions
//!
//! ```text
//! Work --expiry--> ShortBreak (or LongBreak on every 4th focus) --expiry--> Work
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.toggle_running();
//! // Once per second:
//! if let Tick::Transitioned { event, .. } = engine.tick() { publish(event) }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::mode::{TimerMode, LONG_BREAK_CADENCE};
use super::snapshot::Snapshot;
use crate::error::{Result, ValidationError};
use crate::events::{Event, NotificationKind};

/// The full mutable state of a session's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub completed_focus_count: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            mode: TimerMode::Work,
            remaining_seconds: TimerMode::Work.duration_secs(),
            is_running: false,
            completed_focus_count: 0,
        }
    }
}

/// Result of a single countdown step.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// Not running; nothing changed.
    Idle,
    /// One second was taken off the clock.
    Continue,
    /// The interval expired and the engine switched to `to` (paused).
    /// `event` is always `Event::ModeTransitioned` and carries the alert.
    Transitioned {
        from: TimerMode,
        to: TimerMode,
        event: Event,
    },
}

/// Core timer engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerEngine {
    state: TimerState,
}

impl TimerEngine {
    /// Create an engine in Work mode with a full, paused focus interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore an engine from an explicit state.
    ///
    /// Fails if `remaining_seconds` exceeds the mode's duration.
    pub fn from_state(state: TimerState) -> Result<Self> {
        let duration = state.mode.duration_secs();
        if state.remaining_seconds > duration {
            return Err(ValidationError::RemainingOutOfRange {
                mode: state.mode.to_string(),
                remaining: state.remaining_seconds,
                duration,
            }
            .into());
        }
        Ok(Self { state })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> TimerMode {
        self.state.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn completed_focus_count(&self) -> u32 {
        self.state.completed_focus_count
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Jump to `mode` with a full, paused interval. Never touches the focus count.
    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        self.state.mode = mode;
        self.state.remaining_seconds = mode.duration_secs();
        self.state.is_running = false;
        debug!(%mode, "mode switched");
        Event::ModeSwitched {
            mode,
            remaining_seconds: self.state.remaining_seconds,
            at: Utc::now(),
        }
    }

    /// Start or pause. Starting at zero is allowed; the next tick then expires.
    pub fn toggle_running(&mut self) -> Event {
        self.state.is_running = !self.state.is_running;
        let mode = self.state.mode;
        let remaining_seconds = self.state.remaining_seconds;
        debug!(running = self.state.is_running, remaining_seconds, "timer toggled");
        if self.state.is_running {
            Event::TimerStarted {
                mode,
                remaining_seconds,
                at: Utc::now(),
            }
        } else {
            Event::TimerPaused {
                mode,
                remaining_seconds,
                at: Utc::now(),
            }
        }
    }

    pub fn reset(&mut self) -> Event {
        self.state.is_running = false;
        self.state.remaining_seconds = self.state.mode.duration_secs();
        debug!(mode = %self.state.mode, "timer reset");
        Event::TimerReset {
            mode: self.state.mode,
            at: Utc::now(),
        }
    }

    /// One countdown step.
    ///
    /// The tick that takes the last second off the clock also processes the
    /// expiry, so callers see the transition without an extra empty tick.
    pub fn tick(&mut self) -> Tick {
        if !self.state.is_running {
            return Tick::Idle;
        }
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            trace!(remaining = self.state.remaining_seconds, "tick");
            if self.state.remaining_seconds > 0 {
                return Tick::Continue;
            }
        }
        self.expire()
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Pause first, then pick the next mode from the post-increment count.
    fn expire(&mut self) -> Tick {
        self.state.is_running = false;
        let from = self.state.mode;
        let to = match from {
            TimerMode::Work => {
                self.state.completed_focus_count += 1;
                if self.state.completed_focus_count % LONG_BREAK_CADENCE == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Work,
        };
        self.switch_mode(to);
        debug!(
            %from,
            %to,
            completed = self.state.completed_focus_count,
            "interval expired"
        );
        Tick::Transitioned {
            from,
            to,
            event: Event::ModeTransitioned {
                from,
                to,
                completed_focus_count: self.state.completed_focus_count,
                notification: NotificationKind::entering(to).into(),
                at: Utc::now(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn engine_at(mode: TimerMode, remaining_seconds: u32, completed: u32) -> TimerEngine {
        TimerEngine::from_state(TimerState {
            mode,
            remaining_seconds,
            is_running: true,
            completed_focus_count: completed,
        })
        .unwrap()
    }

    #[test]
    fn fresh_engine_defaults() {
        let engine = TimerEngine::new();
        assert_eq!(engine.mode(), TimerMode::Work);
        assert_eq!(engine.remaining_seconds(), 1500);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus_count(), 0);
    }

    #[test]
    fn switch_mode_resets_and_pauses() {
        for mode in TimerMode::ALL {
            let mut engine = engine_at(TimerMode::Work, 42, 0);
            engine.switch_mode(mode);
            assert_eq!(engine.remaining_seconds(), mode.duration_secs());
            assert!(!engine.is_running());
        }
    }

    #[test]
    fn manual_switch_mid_countdown_keeps_focus_count() {
        let mut engine = engine_at(TimerMode::Work, 800, 2);
        engine.switch_mode(TimerMode::LongBreak);
        assert_eq!(engine.remaining_seconds(), 900);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus_count(), 2);
    }

    #[test]
    fn toggle_twice_is_a_no_op() {
        let mut engine = engine_at(TimerMode::ShortBreak, 120, 0);
        let before = engine.state();
        engine.toggle_running();
        engine.toggle_running();
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn toggle_reports_start_and_pause() {
        let mut engine = TimerEngine::new();
        assert!(matches!(engine.toggle_running(), Event::TimerStarted { .. }));
        assert!(matches!(engine.toggle_running(), Event::TimerPaused { .. }));
    }

    #[test]
    fn reset_keeps_mode() {
        let mut engine = engine_at(TimerMode::LongBreak, 10, 4);
        engine.reset();
        assert_eq!(engine.mode(), TimerMode::LongBreak);
        assert_eq!(engine.remaining_seconds(), 900);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus_count(), 4);
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let mut engine = TimerEngine::new();
        assert_eq!(engine.tick(), Tick::Idle);
        assert_eq!(engine.remaining_seconds(), 1500);
    }

    #[test]
    fn running_tick_counts_down() {
        let mut engine = engine_at(TimerMode::Work, 10, 0);
        assert_eq!(engine.tick(), Tick::Continue);
        assert_eq!(engine.remaining_seconds(), 9);
        assert_eq!(engine.mode(), TimerMode::Work);
    }

    #[test]
    fn cadence_gives_long_break_every_fourth_focus() {
        let mut engine = TimerEngine::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            engine = engine_at(TimerMode::Work, 1, engine.completed_focus_count());
            match engine.tick() {
                Tick::Transitioned { to, .. } => seen.push(to),
                other => panic!("expected transition, got {other:?}"),
            }
        }
        assert_eq!(
            seen,
            vec![
                TimerMode::ShortBreak,
                TimerMode::ShortBreak,
                TimerMode::ShortBreak,
                TimerMode::LongBreak
            ]
        );
        assert_eq!(engine.completed_focus_count(), 4);
    }

    #[test]
    fn breaks_always_return_to_work() {
        for mode in [TimerMode::ShortBreak, TimerMode::LongBreak] {
            let mut engine = engine_at(mode, 1, 3);
            let tick = engine.tick();
            assert!(matches!(tick, Tick::Transitioned { to: TimerMode::Work, .. }));
            assert_eq!(engine.mode(), TimerMode::Work);
            assert_eq!(engine.remaining_seconds(), 1500);
            assert!(!engine.is_running());
            assert_eq!(engine.completed_focus_count(), 3);
        }
    }

    #[test]
    fn starting_at_zero_expires_on_next_tick() {
        let mut engine = TimerEngine::from_state(TimerState {
            mode: TimerMode::Work,
            remaining_seconds: 0,
            is_running: false,
            completed_focus_count: 0,
        })
        .unwrap();
        assert_eq!(engine.tick(), Tick::Idle);
        engine.toggle_running();
        match engine.tick() {
            Tick::Transitioned { from, to, event } => {
                assert_eq!((from, to), (TimerMode::Work, TimerMode::ShortBreak));
                assert_eq!(
                    event.notification().map(|n| n.kind),
                    Some(NotificationKind::ShortBreakStarted)
                );
            }
            other => panic!("expected transition, got {other:?}"),
        }
        assert_eq!(engine.completed_focus_count(), 1);
    }

    #[test]
    fn expiry_emits_mode_transitioned_event() {
        let mut engine = engine_at(TimerMode::Work, 1, 3);
        let Tick::Transitioned { event, .. } = engine.tick() else {
            panic!("expected transition");
        };
        match event {
            Event::ModeTransitioned {
                from,
                to,
                completed_focus_count,
                notification,
                ..
            } => {
                assert_eq!(from, TimerMode::Work);
                assert_eq!(to, TimerMode::LongBreak);
                assert_eq!(completed_focus_count, 4);
                assert_eq!(notification.message, "Time for a LONG Break!");
            }
            other => panic!("expected ModeTransitioned, got {other:?}"),
        }
    }

    #[test]
    fn from_state_rejects_overlong_remaining() {
        let err = TimerEngine::from_state(TimerState {
            mode: TimerMode::ShortBreak,
            remaining_seconds: 301,
            is_running: false,
            completed_focus_count: 0,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::RemainingOutOfRange { duration: 300, .. })
        ));
    }
}
