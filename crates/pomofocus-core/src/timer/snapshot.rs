use serde::{Deserialize, Serialize};

use super::engine::TimerState;
use super::mode::TimerMode;

/// Read-only projection of the timer used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: TimerMode,
    pub mode_label: String,
    pub remaining_seconds: u32,
    /// `MM:SS`
    pub clock: String,
    /// 0.0 .. 1.0 progress within the current interval.
    pub progress_fraction: f64,
    pub is_running: bool,
    pub completed_focus_count: u32,
}

impl Snapshot {
    pub fn of(state: &TimerState) -> Self {
        Self {
            mode: state.mode,
            mode_label: state.mode.label().to_string(),
            remaining_seconds: state.remaining_seconds,
            clock: format_clock(state.remaining_seconds),
            progress_fraction: progress_fraction(state.mode, state.remaining_seconds),
            is_running: state.is_running,
            completed_focus_count: state.completed_focus_count,
        }
    }
}

/// Elapsed share of the interval, clamped to `[0, 1]`.
pub fn progress_fraction(mode: TimerMode, remaining_seconds: u32) -> f64 {
    let total = mode.duration_secs();
    if total == 0 {
        return 0.0;
    }
    let elapsed = total.saturating_sub(remaining_seconds);
    (elapsed as f64 / total as f64).clamp(0.0, 1.0)
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
