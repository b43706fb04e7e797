mod engine;
mod mode;
mod snapshot;

pub use engine::{Tick, TimerEngine, TimerState};
pub use mode::{
    TimerMode, FOCUS_SECS, LONG_BREAK_CADENCE, LONG_BREAK_SECS, SHORT_BREAK_SECS,
};
pub use snapshot::{format_clock, progress_fraction, Snapshot};
