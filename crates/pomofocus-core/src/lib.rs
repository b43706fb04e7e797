//! # pomofocus Core Library
//!
//! Core logic for a single-user Pomodoro timer with a to-do list. The
//! terminal front end in `pomofocus-cli` is a thin render surface over it.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine cycling Work, Short Break
//!   and Long Break, with a long break after every fourth focus interval
//! - **Render Loop**: a self-rescheduling loop that ticks once per second
//!   while running and hands snapshots to a [`RenderSurface`]
//! - **Session**: owns the engine and the task list and applies [`Action`]s
//! - **Storage**: TOML-based display preferences (no session persistence)
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`RenderLoop`]: countdown scheduling
//! - [`Session`]: per-user state and action dispatch
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod render;
pub mod session;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, TimerError, ValidationError};
pub use events::{Event, Notification, NotificationKind};
pub use render::{RenderLoop, RenderSurface, Reschedule, TICK_QUANTUM};
pub use session::{Action, Session};
pub use storage::Config;
pub use task::{Task, TaskStore};
pub use timer::{Snapshot, Tick, TimerEngine, TimerMode, TimerState};
