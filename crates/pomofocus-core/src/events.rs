use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::timer::TimerMode;

/// Every state change in a session produces an Event.
/// The render surface turns the notification-bearing ones into alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ModeSwitched {
        mode: TimerMode,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        mode: TimerMode,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// An interval expired and the engine moved on to the next mode.
    ModeTransitioned {
        from: TimerMode,
        to: TimerMode,
        completed_focus_count: u32,
        notification: Notification,
        at: DateTime<Utc>,
    },
    TaskAdded {
        task: Task,
        at: DateTime<Utc>,
    },
    TaskToggled {
        id: u64,
        completed: bool,
        at: DateTime<Utc>,
    },
    TaskDeleted {
        id: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The alert carried by this event, if any.
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Event::ModeTransitioned { notification, .. } => Some(notification),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    LongBreakStarted,
    ShortBreakStarted,
    WorkResumed,
}

impl NotificationKind {
    /// The kind announcing entry into `mode`.
    pub fn entering(mode: TimerMode) -> Self {
        match mode {
            TimerMode::Work => NotificationKind::WorkResumed,
            TimerMode::ShortBreak => NotificationKind::ShortBreakStarted,
            TimerMode::LongBreak => NotificationKind::LongBreakStarted,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            NotificationKind::LongBreakStarted => "Time for a LONG Break!",
            NotificationKind::ShortBreakStarted => "Time for a Short Break!",
            NotificationKind::WorkResumed => "Break is over! Back to work.",
        }
    }
}

/// A user-visible alert signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}
