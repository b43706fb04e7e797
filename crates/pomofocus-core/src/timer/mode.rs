use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Focus interval length in seconds.
pub const FOCUS_SECS: u32 = 25 * 60;
/// Short break length in seconds.
pub const SHORT_BREAK_SECS: u32 = 5 * 60;
/// Long break length in seconds.
pub const LONG_BREAK_SECS: u32 = 15 * 60;
/// Every Nth completed focus interval is followed by a long break.
pub const LONG_BREAK_CADENCE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Work,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [TimerMode::Work, TimerMode::ShortBreak, TimerMode::LongBreak];

    /// Nominal length of an interval in this mode.
    pub fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Work => FOCUS_SECS,
            TimerMode::ShortBreak => SHORT_BREAK_SECS,
            TimerMode::LongBreak => LONG_BREAK_SECS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Work => "Focus Time",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerMode::Work => "work",
            TimerMode::ShortBreak => "short_break",
            TimerMode::LongBreak => "long_break",
        }
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Work
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: anything that is not a known mode name is rejected.
impl FromStr for TimerMode {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "work" | "focus" => Ok(TimerMode::Work),
            "short_break" | "short" => Ok(TimerMode::ShortBreak),
            "long_break" | "long" => Ok(TimerMode::LongBreak),
            _ => Err(TimerError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_fixed() {
        assert_eq!(TimerMode::Work.duration_secs(), 1500);
        assert_eq!(TimerMode::ShortBreak.duration_secs(), 300);
        assert_eq!(TimerMode::LongBreak.duration_secs(), 900);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("work".parse::<TimerMode>(), Ok(TimerMode::Work));
        assert_eq!("Short-Break".parse::<TimerMode>(), Ok(TimerMode::ShortBreak));
        assert_eq!("long".parse::<TimerMode>(), Ok(TimerMode::LongBreak));
    }

    #[test]
    fn unknown_mode_is_rejected_not_defaulted() {
        let err = "lunch".parse::<TimerMode>().unwrap_err();
        assert_eq!(
            err,
            TimerError::InvalidMode {
                value: "lunch".into()
            }
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&TimerMode::LongBreak).unwrap();
        assert_eq!(json, "\"long_break\"");
    }
}
