//! Timer presets.
//!
//! A Pomodoro cycle alternates between focused work and breaks. Each
//! [`Mode`] carries a fixed duration; durations are not configurable.
//!
//! ```rust
//! use bubbletea_pomodoro::mode::Mode;
//!
//! assert_eq!(Mode::Work.duration(), 1500);
//! assert_eq!(Mode::Work.next(), Mode::ShortBreak);
//! assert_eq!("long-break".parse::<Mode>().unwrap(), Mode::LongBreak);
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Work session length in seconds (25 minutes).
pub const WORK_SECS: u64 = 25 * 60;
/// Short break length in seconds (5 minutes).
pub const SHORT_BREAK_SECS: u64 = 5 * 60;
/// Long break length in seconds (15 minutes).
pub const LONG_BREAK_SECS: u64 = 15 * 60;

/// The selected timer preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A focused work session.
    #[default]
    Work,
    /// A short break between work sessions.
    ShortBreak,
    /// A long break after several work sessions.
    LongBreak,
}

impl Mode {
    /// All modes in selector order.
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    /// Length of this mode in whole seconds.
    pub const fn duration(self) -> u64 {
        match self {
            Mode::Work => WORK_SECS,
            Mode::ShortBreak => SHORT_BREAK_SECS,
            Mode::LongBreak => LONG_BREAK_SECS,
        }
    }

    /// Label shown on the mode selector.
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Work => "POMO",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Position of this mode in [`Mode::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Mode::Work => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }

    /// The mode to the right in the selector, wrapping around.
    pub const fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    /// The mode to the left in the selector, wrapping around.
    pub const fn prev(self) -> Mode {
        Mode::ALL[(self.index() + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Work => "work",
            Mode::ShortBreak => "short-break",
            Mode::LongBreak => "long-break",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "work" | "pomo" | "pomodoro" => Ok(Mode::Work),
            "short-break" | "shortbreak" | "short" => Ok(Mode::ShortBreak),
            "long-break" | "longbreak" | "long" => Ok(Mode::LongBreak),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(Mode::Work.duration(), 1500);
        assert_eq!(Mode::ShortBreak.duration(), 300);
        assert_eq!(Mode::LongBreak.duration(), 900);
    }

    #[test]
    fn test_default_is_work() {
        assert_eq!(Mode::default(), Mode::Work);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Mode::Work.next(), Mode::ShortBreak);
        assert_eq!(Mode::ShortBreak.next(), Mode::LongBreak);
        assert_eq!(Mode::LongBreak.next(), Mode::Work);

        assert_eq!(Mode::Work.prev(), Mode::LongBreak);
        assert_eq!(Mode::LongBreak.prev(), Mode::ShortBreak);
        assert_eq!(Mode::ShortBreak.prev(), Mode::Work);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("POMO".parse::<Mode>(), Ok(Mode::Work));
        assert_eq!("short_break".parse::<Mode>(), Ok(Mode::ShortBreak));
        assert_eq!(" long ".parse::<Mode>(), Ok(Mode::LongBreak));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "lunch".parse::<Mode>(),
            Err(Error::UnknownMode("lunch".to_string()))
        );
    }
}
