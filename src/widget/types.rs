//! Messages and small value types for the timer widget.

use crate::error::Error;
use crate::mode::Mode;
use bubbletea_rs::Msg;
use std::fmt;
use std::str::FromStr;

/// Selects a mode on the widget with the matching id.
///
/// This is the message form of clicking a mode tab.
#[derive(Debug, Clone)]
pub struct SelectModeMsg {
    /// Target widget.
    pub id: i64,
    /// Mode to switch to.
    pub mode: Mode,
}

/// Presses the primary (START / PAUSE / RESTART) button.
#[derive(Debug, Clone)]
pub struct PrimaryActionMsg {
    /// Target widget.
    pub id: i64,
}

/// Presses the RESET button.
#[derive(Debug, Clone)]
pub struct ResetMsg {
    /// Target widget.
    pub id: i64,
}

impl From<SelectModeMsg> for Msg {
    fn from(msg: SelectModeMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PrimaryActionMsg> for Msg {
    fn from(msg: PrimaryActionMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ResetMsg> for Msg {
    fn from(msg: ResetMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// What the primary button does when pressed, derived from widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryButton {
    /// Idle with time left.
    Start,
    /// Running.
    Pause,
    /// Idle at zero: resets to the mode's duration and starts again.
    Restart,
}

impl PrimaryButton {
    /// Button caption.
    pub const fn label(self) -> &'static str {
        match self {
            PrimaryButton::Start => "START",
            PrimaryButton::Pause => "PAUSE",
            PrimaryButton::Restart => "RESTART",
        }
    }
}

impl fmt::Display for PrimaryButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// When the RESET button is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetVisibility {
    /// Always rendered, whatever the timer state.
    #[default]
    Always,
    /// Hidden while the timer is stopped at its mode's full duration.
    WhenModified,
}

impl fmt::Display for ResetVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetVisibility::Always => f.write_str("always"),
            ResetVisibility::WhenModified => f.write_str("when-modified"),
        }
    }
}

impl FromStr for ResetVisibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "always" => Ok(ResetVisibility::Always),
            "when-modified" | "modified" => Ok(ResetVisibility::WhenModified),
            _ => Err(Error::UnknownResetVisibility(s.to_string())),
        }
    }
}
