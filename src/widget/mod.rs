//! Pomodoro timer widget.
//!
//! The widget combines a three-way mode selector (POMO, Short Break, Long
//! Break), a whole-second countdown, a primary button whose caption cycles
//! START → PAUSE → RESTART, and a RESET button.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pomodoro::widget::{new_with_options, with_mode, with_reset_visibility, ResetVisibility};
//! use bubbletea_pomodoro::mode::Mode;
//!
//! let widget = new_with_options(&[
//!     with_mode(Mode::LongBreak),
//!     with_reset_visibility(ResetVisibility::WhenModified),
//! ]);
//! assert_eq!(widget.time_view(), "15:00");
//! assert!(!widget.reset_visible());
//! ```
//!
//! # Input
//!
//! Key presses are handled while the widget is focused (see
//! [`crate::Component`]). Hosts that drive the widget from elsewhere, such
//! as mouse hit-testing, send [`SelectModeMsg`], [`PrimaryActionMsg`] or
//! [`ResetMsg`] addressed by [`Model::id`].

pub mod keymap;
pub mod model;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{
    new, new_with_options, with_key_map, with_mode, with_reset_visibility, with_styles, Model,
    WidgetOption,
};
pub use types::{PrimaryActionMsg, PrimaryButton, ResetMsg, ResetVisibility, SelectModeMsg};
pub use view::Styles;
