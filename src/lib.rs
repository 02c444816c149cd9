#![warn(missing_docs)]

//! # bubbletea-pomodoro
//!
//! A Pomodoro countdown widget for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The widget offers three fixed presets (a 25 minute work session, a 5
//! minute short break and a 15 minute long break), a start/pause/restart
//! button, a reset button and a mode selector. Like every bubbletea
//! component it follows the Elm Architecture: state changes happen in
//! `update()`, and everything shown by `view()` is derived from that state.
//!
//! ## Components
//!
//! - [`widget`]: the timer widget itself
//! - [`timer`]: the whole-second countdown engine it is built on
//! - [`help`]: help line rendered from key bindings
//! - [`key`]: type-safe key bindings
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pomodoro::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     timer: TimerWidget,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { timer: timer_widget_new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! ## Ticks
//!
//! A running countdown keeps exactly one tick in flight. Pausing, resetting
//! or switching modes releases the tick handle; a tick scheduled under a
//! released handle is dropped when it arrives, so pausing and resuming never
//! makes the clock run faster.

pub mod clock;
pub mod error;
pub mod help;
pub mod key;
pub mod mode;
pub mod timer;
pub mod widget;

use bubbletea_rs::Cmd;

/// Keyboard focus management shared by interactive components.
///
/// A focused component handles key presses; a blurred one ignores them.
/// Messages that are not key presses, such as ticks, are processed either
/// way.
///
/// ```rust
/// use bubbletea_pomodoro::prelude::*;
///
/// let mut timer = timer_widget_new();
/// assert!(timer.focused());
///
/// timer.blur();
/// assert!(!timer.focused());
///
/// let _cmd = timer.focus();
/// assert!(timer.focused());
/// ```
pub trait Component {
    /// Gives the component focus, optionally returning a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use error::{Error, Result};
pub use help::Model as HelpModel;
pub use key::{matches, Binding, Help as KeyHelp, KeyPress};
pub use mode::Mode;
pub use timer::{new as countdown_new, Model as Countdown, TickHandle, TickMsg as CountdownTickMsg};
pub use widget::{
    new as timer_widget_new, new_with_options as timer_widget_new_with_options,
    KeyMap as TimerWidgetKeyMap, Model as TimerWidget, PrimaryActionMsg, PrimaryButton,
    ResetMsg, ResetVisibility, SelectModeMsg, Styles as TimerWidgetStyles, WidgetOption,
};

/// Commonly used types and constructors.
///
/// ```rust
/// use bubbletea_pomodoro::prelude::*;
///
/// let widget = timer_widget_new_with_options(&[with_mode(Mode::ShortBreak)]);
/// assert_eq!(widget.remaining(), 300);
/// ```
pub mod prelude {
    pub use crate::help::{KeyMap as HelpKeyMap, Model as HelpModel};
    pub use crate::key::{matches, Binding, KeyPress};
    pub use crate::mode::Mode;
    pub use crate::timer::{Model as Countdown, TickHandle, TickMsg as CountdownTickMsg};
    pub use crate::widget::{
        new as timer_widget_new, new_with_options as timer_widget_new_with_options,
        with_key_map, with_mode, with_reset_visibility, with_styles,
        Model as TimerWidget, PrimaryActionMsg, PrimaryButton, ResetMsg, ResetVisibility,
        SelectModeMsg,
    };
    pub use crate::Component;
}
