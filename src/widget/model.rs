//! Timer widget state and transitions.

use super::keymap::{default_key_map, KeyMap};
use super::types::{PrimaryActionMsg, PrimaryButton, ResetMsg, ResetVisibility, SelectModeMsg};
use super::view::Styles;
use crate::help;
use crate::mode::Mode;
use crate::timer::{self, TickHandle};
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::time::Duration;
use tracing::debug;

/// A Pomodoro timer: mode selector, countdown, primary button and reset
/// button.
///
/// All state lives here. Button captions, the clock readout and reset
/// visibility are computed from it on demand and never stored.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pomodoro::widget::{new, PrimaryButton};
/// use bubbletea_pomodoro::mode::Mode;
///
/// let mut widget = new();
/// assert_eq!(widget.mode(), Mode::Work);
/// assert_eq!(widget.time_view(), "25:00");
/// assert_eq!(widget.primary_button(), PrimaryButton::Start);
///
/// let _tick = widget.primary_action();
/// assert!(widget.running());
/// assert_eq!(widget.primary_button().label(), "PAUSE");
///
/// widget.select_mode(Mode::ShortBreak);
/// assert!(!widget.running());
/// assert_eq!(widget.time_view(), "05:00");
/// ```
///
/// # Integration
///
/// ```rust
/// use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
/// use bubbletea_pomodoro::widget::{new, Model as TimerWidget};
///
/// struct App {
///     timer: TimerWidget,
/// }
///
/// impl BubbleTeaModel for App {
///     fn init() -> (Self, Option<Cmd>) {
///         (Self { timer: new() }, None)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         // Key presses, input messages and ticks are all routed here.
///         self.timer.update(msg)
///     }
///
///     fn view(&self) -> String {
///         self.timer.view()
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Model {
    pub(super) mode: Mode,
    pub(super) countdown: timer::Model,
    /// When the RESET button is rendered.
    pub reset_visibility: ResetVisibility,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Rendering styles.
    pub styles: Styles,
    /// Help line state.
    pub help: help::Model,
    /// Whether the help line is rendered under the buttons.
    pub show_help: bool,
    pub(super) focus: bool,
}

/// Configuration applied by [`new_with_options`].
pub enum WidgetOption {
    /// Initial mode.
    WithMode(Mode),
    /// Reset button visibility policy.
    WithResetVisibility(ResetVisibility),
    /// Rendering styles.
    WithStyles(Box<Styles>),
    /// Key bindings.
    WithKeyMap(Box<KeyMap>),
}

impl WidgetOption {
    fn apply(&self, m: &mut Model) {
        match self {
            WidgetOption::WithMode(mode) => {
                m.mode = *mode;
                m.countdown.reset(mode.duration());
            }
            WidgetOption::WithResetVisibility(v) => m.reset_visibility = *v,
            WidgetOption::WithStyles(styles) => m.styles = styles.as_ref().clone(),
            WidgetOption::WithKeyMap(keymap) => m.keymap = keymap.as_ref().clone(),
        }
    }
}

/// Starts the widget in `mode` instead of [`Mode::Work`].
pub fn with_mode(mode: Mode) -> WidgetOption {
    WidgetOption::WithMode(mode)
}

/// Chooses when the RESET button is rendered.
pub fn with_reset_visibility(visibility: ResetVisibility) -> WidgetOption {
    WidgetOption::WithResetVisibility(visibility)
}

/// Replaces the rendering styles.
pub fn with_styles(styles: Styles) -> WidgetOption {
    WidgetOption::WithStyles(Box::new(styles))
}

/// Replaces the key bindings.
pub fn with_key_map(keymap: KeyMap) -> WidgetOption {
    WidgetOption::WithKeyMap(Box::new(keymap))
}

/// Creates an idle widget in work mode at 25:00.
pub fn new() -> Model {
    Model::new()
}

/// Creates a widget and applies `opts` in order.
pub fn new_with_options(opts: &[WidgetOption]) -> Model {
    let mut m = Model::new();
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle widget in work mode at 25:00.
    pub fn new() -> Self {
        let mode = Mode::default();
        Self {
            mode,
            countdown: timer::new(mode.duration()),
            reset_visibility: ResetVisibility::default(),
            keymap: default_key_map(),
            styles: Styles::default(),
            help: help::Model::new(),
            show_help: true,
            focus: true,
        }
    }

    /// Sets the reset button visibility policy.
    pub fn with_reset_visibility(mut self, visibility: ResetVisibility) -> Self {
        self.reset_visibility = visibility;
        self
    }

    /// Sets whether the help line is rendered.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Id used to address ticks and input messages to this widget.
    pub fn id(&self) -> i64 {
        self.countdown.id()
    }

    /// The selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whole seconds left in the current session.
    pub fn remaining(&self) -> u64 {
        self.countdown.remaining()
    }

    /// Whether the countdown is ticking.
    pub fn running(&self) -> bool {
        self.countdown.running()
    }

    /// The live tick handle, if any.
    pub fn handle(&self) -> Option<TickHandle> {
        self.countdown.handle()
    }

    /// The countdown engine.
    pub fn countdown(&self) -> &timer::Model {
        &self.countdown
    }

    /// Switches to `mode`, stopping the countdown and loading the mode's
    /// full duration.
    ///
    /// Selecting the mode that is already active does nothing, even while
    /// running. Returns whether the mode changed.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.countdown.reset(mode.duration());
        debug!(id = self.id(), from = %self.mode, to = %mode, "mode switched");
        self.mode = mode;
        true
    }

    /// Selects the mode to the right of the current one.
    pub fn next_mode(&mut self) -> bool {
        self.select_mode(self.mode.next())
    }

    /// Selects the mode to the left of the current one.
    pub fn prev_mode(&mut self) -> bool {
        self.select_mode(self.mode.prev())
    }

    /// Starts the countdown. Returns the first tick command, or `None` when
    /// already running or at zero.
    pub fn start(&mut self) -> Option<Cmd> {
        self.countdown.start()
    }

    /// Pauses the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        self.countdown.pause();
    }

    /// Stops the countdown and restores the current mode's full duration.
    pub fn reset(&mut self) {
        self.countdown.reset(self.mode.duration());
    }

    /// What the primary button does right now.
    pub fn primary_button(&self) -> PrimaryButton {
        if self.running() {
            PrimaryButton::Pause
        } else if self.remaining() == 0 {
            PrimaryButton::Restart
        } else {
            PrimaryButton::Start
        }
    }

    /// Presses the primary button.
    ///
    /// Pauses while running; at zero resets and starts in one step;
    /// otherwise starts. Returns the tick command when the countdown starts.
    pub fn primary_action(&mut self) -> Option<Cmd> {
        match self.primary_button() {
            PrimaryButton::Pause => {
                self.pause();
                None
            }
            PrimaryButton::Restart => {
                self.reset();
                self.start()
            }
            PrimaryButton::Start => self.start(),
        }
    }

    /// Whether the RESET button is rendered under the current policy.
    pub fn reset_visible(&self) -> bool {
        match self.reset_visibility {
            ResetVisibility::Always => true,
            ResetVisibility::WhenModified => {
                self.running() || self.remaining() != self.mode.duration()
            }
        }
    }

    /// The clock readout, `MM:SS`.
    pub fn time_view(&self) -> String {
        self.countdown.view()
    }

    /// Releases the tick handle ahead of discarding the widget. Safe to call
    /// more than once; dropping the widget does the same.
    pub fn unmount(&mut self) {
        if self.countdown.cancel() {
            debug!(id = self.id(), "tick handle released on unmount");
        }
    }

    /// Command delivering a [`SelectModeMsg`] to this widget.
    pub fn select_mode_cmd(&self, mode: Mode) -> Cmd {
        let id = self.id();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(SelectModeMsg { id, mode }) as Msg
        })
    }

    /// Command delivering a [`PrimaryActionMsg`] to this widget.
    pub fn primary_action_cmd(&self) -> Cmd {
        let id = self.id();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(PrimaryActionMsg { id }) as Msg
        })
    }

    /// Command delivering a [`ResetMsg`] to this widget.
    pub fn reset_cmd(&self) -> Cmd {
        let id = self.id();
        bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(ResetMsg { id }) as Msg)
    }

    /// Routes input messages, key presses and ticks.
    ///
    /// Input messages addressed to another widget are ignored. Key presses
    /// are ignored while the widget is blurred.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(select) = msg.downcast_ref::<SelectModeMsg>() {
            if select.id == self.id() {
                self.select_mode(select.mode);
            }
            return None;
        }

        if let Some(press) = msg.downcast_ref::<PrimaryActionMsg>() {
            if press.id != self.id() {
                return None;
            }
            return self.primary_action();
        }

        if let Some(press) = msg.downcast_ref::<ResetMsg>() {
            if press.id == self.id() {
                self.reset();
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.focus {
                return None;
            }
            return self.handle_key(key_msg);
        }

        self.countdown.update(msg)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.primary.matches(key_msg) {
            return self.primary_action();
        }
        if self.keymap.reset.matches(key_msg) {
            self.reset();
        } else if self.keymap.work.matches(key_msg) {
            self.select_mode(Mode::Work);
        } else if self.keymap.short_break.matches(key_msg) {
            self.select_mode(Mode::ShortBreak);
        } else if self.keymap.long_break.matches(key_msg) {
            self.select_mode(Mode::LongBreak);
        } else if self.keymap.next_mode.matches(key_msg) {
            self.next_mode();
        } else if self.keymap.prev_mode.matches(key_msg) {
            self.prev_mode();
        } else if self.keymap.help.matches(key_msg) {
            self.help.toggle();
        }
        None
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
