//! Key bindings for the timer widget.

use crate::help;
use crate::key::Binding;
use crossterm::event::KeyCode;

/// Keys understood by the timer widget.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Start, pause or restart.
    pub primary: Binding,
    /// Reset to the current mode's duration.
    pub reset: Binding,
    /// Switch to the work preset.
    pub work: Binding,
    /// Switch to the short break preset.
    pub short_break: Binding,
    /// Switch to the long break preset.
    pub long_break: Binding,
    /// Select the mode to the right.
    pub next_mode: Binding,
    /// Select the mode to the left.
    pub prev_mode: Binding,
    /// Toggle the expanded help.
    pub help: Binding,
}

/// Default bindings: `space`/`enter`, `r`, `1`–`3`, `tab`/`shift+tab`, `?`.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        primary: Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter])
            .with_help("space", "start/pause"),
        reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
        work: Binding::new(vec![KeyCode::Char('1')]).with_help("1", "pomo"),
        short_break: Binding::new(vec![KeyCode::Char('2')]).with_help("2", "short break"),
        long_break: Binding::new(vec![KeyCode::Char('3')]).with_help("3", "long break"),
        next_mode: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next mode"),
        prev_mode: Binding::new(vec![KeyCode::BackTab]).with_help("shift+tab", "prev mode"),
        help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl help::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.primary, &self.reset, &self.next_mode, &self.help]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.primary, &self.reset],
            vec![&self.work, &self.short_break, &self.long_break],
            vec![&self.next_mode, &self.prev_mode, &self.help],
        ]
    }
}
