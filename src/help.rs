//! Help line rendered from a set of key bindings.
//!
//! Components expose their bindings through [`KeyMap`]; the help [`Model`]
//! renders them either as a single line (`space start • r reset`) or, with
//! `show_all`, as aligned columns. Disabled bindings are skipped, and a
//! `width` limit truncates the output with an ellipsis.
//!
//! ```rust
//! use bubbletea_pomodoro::help::{KeyMap, Model};
//! use bubbletea_pomodoro::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     start: Binding,
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.start, &self.quit]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.start], vec![&self.quit]]
//!     }
//! }
//!
//! let keys = Keys {
//!     start: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start"),
//!     quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
//! };
//! let help = Model::new();
//! let line = help.view(&keys);
//! assert!(line.contains("start"));
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Source of bindings for the help view.
pub trait KeyMap {
    /// Bindings for the single-line help.
    fn short_help(&self) -> Vec<&key::Binding>;
    /// Bindings for the expanded help, one inner `Vec` per column.
    fn full_help(&self) -> Vec<Vec<&key::Binding>>;
}

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Truncation marker.
    pub ellipsis: Style,
    /// Key labels in the single-line view.
    pub short_key: Style,
    /// Descriptions in the single-line view.
    pub short_desc: Style,
    /// Separator between single-line items.
    pub short_separator: Style,
    /// Key labels in the column view.
    pub full_key: Style,
    /// Descriptions in the column view.
    pub full_desc: Style,
    /// Gap between columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the column view instead of the single line.
    pub show_all: bool,
    /// Maximum visible width; 0 means unlimited.
    pub width: usize,
    /// Separator between single-line items.
    pub short_separator: String,
    /// Separator between columns.
    pub full_separator: String,
    /// Marker appended when output is truncated.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help view with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Flips between the single-line and column views.
    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Renders help for `keymap` in the current view mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders enabled bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;

        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let help = binding.help();
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc),
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }
            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders enabled bindings as columns, one per group.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);
        let sep_width = lipgloss::width_visible(&separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;

        for group in groups.iter().filter(|g| should_render_column(g)) {
            let column = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            let gap = if columns.is_empty() { 0 } else { sep_width };
            let column_width = lipgloss::width_visible(&column) + gap;

            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::with_capacity(columns.len() * 2);
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // `None` when the item fits; otherwise the ellipsis if it still fits, or "".
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) <= self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

/// A column is rendered when at least one of its bindings is enabled.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Binding;
    use crossterm::event::KeyCode;

    struct Keys {
        start: Binding,
        reset: Binding,
        quit: Binding,
    }

    impl Keys {
        fn new() -> Self {
            Self {
                start: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start"),
                reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
                quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            }
        }
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.reset, &self.quit]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.start, &self.reset], vec![&self.quit]]
        }
    }

    fn plain(s: &str) -> String {
        lipgloss::strip_ansi(s)
    }

    #[test]
    fn test_short_help_joins_with_separator() {
        let help = Model::new();
        assert_eq!(plain(&help.view(&Keys::new())), "space start • r reset • q quit");
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let mut keys = Keys::new();
        keys.reset.set_enabled(false);
        let out = plain(&Model::new().view(&keys));
        assert_eq!(out, "space start • q quit");
    }

    #[test]
    fn test_short_help_truncates_with_ellipsis() {
        let help = Model::new().with_width(16);
        let out = plain(&help.view(&Keys::new()));
        assert!(out.starts_with("space start"));
        assert!(out.ends_with('…'));
        assert!(!out.contains("quit"));
    }

    #[test]
    fn test_full_help_has_columns() {
        let mut help = Model::new();
        help.toggle();
        assert!(help.show_all);

        let out = plain(&help.view(&Keys::new()));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("space start"));
        assert!(lines[0].contains("q quit"));
        assert!(lines[1].contains("r reset"));
    }

    #[test]
    fn test_should_render_column() {
        let on = Binding::new(vec![KeyCode::Enter]);
        let off = Binding::new(vec![KeyCode::Esc]).with_disabled(true);
        assert!(should_render_column(&[&on, &off]));
        assert!(!should_render_column(&[&off]));
        assert!(!should_render_column(&[]));
    }

    #[test]
    fn test_empty_bindings_render_nothing() {
        let help = Model::new();
        assert_eq!(help.short_help_view(vec![]), "");
    }
}
