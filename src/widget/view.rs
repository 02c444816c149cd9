//! Rendering for the timer widget.

use super::model::Model;
use crate::mode::Mode;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for each part of the widget.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Inactive mode tab.
    pub tab: Style,
    /// The selected mode tab.
    pub active_tab: Style,
    /// Clock readout.
    pub clock: Style,
    /// Clock readout while running.
    pub clock_running: Style,
    /// Primary and reset buttons.
    pub button: Style,
    /// Help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            tab: Style::new().foreground(subdued).padding(0, 1, 0, 1),
            active_tab: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true)
                .padding(0, 1, 0, 1),
            clock: Style::new().bold(true),
            clock_running: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                }),
            button: Style::new()
                .foreground(Color::from("212"))
                .bold(true)
                .padding(0, 1, 0, 1),
            help: Style::new(),
        }
    }
}

const TAB_GAP: &str = " ";
const BUTTON_GAP: &str = "  ";

impl Model {
    /// Mode selector row with the active mode highlighted.
    pub fn tabs_view(&self) -> String {
        let tabs: Vec<String> = Mode::ALL
            .iter()
            .map(|&mode| {
                let style = if mode == self.mode {
                    &self.styles.active_tab
                } else {
                    &self.styles.tab
                };
                style.clone().inline(true).render(mode.label())
            })
            .collect();
        tabs.join(TAB_GAP)
    }

    /// Primary button, followed by RESET when visible.
    pub fn buttons_view(&self) -> String {
        let button = self.styles.button.clone().inline(true);
        let mut out = button.render(self.primary_button().label());
        if self.reset_visible() {
            out.push_str(BUTTON_GAP);
            out.push_str(&button.render("RESET"));
        }
        out
    }

    /// Renders the whole widget: tabs, clock, buttons and optional help.
    pub fn view(&self) -> String {
        let clock_style = if self.running() {
            &self.styles.clock_running
        } else {
            &self.styles.clock
        };

        let rows = vec![
            self.tabs_view(),
            String::new(),
            clock_style.clone().inline(true).render(&self.time_view()),
            String::new(),
            self.buttons_view(),
        ];

        let width = rows
            .iter()
            .map(|r| lipgloss::width_visible(r))
            .max()
            .unwrap_or(0);
        let mut out: Vec<String> = rows.into_iter().map(|r| center(&r, width)).collect();

        if self.show_help {
            out.push(String::new());
            let help = self.help.view(&self.keymap);
            out.push(self.styles.help.clone().render(&help));
        }

        out.join("\n")
    }
}

fn center(row: &str, width: usize) -> String {
    if row.is_empty() {
        return String::new();
    }
    let pad = width.saturating_sub(lipgloss::width_visible(row)) / 2;
    format!("{}{}", " ".repeat(pad), row)
}
