//! Terminal Pomodoro timer.
//!
//! Runs a single timer widget full screen. Logging is off unless
//! `--log-file` is given, since the terminal belongs to the UI; the filter
//! is read from `POMODORO_LOG` (default `info`).

use anyhow::{anyhow, Context, Result};
use bubbletea_pomodoro::key::Binding;
use bubbletea_pomodoro::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "POMODORO_LOG";

#[derive(Debug, Clone, Parser)]
#[command(name = "pomodoro", version, about = "A Pomodoro timer for the terminal")]
struct Args {
    /// Mode to start in: work, short-break or long-break.
    #[arg(short, long, default_value_t = Mode::Work)]
    mode: Mode,

    /// When to show the reset button: always or when-modified.
    #[arg(long, default_value_t = ResetVisibility::Always)]
    reset_visibility: ResetVisibility,

    /// Append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// `Model::init` takes no arguments, so parsed flags are parked here first.
static ARGS: OnceCell<Args> = OnceCell::new();

struct App {
    timer: TimerWidget,
    quit: Binding,
    force_quit: Binding,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let timer = match ARGS.get() {
            Some(args) => timer_widget_new_with_options(&[
                with_mode(args.mode),
                with_reset_visibility(args.reset_visibility),
            ]),
            None => timer_widget_new(),
        };

        let app = App {
            timer,
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches(key_msg, &[&self.quit, &self.force_quit]) {
                info!(
                    mode = %self.timer.mode(),
                    remaining = self.timer.remaining(),
                    "quitting"
                );
                self.timer.unmount();
                return Some(quit());
            }
        }
        self.timer.update(msg)
    }

    fn view(&self) -> String {
        format!("\n{}\n\n  q quit\n", self.timer.view())
    }
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    info!(mode = %args.mode, reset_visibility = %args.reset_visibility, "starting");

    ARGS.set(args)
        .map_err(|_| anyhow!("arguments already initialised"))?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .map_err(|e| anyhow!("building program: {e}"))?;
    program
        .run()
        .await
        .map_err(|e| anyhow!("running program: {e}"))?;

    info!("stopped");
    Ok(())
}
