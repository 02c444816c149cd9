//! Countdown engine for the Pomodoro widget.
//!
//! The countdown owns the remaining whole seconds, the running flag and the
//! live [`TickHandle`]. It is a two-state machine:
//!
//! - **Idle**: no handle, ticks are ignored.
//! - **Running**: exactly one handle; one [`TickMsg`] for that handle is in
//!   flight at any time.
//!
//! A handle is identified by the countdown's id and a generation tag. Every
//! tick message carries both, and a tick is only accepted when its tag is
//! the live handle's tag. Cancelling therefore never has to chase the
//! scheduled command: the tick still arrives, but nothing accepts it.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pomodoro::timer::new;
//!
//! let mut countdown = new(300);
//! assert!(!countdown.running());
//!
//! let cmd = countdown.start();
//! assert!(cmd.is_some());
//! assert!(countdown.running());
//!
//! countdown.pause();
//! assert!(!countdown.running());
//! assert_eq!(countdown.remaining(), 300);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_pomodoro::timer::{new, Model};
//!
//! struct App {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = new(60);
//!         let cmd = countdown.start();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Tick messages schedule the next tick until the countdown hits zero.
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Remaining: {}", self.countdown.view())
//!     }
//! }
//! ```

use crate::clock;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

/// Time between two ticks. Each accepted tick removes one second, so this
/// is fixed to keep the clock in step with wall time.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered once per second while a countdown is running.
///
/// Only the countdown that scheduled it, and only while the same handle is
/// still live, will act on it. Hosts should forward every message to the
/// countdown and let it filter.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The id of the countdown that scheduled this tick.
    pub id: i64,
    /// Generation of the handle that scheduled this tick.
    tag: i64,
}

/// The registration of a running countdown's periodic tick.
///
/// At most one handle is live per countdown. A handle is released on pause,
/// reset, auto-stop at zero, and when the owning widget is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    id: i64,
    tag: i64,
}

impl TickHandle {
    /// Id of the countdown owning this handle.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Generation tag; strictly increases each time a countdown starts.
    pub fn tag(&self) -> i64 {
        self.tag
    }
}

/// A whole-second countdown.
///
/// Not `Clone`: a copy of a running countdown would share its live handle
/// and accept the same ticks.
///
/// ```compile_fail
/// let countdown = bubbletea_pomodoro::timer::new(10);
/// let _copy = countdown.clone();
/// ```
#[derive(Debug)]
pub struct Model {
    remaining: u64,
    id: i64,
    tag: i64,
    handle: Option<TickHandle>,
}

/// Creates an idle countdown of `seconds`.
pub fn new(seconds: u64) -> Model {
    Model {
        remaining: seconds,
        id: next_id(),
        tag: 0,
        handle: None,
    }
}

impl Model {
    /// Unique id of this countdown, used to address tick messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whole seconds left.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether a tick handle is live.
    pub fn running(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the countdown has reached zero.
    pub fn timedout(&self) -> bool {
        self.remaining == 0
    }

    /// The live tick handle, if any.
    pub fn handle(&self) -> Option<TickHandle> {
        self.handle
    }

    /// The tick message the live handle will deliver next.
    ///
    /// Returns `None` while idle. Useful for hosts that drive ticks
    /// themselves instead of through the runtime.
    pub fn tick_msg(&self) -> Option<TickMsg> {
        self.handle.map(|h| TickMsg {
            id: h.id,
            tag: h.tag,
        })
    }

    /// Transitions Idle → Running and returns the first tick command.
    ///
    /// Returns `None` without changing anything when already running or
    /// when no time is left.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running() {
            trace!(id = self.id, "start ignored, already running");
            return None;
        }
        if self.remaining == 0 {
            trace!(id = self.id, "start ignored, nothing left");
            return None;
        }

        self.tag += 1;
        let handle = TickHandle {
            id: self.id,
            tag: self.tag,
        };
        self.handle = Some(handle);
        debug!(id = self.id, tag = handle.tag, remaining = self.remaining, "countdown started");
        Some(self.schedule(handle))
    }

    /// Transitions Running → Idle, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.cancel() {
            debug!(id = self.id, remaining = self.remaining, "countdown paused");
        }
    }

    /// Stops the countdown and sets the remaining time to `seconds`.
    pub fn reset(&mut self, seconds: u64) {
        self.cancel();
        self.remaining = seconds;
        debug!(id = self.id, remaining = seconds, "countdown reset");
    }

    /// Releases the live handle. Returns whether one was live; calling it
    /// while idle is a no-op.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                trace!(id = handle.id, tag = handle.tag, "tick handle released");
                true
            }
            None => false,
        }
    }

    fn schedule(&self, handle: TickHandle) -> Cmd {
        let TickHandle { id, tag } = handle;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Processes tick messages.
    ///
    /// An accepted tick removes one second and schedules the next tick. The
    /// tick that finds one second (or less) left sets the countdown to zero
    /// and releases the handle instead, so no further tick is scheduled.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;

        if tick.id != self.id {
            return None;
        }
        let Some(handle) = self.handle else {
            trace!(id = self.id, tag = tick.tag, "tick dropped, countdown idle");
            return None;
        };
        if tick.tag != handle.tag {
            trace!(id = self.id, tag = tick.tag, live = handle.tag, "stale tick dropped");
            return None;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.handle = None;
            debug!(id = self.id, "countdown finished");
            return None;
        }

        self.remaining -= 1;
        trace!(id = self.id, remaining = self.remaining, "tick");
        Some(self.schedule(handle))
    }

    /// Renders the remaining time as `MM:SS`.
    pub fn view(&self) -> String {
        clock::format(self.remaining)
    }
}

impl BubbleTeaModel for Model {
    /// A running one-minute countdown, for standalone use.
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(60);
        let cmd = model.start();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deliver(model: &mut Model, msg: TickMsg) -> Option<Cmd> {
        model.update(Box::new(msg))
    }

    fn live_tick(model: &mut Model) -> Option<Cmd> {
        let msg = model.tick_msg().expect("countdown should be running");
        deliver(model, msg)
    }

    #[test]
    fn test_new_is_idle() {
        let model = new(300);
        assert_eq!(model.remaining(), 300);
        assert!(!model.running());
        assert!(model.handle().is_none());
        assert!(model.tick_msg().is_none());
        assert!(model.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(new(1).id(), new(1).id());
    }

    #[test]
    fn test_start_allocates_handle() {
        let mut model = new(10);
        assert!(model.start().is_some());
        let handle = model.handle().expect("handle");
        assert_eq!(handle.id(), model.id());
        assert_eq!(handle.tag(), 1);
    }

    #[test]
    fn test_start_while_running_keeps_handle() {
        let mut model = new(10);
        model.start();
        let handle = model.handle();
        assert!(model.start().is_none());
        assert_eq!(model.handle(), handle);
    }

    #[test]
    fn test_start_at_zero_is_refused() {
        let mut model = new(0);
        assert!(model.start().is_none());
        assert!(!model.running());
    }

    #[test]
    fn test_tick_decrements_and_reschedules() {
        let mut model = new(10);
        model.start();
        assert!(live_tick(&mut model).is_some());
        assert_eq!(model.remaining(), 9);
        assert!(model.running());
    }

    #[test]
    fn test_last_tick_stops_at_zero() {
        let mut model = new(2);
        model.start();
        assert!(live_tick(&mut model).is_some());
        assert_eq!(model.remaining(), 1);

        assert!(live_tick(&mut model).is_none());
        assert_eq!(model.remaining(), 0);
        assert!(!model.running());
        assert!(model.timedout());
    }

    #[test]
    fn test_pause_keeps_remaining() {
        let mut model = new(10);
        model.start();
        live_tick(&mut model);
        model.pause();
        assert!(!model.running());
        assert_eq!(model.remaining(), 9);
    }

    #[test]
    fn test_ticks_ignored_while_idle() {
        let mut model = new(10);
        model.start();
        let pending = model.tick_msg().expect("tick");
        model.pause();
        assert!(deliver(&mut model, pending).is_none());
        assert_eq!(model.remaining(), 10);
    }

    #[test]
    fn test_stale_tick_after_restart_is_dropped() {
        let mut model = new(10);
        model.start();
        let stale = model.tick_msg().expect("tick");
        model.pause();
        model.start();

        assert!(deliver(&mut model, stale).is_none());
        assert_eq!(model.remaining(), 10);

        assert!(live_tick(&mut model).is_some());
        assert_eq!(model.remaining(), 9);
    }

    #[test]
    fn test_tick_for_other_countdown_is_ignored() {
        let mut a = new(10);
        let mut b = new(10);
        a.start();
        b.start();
        let for_b = b.tick_msg().expect("tick");
        assert!(deliver(&mut a, for_b).is_none());
        assert_eq!(a.remaining(), 10);
    }

    #[test]
    fn test_reset_stops_and_restores() {
        let mut model = new(10);
        model.start();
        live_tick(&mut model);
        model.reset(10);
        assert!(!model.running());
        assert_eq!(model.remaining(), 10);
    }

    #[test]
    fn test_cancel_twice_is_noop() {
        let mut model = new(10);
        model.start();
        assert!(model.cancel());
        assert!(!model.cancel());
        assert!(!model.running());
    }

    #[test]
    fn test_non_tick_messages_ignored() {
        let mut model = new(10);
        model.start();
        assert!(model.update(Box::new("hello")).is_none());
        assert_eq!(model.remaining(), 10);
    }

    #[test]
    fn test_view_is_clock_format() {
        assert_eq!(new(65).view(), "01:05");
    }

    #[test]
    fn test_bubbletea_init_starts_running() {
        let (model, cmd) = <Model as BubbleTeaModel>::init();
        assert!(cmd.is_some());
        assert!(model.running());
        assert_eq!(model.remaining(), 60);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_tick_round_trip() {
        let mut model = new(5);
        let cmd = model.start().expect("tick command");

        let msg = cmd.await.expect("tick message");
        let tick = msg.downcast_ref::<TickMsg>().expect("tick type");
        assert_eq!(tick.id, model.id());

        assert!(model.update(msg).is_some());
        assert_eq!(model.remaining(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_takes_one_interval_per_second() {
        let mut model = new(5);
        let started = tokio::time::Instant::now();
        let mut next = model.start();

        while let Some(cmd) = next {
            let msg = cmd.await.expect("tick message");
            next = model.update(msg);
        }

        let elapsed = started.elapsed();
        assert_eq!(model.remaining(), 0);
        assert!(!model.running());
        assert!(elapsed >= TICK_INTERVAL * 5, "finished after {elapsed:?}");
        assert!(elapsed < TICK_INTERVAL * 6, "finished after {elapsed:?}");
    }
}
