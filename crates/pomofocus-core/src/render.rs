//! Self-rescheduling render loop.
//!
//! Each iteration is a discrete unit of work: at most one tick, then one
//! redraw, then a decision about when (if ever) to run again.
//!
//! ```text
//!  tick ── Idle (paused) ──> draw snapshot ──> Idle
//!    ├─── Continue ──> draw snapshot ──> After(1s)
//!    └─── Transitioned ──> log event, alert ──> Immediately
//! ```
//!
//! User actions arrive between iterations over an `mpsc` channel and are
//! always applied before a tick that is due at the same moment.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::events::Notification;
use crate::session::{Action, Session};
use crate::task::Task;
use crate::timer::{Snapshot, Tick};

/// Real-time delay between two running iterations.
pub const TICK_QUANTUM: Duration = Duration::from_secs(1);

/// Where the timer, the task list and alerts are shown.
pub trait RenderSurface {
    fn draw_timer(&mut self, snapshot: &Snapshot) -> Result<()>;

    fn draw_tasks(&mut self, tasks: &[Task]) -> Result<()>;

    fn alert(&mut self, notification: &Notification) -> Result<()>;
}

/// When the loop should run its next iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
    /// Wait for the next user action.
    Idle,
    After(Duration),
    Immediately,
}

#[derive(Debug)]
pub struct RenderLoop {
    quantum: Duration,
    pending: Option<Instant>,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::with_quantum(TICK_QUANTUM)
    }

    pub fn with_quantum(quantum: Duration) -> Self {
        Self {
            quantum,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<Instant> {
        self.pending
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            trace!("pending iteration cancelled");
        }
    }

    /// Record the next iteration. Only one may be pending; an immediate
    /// request pre-empts a delayed one, a delayed one never postpones an
    /// earlier pending deadline.
    pub fn schedule(&mut self, decision: Reschedule) {
        let now = Instant::now();
        self.pending = match (decision, self.pending) {
            (Reschedule::Idle, _) => None,
            (Reschedule::Immediately, _) => Some(now),
            (Reschedule::After(delay), Some(existing)) => Some(existing.min(now + delay)),
            (Reschedule::After(delay), None) => Some(now + delay),
        };
    }

    /// One loop iteration. Ticks only while the engine is running.
    pub fn iterate<S: RenderSurface + ?Sized>(
        &mut self,
        session: &mut Session,
        surface: &mut S,
    ) -> Result<Reschedule> {
        self.pending = None;
        match session.timer_mut().tick() {
            Tick::Idle => {
                surface.draw_timer(&session.snapshot())?;
                Ok(Reschedule::Idle)
            }
            Tick::Continue => {
                surface.draw_timer(&session.snapshot())?;
                Ok(Reschedule::After(self.quantum))
            }
            Tick::Transitioned { from, to, event } => {
                debug!(%from, %to, ?event, "interval transition");
                if let Some(notification) = event.notification() {
                    surface.alert(notification)?;
                }
                Ok(Reschedule::Immediately)
            }
        }
    }

    /// Apply a user action, redraw without ticking, and fix up the schedule:
    /// a running engine gets exactly one pending iteration, a stopped one none.
    /// Starting always waits a full quantum before the first tick, even if an
    /// immediate redraw was still pending.
    pub fn apply_action<S: RenderSurface + ?Sized>(
        &mut self,
        session: &mut Session,
        surface: &mut S,
        action: Action,
    ) -> Result<()> {
        let touches_tasks = action.touches_tasks();
        let was_running = session.timer().is_running();
        match session.handle_action(action) {
            Some(event) => trace!(?event, "action applied"),
            None => trace!("action had no effect"),
        }

        if touches_tasks {
            surface.draw_tasks(session.tasks())?;
        }
        surface.draw_timer(&session.snapshot())?;

        if !session.timer().is_running() {
            self.cancel();
        } else if !was_running {
            self.pending = Some(Instant::now() + self.quantum);
        } else if !self.is_scheduled() {
            self.schedule(Reschedule::After(self.quantum));
        }
        Ok(())
    }

    /// Drive the session until the action channel closes.
    ///
    /// A fresh loop runs one iteration straight away; a loop that already
    /// has an iteration pending keeps that deadline.
    pub async fn run<S: RenderSurface + ?Sized>(
        &mut self,
        session: &mut Session,
        surface: &mut S,
        mut actions: mpsc::Receiver<Action>,
    ) -> Result<()> {
        info!("render loop started");
        surface.draw_tasks(session.tasks())?;
        if self.is_scheduled() {
            surface.draw_timer(&session.snapshot())?;
        } else {
            let first = self.iterate(session, surface)?;
            self.schedule(first);
        }

        loop {
            let deadline = self.pending;
            tokio::select! {
                biased;

                action = actions.recv() => match action {
                    Some(action) => self.apply_action(session, surface, action)?,
                    None => break,
                },

                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    let next = self.iterate(session, surface)?;
                    self.schedule(next);
                }
            }
        }

        info!(
            completed = session.timer().completed_focus_count(),
            "render loop finished"
        );
        Ok(())
    }
}
