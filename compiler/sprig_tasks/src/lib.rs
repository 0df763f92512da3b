//! Sprig Tasks - running independent host actions.
//!
//! An [`Actions`] list holds no-argument callables and runs them either in
//! order or each on its own thread. Every strategy comes in three flavors:
//!
//! - blocked: return once every action has finished;
//! - blocked with a timeout: return [`Completion::TimedOut`] if the actions
//!   have not finished in time;
//! - unblocked: return a [`PendingRun`] at once.
//!
//! Actions are never cancelled. Those still running when a timeout expires
//! are abandoned and keep running on their threads.
//!
//! Nothing here knows about programs: a host wraps each run of a program,
//! with its own binder, in an action.

mod pending;

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::Sender;
use tracing::{debug, warn};

pub use pending::PendingRun;

/// A shareable unit of work.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// How a timed wait ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Finished,
    TimedOut,
}

impl Completion {
    pub fn is_finished(self) -> bool {
        matches!(self, Completion::Finished)
    }
}

/// An ordered list of actions.
#[derive(Clone, Default)]
pub struct Actions {
    actions: Vec<Action>,
}

impl Actions {
    pub fn new() -> Self {
        Actions::default()
    }

    pub fn push(&mut self, action: impl Fn() + Send + Sync + 'static) {
        self.actions.push(Arc::new(action));
    }

    /// Builder form of [`push`](Actions::push).
    #[must_use]
    pub fn with(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.push(action);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    // -------------------------------------------------------------------------
    // Sequential
    // -------------------------------------------------------------------------

    /// Run every action in order on the calling thread.
    pub fn execute_sequentially_blocked(&self) {
        debug!(actions = self.len(), "running sequentially");
        for action in &self.actions {
            action();
        }
    }

    /// Run every action in order on a worker thread, waiting at most
    /// `timeout`.
    pub fn execute_sequentially_blocked_for(&self, timeout: Duration) -> Completion {
        finish_within(&self.execute_sequentially_unblocked(), timeout)
    }

    /// Run every action in order on a worker thread.
    pub fn execute_sequentially_unblocked(&self) -> PendingRun {
        debug!(actions = self.len(), "starting sequential run");
        let (done, pending) = PendingRun::channel(self.len());
        let actions = self.actions.clone();
        spawn("sprig-actions".to_string(), move || {
            for action in &actions {
                action();
                signal(&done);
            }
        });
        pending
    }

    // -------------------------------------------------------------------------
    // Parallel
    // -------------------------------------------------------------------------

    /// Run every action on its own thread and wait for all of them.
    pub fn execute_parallel_blocked(&self) {
        self.execute_parallel_unblocked().wait();
    }

    /// Run every action on its own thread, waiting at most `timeout` for
    /// all of them.
    pub fn execute_parallel_blocked_for(&self, timeout: Duration) -> Completion {
        finish_within(&self.execute_parallel_unblocked(), timeout)
    }

    /// Run every action on its own thread.
    pub fn execute_parallel_unblocked(&self) -> PendingRun {
        debug!(actions = self.len(), "starting parallel run");
        let (done, pending) = PendingRun::channel(self.len());
        for (index, action) in self.actions.iter().enumerate() {
            let action = Arc::clone(action);
            let done = done.clone();
            spawn(format!("sprig-action-{index}"), move || {
                action();
                signal(&done);
            });
        }
        pending
    }
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actions")
            .field("len", &self.actions.len())
            .finish()
    }
}

impl<F> FromIterator<F> for Actions
where
    F: Fn() + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut actions = Actions::new();
        for action in iter {
            actions.push(action);
        }
        actions
    }
}

fn finish_within(pending: &PendingRun, timeout: Duration) -> Completion {
    let completion = pending.wait_for(timeout);
    if completion == Completion::TimedOut {
        warn!(
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            unfinished = pending.remaining(),
            "abandoning actions that did not finish in time"
        );
    }
    completion
}

fn signal(done: &Sender<()>) {
    // The receiving run may already have been dropped.
    let _ = done.send(());
}

/// A failed spawn drops `work` and with it the completion sender, so
/// waiters stop counting on it.
fn spawn(name: String, work: impl FnOnce() + Send + 'static) {
    if let Err(err) = thread::Builder::new().name(name).spawn(work) {
        warn!(error = %err, "failed to spawn action thread");
    }
}

