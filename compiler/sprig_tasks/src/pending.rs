//! Handle on actions running in the background.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};

use crate::Completion;

/// Actions started by an unblocked execution.
///
/// Every finished action sends one signal. When all senders are gone
/// without signalling (a worker panicked, or could not be spawned) nothing
/// more can finish and the run counts as finished.
pub struct PendingRun {
    done: Receiver<()>,
    remaining: AtomicUsize,
}

impl PendingRun {
    pub(crate) fn channel(actions: usize) -> (Sender<()>, PendingRun) {
        let (sender, done) = channel::unbounded();
        let pending = PendingRun {
            done,
            remaining: AtomicUsize::new(actions),
        };
        (sender, pending)
    }

    /// Number of actions that have not finished yet.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Whether every action has finished, without waiting.
    pub fn is_finished(&self) -> bool {
        while self.remaining() > 0 {
            match self.done.try_recv() {
                Ok(()) => self.count_one(),
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => self.abandon(),
            }
        }
        true
    }

    /// Block until every action has finished.
    pub fn wait(&self) {
        while self.remaining() > 0 {
            match self.done.recv() {
                Ok(()) => self.count_one(),
                Err(_) => self.abandon(),
            }
        }
    }

    /// Block until every action has finished or `timeout` has passed.
    pub fn wait_for(&self, timeout: Duration) -> Completion {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait();
            return Completion::Finished;
        };
        while self.remaining() > 0 {
            match self.done.recv_deadline(deadline) {
                Ok(()) => self.count_one(),
                Err(RecvTimeoutError::Timeout) => return Completion::TimedOut,
                Err(RecvTimeoutError::Disconnected) => self.abandon(),
            }
        }
        Completion::Finished
    }

    fn count_one(&self) {
        let _ = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    fn abandon(&self) {
        self.remaining.store(0, Ordering::Release);
    }
}

impl std::fmt::Debug for PendingRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRun")
            .field("remaining", &self.remaining())
            .finish()
    }
}
