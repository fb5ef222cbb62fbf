//! Cancellable delayed callbacks
//!
//! Everything time-driven on the site (submit delay, success auto-reset, the
//! startup grace period) goes through a [`Scheduler`]. The returned task handle
//! cancels the callback when dropped, so storing the handle in the owner is
//! enough to tie the timer to the owner's lifetime. The browser implementation
//! lives in the UI layer; [`ManualScheduler`] drives the same code in tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Source of delayed callbacks
pub trait Scheduler {
    /// Handle for a pending callback; dropping it cancels the callback
    type Task;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Task;
}

/// Wall clock used when stamping outgoing messages
pub trait Clock {
    fn now(&self) -> chrono::DateTime<chrono::Utc>;
}

/// [`Clock`] backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::Utc::now()
    }
}

/// [`Clock`] frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub chrono::DateTime<chrono::Utc>);

impl Clock for FixedClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.0
    }
}

struct Pending {
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualInner {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    pending: RefCell<BTreeMap<u64, Pending>>,
}

/// Deterministic scheduler advanced by hand
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<ManualInner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation
    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    pub fn pending_count(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Move the clock forward, running every callback that falls due in order
    ///
    /// Callbacks scheduled while advancing run too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.now.get() + by;
        while let Some((id, due)) = self.next_due(target) {
            self.inner.now.set(due);
            let pending = self.inner.pending.borrow_mut().remove(&id);
            if let Some(pending) = pending {
                (pending.callback)();
            }
        }
        self.inner.now.set(target);
    }

    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.inner
            .pending
            .borrow()
            .iter()
            .filter(|(_, pending)| pending.due <= limit)
            .min_by_key(|(id, pending)| (pending.due, **id))
            .map(|(id, pending)| (*id, pending.due))
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTask {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let due = self.inner.now.get() + delay;
        self.inner
            .pending
            .borrow_mut()
            .insert(id, Pending { due, callback });
        ManualTask {
            id,
            scheduler: Rc::downgrade(&self.inner),
        }
    }
}

/// Pending callback on a [`ManualScheduler`]
pub struct ManualTask {
    id: u64,
    scheduler: Weak<ManualInner>,
}

impl ManualTask {
    pub fn cancel(&self) {
        if let Some(inner) = self.scheduler.upgrade() {
            // Dropping the callback may drop other tasks; release the borrow first
            let removed = inner.pending.borrow_mut().remove(&self.id);
            drop(removed);
        }
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
