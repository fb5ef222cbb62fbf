//! Viewport event bus
//!
//! A single window listener publishes [`ViewportEvent`]s; every animated
//! element subscribes through [`ViewportBus::subscribe`] and holds on to the
//! returned [`Subscription`]. Dropping the guard unsubscribes, so unmounting a
//! component releases its listener without any explicit bookkeeping.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Measurement pushed by the window listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Scrolled {
        scroll_y: f64,
        viewport_height: f64,
    },
    Resized {
        viewport_width: f64,
        viewport_height: f64,
    },
}

impl ViewportEvent {
    pub fn viewport_height(&self) -> f64 {
        match self {
            ViewportEvent::Scrolled {
                viewport_height, ..
            }
            | ViewportEvent::Resized {
                viewport_height, ..
            } => *viewport_height,
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(&ViewportEvent)>>;

#[derive(Default)]
struct BusInner {
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<u64, Listener>>,
    last_event: Cell<Option<ViewportEvent>>,
}

/// Single-threaded publish/subscribe hub for viewport measurements
#[derive(Clone, Default)]
pub struct ViewportBus {
    inner: Rc<BusInner>,
}

impl std::fmt::Debug for ViewportBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportBus")
            .field("listeners", &self.listener_count())
            .field("last_event", &self.inner.last_event.get())
            .finish()
    }
}

impl ViewportBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`
    ///
    /// If an event has already been published the listener is called with it
    /// immediately, so late subscribers can measure without waiting for a scroll.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&ViewportEvent) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let listener: Listener = Rc::new(RefCell::new(listener));
        self.inner
            .listeners
            .borrow_mut()
            .insert(id, Rc::clone(&listener));

        if let Some(event) = self.inner.last_event.get()
            && let Ok(mut callback) = listener.try_borrow_mut()
        {
            callback(&event);
        }

        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
            active: Cell::new(true),
        }
    }

    /// Deliver `event` to every live subscriber
    pub fn publish(&self, event: ViewportEvent) {
        self.inner.last_event.set(Some(event));
        // Listeners may subscribe or drop guards while being notified
        let snapshot: Vec<Listener> = self.inner.listeners.borrow().values().cloned().collect();
        for listener in snapshot {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                callback(&event);
            }
        }
    }

    pub fn last_event(&self) -> Option<ViewportEvent> {
        self.inner.last_event.get()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Live registration on a [`ViewportBus`]; unsubscribes on drop
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    bus: Weak<BusInner>,
    active: Cell<bool>,
}

impl Subscription {
    /// Unsubscribe now; later calls and the eventual drop are no-ops
    pub fn cancel(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(bus) = self.bus.upgrade() {
            bus.listeners.borrow_mut().remove(&self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get() && self.bus.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
