//! Submit orchestration for the contact form and the partnership call-to-action
//!
//! The pipeline never talks to a network. A valid submission waits out a short
//! processing delay, renders the handoff message, opens the WhatsApp deep link
//! and shows a success banner that clears itself a few seconds later. Timers come
//! from a [`Scheduler`] so tests can fast-forward them, and the single pending
//! task is owned by the pipeline: replacing or dropping it cancels the timer.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::error::LeadError;
use super::handoff::{
    HandoffSettings, LinkOpener, compose_lead_message, compose_partnership_message,
};
use super::lead::{LeadCapture, LeadForm};
use super::schedule::{Clock, Scheduler};

/// Simulated processing time before the link is opened
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// How long the success banner stays before the form is cleared
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// Delay before the partnership link is opened
pub const PARTNERSHIP_OPEN_DELAY: Duration = Duration::from_millis(800);

/// Shared, mutable home of the contact form state
pub trait LeadStore: Clone + 'static {
    /// Run `f` against the current state; `None` when the store is gone
    fn with_capture<R>(&self, f: impl FnOnce(&mut LeadCapture) -> R) -> Option<R>;

    fn snapshot(&self) -> Option<LeadCapture> {
        self.with_capture(|capture| capture.clone())
    }
}

impl LeadStore for Rc<RefCell<LeadCapture>> {
    fn with_capture<R>(&self, f: impl FnOnce(&mut LeadCapture) -> R) -> Option<R> {
        let mut capture = self.try_borrow_mut().ok()?;
        Some(f(&mut capture))
    }
}

/// Render `form` and open its deep link
pub fn deliver_lead<O, C>(
    form: &LeadForm,
    settings: &HandoffSettings,
    opener: &O,
    clock: &C,
) -> Result<String, LeadError>
where
    O: LinkOpener + ?Sized,
    C: Clock + ?Sized,
{
    let message = compose_lead_message(form, clock.now(), settings)?;
    let url = settings.deep_link(&message);
    opener.open(&url)?;
    Ok(url)
}

/// Contact form submit pipeline
pub struct LeadPipeline<S, St, O, C>
where
    S: Scheduler,
{
    scheduler: S,
    store: St,
    opener: O,
    clock: C,
    settings: HandoffSettings,
    pending: Rc<RefCell<Option<S::Task>>>,
}

impl<S, St, O, C> LeadPipeline<S, St, O, C>
where
    S: Scheduler + Clone + 'static,
    S::Task: 'static,
    St: LeadStore,
    O: LinkOpener + Clone + 'static,
    C: Clock + Clone + 'static,
{
    pub fn new(scheduler: S, store: St, opener: O, clock: C, settings: HandoffSettings) -> Self {
        Self {
            scheduler,
            store,
            opener,
            clock,
            settings,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Whether a processing delay or success reset is still scheduled
    pub fn has_pending_task(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Start a submission
    ///
    /// Returns `Err` when the form is incomplete (status is now `Error`) or a
    /// submission is already running. Failures after the processing delay are
    /// logged and surface only as the `Error` status.
    pub fn submit(&self) -> Result<(), LeadError> {
        let Some(started) = self.store.with_capture(|capture| capture.begin_submit()) else {
            return Ok(());
        };
        let snapshot = started?;

        let store = self.store.clone();
        let opener = self.opener.clone();
        let clock = self.clock.clone();
        let settings = self.settings.clone();
        let scheduler = self.scheduler.clone();
        let pending = Rc::downgrade(&self.pending);

        let task = self.scheduler.schedule(
            PROCESSING_DELAY,
            Box::new(move || {
                let finished = take_pending(&pending);
                match deliver_lead(&snapshot, &settings, &opener, &clock) {
                    Ok(url) => {
                        leptos::logging::log!("Lead handed off ({} bytes)", url.len());
                        store.with_capture(|capture| capture.finish_success());
                        let reset_store = store.clone();
                        let reset = scheduler.schedule(
                            SUCCESS_RESET_DELAY,
                            Box::new(move || {
                                reset_store.with_capture(|capture| capture.reset_after_success());
                            }),
                        );
                        if let Some(slot) = pending.upgrade() {
                            *slot.borrow_mut() = Some(reset);
                        }
                    }
                    Err(err) => {
                        leptos::logging::error!("Failed to hand off lead: {}", err);
                        store.with_capture(|capture| capture.finish_error());
                    }
                }
                drop(finished);
            }),
        );
        self.replace_pending(task);
        Ok(())
    }

    fn replace_pending(&self, task: S::Task) {
        let previous = self.pending.borrow_mut().replace(task);
        drop(previous);
    }

    /// Cancel any scheduled step
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

impl<S, St, O, C> Drop for LeadPipeline<S, St, O, C>
where
    S: Scheduler,
{
    fn drop(&mut self) {
        if let Ok(mut slot) = self.pending.try_borrow_mut() {
            let previous = slot.take();
            drop(slot);
            drop(previous);
        }
    }
}

fn take_pending<T>(pending: &Weak<RefCell<Option<T>>>) -> Option<T> {
    pending.upgrade().and_then(|slot| slot.borrow_mut().take())
}

/// Partnership call-to-action: open a pre-filled chat after a short delay
pub struct PartnershipHandoff<S, O, C>
where
    S: Scheduler,
{
    scheduler: S,
    opener: O,
    clock: C,
    settings: HandoffSettings,
    busy: Rc<Cell<bool>>,
    on_busy_change: Rc<dyn Fn(bool)>,
    pending: RefCell<Option<S::Task>>,
}

impl<S, O, C> PartnershipHandoff<S, O, C>
where
    S: Scheduler,
    O: LinkOpener + Clone + 'static,
    C: Clock,
{
    pub fn new(
        scheduler: S,
        opener: O,
        clock: C,
        settings: HandoffSettings,
        on_busy_change: impl Fn(bool) + 'static,
    ) -> Self {
        Self {
            scheduler,
            opener,
            clock,
            settings,
            busy: Rc::new(Cell::new(false)),
            on_busy_change: Rc::new(on_busy_change),
            pending: RefCell::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Compose the message now and open it once the delay elapses
    ///
    /// Ignored while a previous request is still waiting.
    pub fn request(&self) -> Result<(), LeadError> {
        if self.busy.get() {
            return Err(LeadError::AlreadySubmitting);
        }
        let message = compose_partnership_message(self.clock.now(), &self.settings)?;
        let url = self.settings.deep_link(&message);

        self.busy.set(true);
        (self.on_busy_change)(true);

        let opener = self.opener.clone();
        let busy = Rc::clone(&self.busy);
        let notify = Rc::clone(&self.on_busy_change);
        let task = self.scheduler.schedule(
            PARTNERSHIP_OPEN_DELAY,
            Box::new(move || {
                if let Err(err) = opener.open(&url) {
                    leptos::logging::error!("Failed to open partnership chat: {}", err);
                }
                busy.set(false);
                notify(false);
            }),
        );
        *self.pending.borrow_mut() = Some(task);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::HandoffError;
    use crate::core::handoff::RecordingOpener;
    use crate::core::lead::{LeadField, SubmitStatus};
    use crate::core::schedule::{FixedClock, ManualScheduler};

    fn clock() -> FixedClock {
        FixedClock(
            chrono::DateTime::parse_from_rfc3339("2025-03-15T17:30:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
        )
    }

    fn filled_store() -> Rc<RefCell<LeadCapture>> {
        let mut capture = LeadCapture::new();
        capture.update_field(LeadField::Name, "Ana");
        capture.update_field(LeadField::Email, "ana@x.io");
        capture.update_field(LeadField::ProjectType, "premium-website");
        capture.update_field(LeadField::BudgetRange, "5k-10k");
        capture.update_field(LeadField::Message, "Need a site");
        Rc::new(RefCell::new(capture))
    }

    fn status(store: &Rc<RefCell<LeadCapture>>) -> SubmitStatus {
        store.borrow().status
    }

    #[test]
    fn test_invalid_submit_never_opens() {
        let scheduler = ManualScheduler::new();
        let opener = RecordingOpener::new();
        let store = Rc::new(RefCell::new(LeadCapture::new()));
        let pipeline = LeadPipeline::new(
            scheduler.clone(),
            Rc::clone(&store),
            opener.clone(),
            clock(),
            HandoffSettings::default(),
        );

        assert_eq!(pipeline.submit(), Err(LeadError::IncompleteFields));
        assert_eq!(status(&store), SubmitStatus::Error);
        scheduler.advance(Duration::from_secs(10));
        assert!(opener.opened().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_blocked_popup_becomes_error() {
        let scheduler = ManualScheduler::new();
        let store = filled_store();
        let pipeline = LeadPipeline::new(
            scheduler.clone(),
            Rc::clone(&store),
            RecordingOpener::blocking(),
            clock(),
            HandoffSettings::default(),
        );

        pipeline.submit().unwrap();
        scheduler.advance(PROCESSING_DELAY);
        assert_eq!(status(&store), SubmitStatus::Error);
        assert!(!pipeline.has_pending_task());
        // Form is kept so the visitor can retry
        assert_eq!(store.borrow().form.name, "Ana");
    }

    #[test]
    fn test_invalid_timezone_becomes_error() {
        let scheduler = ManualScheduler::new();
        let store = filled_store();
        let opener = RecordingOpener::new();
        let pipeline = LeadPipeline::new(
            scheduler.clone(),
            Rc::clone(&store),
            opener.clone(),
            clock(),
            HandoffSettings {
                timezone: "Nowhere/Null".to_string(),
                ..HandoffSettings::default()
            },
        );

        pipeline.submit().unwrap();
        scheduler.advance(PROCESSING_DELAY);
        assert_eq!(status(&store), SubmitStatus::Error);
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_drop_cancels_pending_reset() {
        let scheduler = ManualScheduler::new();
        let store = filled_store();
        let pipeline = LeadPipeline::new(
            scheduler.clone(),
            Rc::clone(&store),
            RecordingOpener::new(),
            clock(),
            HandoffSettings::default(),
        );

        pipeline.submit().unwrap();
        scheduler.advance(PROCESSING_DELAY);
        assert_eq!(status(&store), SubmitStatus::Success);
        assert_eq!(scheduler.pending_count(), 1);

        drop(pipeline);
        assert_eq!(scheduler.pending_count(), 0);
        scheduler.advance(SUCCESS_RESET_DELAY);
        assert_eq!(status(&store), SubmitStatus::Success);
    }

    #[test]
    fn test_deliver_lead_returns_url() {
        let opener = RecordingOpener::new();
        let form = filled_store().borrow().form.clone();
        let url = deliver_lead(&form, &HandoffSettings::default(), &opener, &clock()).unwrap();
        assert!(url.starts_with("https://wa.me/557132159293?text=%F0%9F%8E%AF%20*NEW%20PROJECT%20INQUIRY*"));
        assert_eq!(opener.opened(), vec![url]);
    }

    #[test]
    fn test_partnership_waits_then_opens() {
        let scheduler = ManualScheduler::new();
        let opener = RecordingOpener::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let handoff = PartnershipHandoff::new(
            scheduler.clone(),
            opener.clone(),
            clock(),
            HandoffSettings::default(),
            move |busy| sink.borrow_mut().push(busy),
        );

        handoff.request().unwrap();
        assert!(handoff.is_busy());
        assert_eq!(handoff.request(), Err(LeadError::AlreadySubmitting));

        scheduler.advance(Duration::from_millis(799));
        assert!(opener.opened().is_empty());
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(opener.opened().len(), 1);
        assert!(opener.opened()[0].contains("johnnightsteel.com%2Fparceria"));
        assert!(!handoff.is_busy());
        assert_eq!(*changes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_partnership_blocked_popup_releases_button() {
        let scheduler = ManualScheduler::new();
        let handoff = PartnershipHandoff::new(
            scheduler.clone(),
            RecordingOpener::blocking(),
            clock(),
            HandoffSettings::default(),
            |_| {},
        );
        handoff.request().unwrap();
        scheduler.advance(PARTNERSHIP_OPEN_DELAY);
        assert!(!handoff.is_busy());
    }

    #[test]
    fn test_partnership_invalid_timezone() {
        let handoff = PartnershipHandoff::new(
            ManualScheduler::new(),
            RecordingOpener::new(),
            clock(),
            HandoffSettings {
                timezone: "bad".to_string(),
                ..HandoffSettings::default()
            },
            |_| {},
        );
        assert_eq!(
            handoff.request(),
            Err(LeadError::Handoff(HandoffError::InvalidTimezone(
                "bad".to_string()
            )))
        );
        assert!(!handoff.is_busy());
    }
}
