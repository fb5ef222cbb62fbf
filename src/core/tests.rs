#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use chrono::{DateTime, Utc};

    use crate::core::dropdown::{LeadDropdowns, select_option};
    use crate::core::handoff::{HandoffSettings, RecordingOpener, compose_lead_message};
    use crate::core::lead::{LeadCapture, LeadField, LeadForm, SubmitStatus};
    use crate::core::parallax::ParallaxDirective;
    use crate::core::pipeline::{
        LeadPipeline, LeadStore, PROCESSING_DELAY, SUCCESS_RESET_DELAY, deliver_lead,
    };
    use crate::core::preferences::{MemoryStore, disable_music, music_disabled};
    use crate::core::reveal::{RevealCommand, RevealDirective, RevealTracker, TriggerState};
    use crate::core::schedule::{FixedClock, ManualScheduler, Scheduler};
    use crate::core::startup::{
        COMPLETE_HOLD, EXIT_DURATION, GRACE_DELAY, LoadingProgress, SplashPhase, StartupGate,
    };
    use crate::core::viewport::{ViewportBus, ViewportEvent};

    fn instant() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-15T17:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ana() -> LeadForm {
        LeadForm {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            project_type: "premium-website".to_string(),
            budget_range: "1k-5k".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn store_with(form: LeadForm) -> Rc<RefCell<LeadCapture>> {
        let mut capture = LeadCapture::new();
        for field in LeadField::ALL {
            capture.update_field(field, form.get(field));
        }
        Rc::new(RefCell::new(capture))
    }

    fn pipeline(
        scheduler: &ManualScheduler,
        store: &Rc<RefCell<LeadCapture>>,
        opener: &RecordingOpener,
    ) -> LeadPipeline<ManualScheduler, Rc<RefCell<LeadCapture>>, RecordingOpener, FixedClock> {
        LeadPipeline::new(
            scheduler.clone(),
            Rc::clone(store),
            opener.clone(),
            FixedClock(instant()),
            HandoffSettings::default(),
        )
    }

    fn scrolled(scroll_y: f64) -> ViewportEvent {
        ViewportEvent::Scrolled {
            scroll_y,
            viewport_height: 1000.0,
        }
    }

    // ========================================================================
    // Handoff message
    // ========================================================================

    #[test]
    fn test_handoff_message_is_deterministic() {
        let settings = HandoffSettings::default();
        let first = compose_lead_message(&ana(), instant(), &settings).unwrap();
        let second = compose_lead_message(&ana(), instant(), &settings).unwrap();
        assert_eq!(first, second);
        assert_eq!(settings.deep_link(&first), settings.deep_link(&second));
    }

    #[test]
    fn test_handoff_link_for_ana() {
        let opener = RecordingOpener::new();
        let url = deliver_lead(
            &ana(),
            &HandoffSettings::default(),
            &opener,
            &FixedClock(instant()),
        )
        .unwrap();

        assert!(url.starts_with("https://wa.me/557132159293?text=%F0%9F%8E%AF%20*NEW%20PROJECT%20INQUIRY*%0A"));
        assert!(url.contains("%F0%9F%91%A4%20*Client%3A*%20Ana%0A"));
        assert!(url.contains("ana%40x.com"));
        assert!(url.contains("Premium%20Website"));
        assert!(url.contains("%241%2C000%20-%20%245%2C000"));
        assert!(url.contains("03%2F15%2F2025%2C%2002%3A30%20PM%20(Brazil%20Time)"));
        assert!(url.ends_with("johnnightsteel.netlify.app"));
        assert_eq!(opener.opened(), vec![url]);
    }

    // ========================================================================
    // Submit lifecycle
    // ========================================================================

    #[test]
    fn test_valid_submit_lifecycle() {
        let scheduler = ManualScheduler::new();
        let store = store_with(ana());
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);

        assert_eq!(store.borrow().status, SubmitStatus::Idle);
        pipeline.submit().unwrap();
        assert_eq!(store.borrow().status, SubmitStatus::Submitting);

        scheduler.advance(PROCESSING_DELAY - Duration::from_millis(1));
        assert_eq!(store.borrow().status, SubmitStatus::Submitting);
        assert!(opener.opened().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(store.borrow().status, SubmitStatus::Success);
        assert_eq!(opener.opened().len(), 1);
        assert_eq!(store.borrow().form, ana());

        scheduler.advance(SUCCESS_RESET_DELAY);
        let capture = store.borrow();
        assert_eq!(capture.status, SubmitStatus::Idle);
        assert_eq!(capture.form, LeadForm::default());
        assert!(!pipeline.has_pending_task());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_invalid_submit_never_passes_through_submitting() {
        let scheduler = ManualScheduler::new();
        let mut form = ana();
        form.message = "   ".to_string();
        let store = store_with(form);
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);

        assert!(pipeline.submit().is_err());
        assert_eq!(store.borrow().status, SubmitStatus::Error);
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(Duration::from_secs(10));
        assert!(opener.opened().is_empty());
        assert_eq!(store.borrow().status, SubmitStatus::Error);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let scheduler = ManualScheduler::new();
        let store = store_with(ana());
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);

        pipeline.submit().unwrap();
        assert!(pipeline.submit().is_err());
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.advance(PROCESSING_DELAY);
        assert_eq!(opener.opened().len(), 1);
    }

    #[test]
    fn test_edit_after_error_returns_to_idle() {
        let scheduler = ManualScheduler::new();
        let store = store_with(LeadForm::default());
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);

        assert!(pipeline.submit().is_err());
        assert_eq!(store.borrow().status, SubmitStatus::Error);

        store.with_capture(|capture| capture.update_field(LeadField::Name, "A"));
        assert_eq!(store.borrow().status, SubmitStatus::Idle);
    }

    #[test]
    fn test_blocked_popup_surfaces_as_error() {
        let scheduler = ManualScheduler::new();
        let store = store_with(ana());
        let opener = RecordingOpener::blocking();
        let pipeline = pipeline(&scheduler, &store, &opener);

        pipeline.submit().unwrap();
        scheduler.advance(PROCESSING_DELAY);
        assert_eq!(store.borrow().status, SubmitStatus::Error);
        assert_eq!(store.borrow().form, ana());
        assert!(!pipeline.has_pending_task());
    }

    #[test]
    fn test_teardown_cancels_pending_reset() {
        let scheduler = ManualScheduler::new();
        let store = store_with(ana());
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);

        pipeline.submit().unwrap();
        scheduler.advance(PROCESSING_DELAY);
        assert_eq!(scheduler.pending_count(), 1);

        drop(pipeline);
        assert_eq!(scheduler.pending_count(), 0);
        scheduler.advance(SUCCESS_RESET_DELAY);
        assert_eq!(store.borrow().status, SubmitStatus::Success);
    }

    #[test]
    fn test_teardown_before_processing_opens_nothing() {
        let scheduler = ManualScheduler::new();
        let store = store_with(ana());
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);

        pipeline.submit().unwrap();
        drop(pipeline);
        scheduler.advance(PROCESSING_DELAY * 4);
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_dropdown_selection_feeds_submission() {
        let scheduler = ManualScheduler::new();
        let store = store_with(ana());
        let opener = RecordingOpener::new();
        let pipeline = pipeline(&scheduler, &store, &opener);
        let mut dropdowns = LeadDropdowns::default();

        dropdowns.budget_range.toggle();
        store.with_capture(|capture| {
            select_option(capture, &mut dropdowns, LeadField::BudgetRange, "more-than-20k")
        });
        assert!(!dropdowns.budget_range.is_open());

        pipeline.submit().unwrap();
        scheduler.advance(PROCESSING_DELAY);
        assert!(opener.opened()[0].contains("More%20than%20%2420%2C000"));
    }

    // ========================================================================
    // Viewport bindings
    // ========================================================================

    #[test]
    fn test_reveal_bindings_leave_no_listeners() {
        let bus = ViewportBus::new();
        let trackers: Vec<Rc<RefCell<RevealTracker>>> = (0..3)
            .map(|i| {
                Rc::new(RefCell::new(RevealTracker::new(
                    RevealDirective::default().with_delay(0.2 * i as f64),
                )))
            })
            .collect();

        let subscriptions: Vec<_> = trackers
            .iter()
            .enumerate()
            .map(|(i, tracker)| {
                let tracker = Rc::clone(tracker);
                let element_top = 1200.0 + 400.0 * i as f64;
                bus.subscribe(move |event| {
                    if let ViewportEvent::Scrolled {
                        scroll_y,
                        viewport_height,
                    } = *event
                    {
                        tracker
                            .borrow_mut()
                            .observe(element_top - scroll_y, viewport_height);
                    }
                })
            })
            .collect();
        assert_eq!(bus.listener_count(), 3);

        bus.publish(scrolled(500.0));
        let states: Vec<TriggerState> = trackers.iter().map(|t| t.borrow().state()).collect();
        assert_eq!(
            states,
            vec![TriggerState::Playing, TriggerState::Pending, TriggerState::Pending]
        );

        drop(subscriptions);
        assert_eq!(bus.listener_count(), 0);

        bus.publish(scrolled(5000.0));
        assert_eq!(trackers[2].borrow().state(), TriggerState::Pending);
    }

    #[test]
    fn test_parallax_and_reveal_unmount_together() {
        let bus = ViewportBus::new();
        let offset = Rc::new(RefCell::new(0.0));
        let reveal = Rc::new(RefCell::new(RevealTracker::new(RevealDirective::default())));

        let parallax_sub = {
            let offset = Rc::clone(&offset);
            let directive = ParallaxDirective::default();
            bus.subscribe(move |event| {
                if let ViewportEvent::Scrolled {
                    scroll_y,
                    viewport_height,
                } = *event
                {
                    *offset.borrow_mut() =
                        directive.offset_percent(1000.0 - scroll_y, 1000.0, viewport_height);
                }
            })
        };
        let reveal_sub = {
            let reveal = Rc::clone(&reveal);
            bus.subscribe(move |event| {
                if let ViewportEvent::Scrolled {
                    scroll_y,
                    viewport_height,
                } = *event
                {
                    reveal.borrow_mut().observe(1000.0 - scroll_y, viewport_height);
                }
            })
        };

        bus.publish(scrolled(1000.0));
        assert_eq!(*offset.borrow(), -12.5);
        assert_eq!(reveal.borrow().state(), TriggerState::Playing);

        parallax_sub.cancel();
        reveal_sub.cancel();
        drop(parallax_sub);
        drop(reveal_sub);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_reveal_toggles_on_repeated_passes() {
        let mut tracker = RevealTracker::new(RevealDirective::default());
        let mut commands = Vec::new();
        for top in [900.0, 800.0, 700.0, 900.0, 950.0, 600.0] {
            if let Some(command) = tracker.observe(top, 1000.0) {
                commands.push(command);
            }
        }
        assert_eq!(
            commands,
            vec![
                RevealCommand::PlayForward,
                RevealCommand::PlayReverse,
                RevealCommand::PlayForward
            ]
        );
    }

    // ========================================================================
    // Startup
    // ========================================================================

    #[test]
    fn test_startup_gate_waits_for_grace_timer() {
        let scheduler = ManualScheduler::new();
        let gate = Rc::new(RefCell::new(StartupGate::default()));
        let mut grace = None;

        for src in ["/img/1.jpeg", "/img/2.jpeg"] {
            if gate.borrow_mut().resolve(src) {
                let gate = Rc::clone(&gate);
                grace = Some(scheduler.schedule(
                    GRACE_DELAY,
                    Box::new(move || gate.borrow_mut().finish_grace()),
                ));
            }
        }
        assert!(grace.is_some());
        assert!(!gate.borrow().is_ready());

        scheduler.advance(GRACE_DELAY - Duration::from_millis(1));
        assert!(!gate.borrow().is_ready());
        scheduler.advance(Duration::from_millis(1));
        assert!(gate.borrow().is_ready());
    }

    #[test]
    fn test_splash_exit_opens_gate_while_images_load() {
        let scheduler = ManualScheduler::new();
        let gate = Rc::new(RefCell::new(StartupGate::default()));
        let progress = Rc::new(RefCell::new(LoadingProgress::new()));
        let exit = Rc::new(RefCell::new(None));

        assert!(!gate.borrow_mut().resolve("/img/1.jpeg"));
        while !progress.borrow_mut().tick(1.0) {}
        assert_eq!(progress.borrow().phase(), SplashPhase::Holding);

        let _hold = {
            let (scheduler, gate, progress, exit) = (
                scheduler.clone(),
                Rc::clone(&gate),
                Rc::clone(&progress),
                Rc::clone(&exit),
            );
            scheduler.clone().schedule(
                COMPLETE_HOLD,
                Box::new(move || {
                    progress.borrow_mut().begin_exit();
                    let task = scheduler.schedule(
                        EXIT_DURATION,
                        Box::new(move || gate.borrow_mut().finish_splash()),
                    );
                    *exit.borrow_mut() = Some(task);
                }),
            )
        };

        scheduler.advance(COMPLETE_HOLD);
        assert_eq!(progress.borrow().phase(), SplashPhase::Exiting);
        assert!(!gate.borrow().is_ready());

        scheduler.advance(EXIT_DURATION - Duration::from_millis(1));
        assert!(!gate.borrow().is_ready());
        scheduler.advance(Duration::from_millis(1));
        assert!(gate.borrow().is_ready());
        assert!(!gate.borrow().all_resolved());
    }

    #[test]
    fn test_music_opt_out_survives_restart() {
        let storage = MemoryStore::new();
        assert!(!music_disabled(&storage));

        disable_music(&storage).unwrap();
        let next_visit = storage.clone();
        assert!(music_disabled(&next_visit));
        assert_eq!(storage.write_count(), 1);
    }
}
