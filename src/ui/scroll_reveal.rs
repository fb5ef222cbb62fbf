//! Entrance animation bound to the viewport bus

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::reveal::{
    DEFAULT_DISTANCE_PIXELS, DEFAULT_DURATION_SECONDS, RevealCommand, RevealDirection,
    RevealDirective, RevealTracker,
};
use crate::core::schedule::Scheduler;
use crate::core::viewport::ViewportEvent;
use crate::ui::browser::{BrowserScheduler, BrowserTask};
use crate::ui::viewport::bind_to_viewport;

/// Reveal `children` when the block's top crosses the trigger line
#[component]
pub fn ScrollReveal(
    children: Children,
    #[prop(default = RevealDirection::Up)] direction: RevealDirection,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = DEFAULT_DURATION_SECONDS)] duration: f64,
    #[prop(default = DEFAULT_DISTANCE_PIXELS)] distance: f64,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let directive = RevealDirective::new(direction)
        .with_delay(delay)
        .with_duration(duration)
        .with_distance(distance);
    let tracker = RwSignal::new(RevealTracker::new(directive));
    let settle: StoredValue<Option<BrowserTask>, LocalStorage> = StoredValue::new_local(None);

    let node = NodeRef::<Div>::new();
    let _subscription = bind_to_viewport(node, move |element, event| {
        if !matches!(event, ViewportEvent::Scrolled { .. }) {
            return;
        }
        let top = element.get_bounding_client_rect().top();
        let command = tracker
            .try_update(|tracker| tracker.observe(top, event.viewport_height()))
            .flatten();

        match command {
            Some(RevealCommand::PlayForward) => {
                let total = directive.delay_seconds + directive.duration_seconds;
                let task = BrowserScheduler.schedule(
                    Duration::from_secs_f64(total.max(0.0)),
                    Box::new(move || {
                        tracker.try_update(RevealTracker::finish);
                    }),
                );
                settle.set_value(Some(task));
            }
            Some(RevealCommand::PlayReverse) => settle.set_value(None),
            None => {}
        }
    });

    view! {
        <div
            node_ref=node
            class=class
            style=move || tracker.with(RevealTracker::style)
        >
            {children()}
        </div>
    }
}
