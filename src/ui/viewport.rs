//! Viewport bus provider
//!
//! One window `scroll` listener and one `resize` listener feed a shared
//! [`ViewportBus`]; reveal and parallax bindings subscribe to it. Both listeners
//! are removed when the provider unmounts.

use leptos::prelude::*;

use crate::core::viewport::{Subscription, ViewportBus, ViewportEvent};

/// Context handle for the page's viewport bus
#[derive(Clone, Copy)]
pub struct ViewportContext {
    bus: StoredValue<ViewportBus, LocalStorage>,
}

impl ViewportContext {
    pub fn subscribe(&self, listener: impl FnMut(&ViewportEvent) + 'static) -> Option<Subscription> {
        self.bus.try_with_value(|bus| bus.subscribe(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.bus
            .try_with_value(ViewportBus::listener_count)
            .unwrap_or(0)
    }
}

fn publish_current(bus: StoredValue<ViewportBus, LocalStorage>, resized: bool) {
    let Some((scroll_y, viewport_width, viewport_height)) = crate::ui::browser::viewport_metrics()
    else {
        return;
    };
    bus.with_value(|bus| {
        if resized {
            bus.publish(ViewportEvent::Resized {
                viewport_width,
                viewport_height,
            });
        }
        bus.publish(ViewportEvent::Scrolled {
            scroll_y,
            viewport_height,
        });
    });
}

/// Provide the viewport bus to the component tree
pub fn provide_viewport_context() -> ViewportContext {
    let bus = StoredValue::new_local(ViewportBus::new());
    let ctx = ViewportContext { bus };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{resize, scroll};

        let scroll_handle = window_event_listener(scroll, move |_| publish_current(bus, false));
        let resize_handle = window_event_listener(resize, move |_| publish_current(bus, true));

        // First measurement once the page is mounted
        Effect::new(move |_| publish_current(bus, true));

        on_cleanup(move || {
            drop(scroll_handle);
            drop(resize_handle);
        });
    }

    provide_context(ctx);
    ctx
}

pub fn use_viewport_context() -> Option<ViewportContext> {
    use_context::<ViewportContext>()
}

/// Subscription slot owned by a component; dropped with the component
pub type SubscriptionSlot = StoredValue<Option<Subscription>, LocalStorage>;

/// Subscribe once `node` has mounted, and release the subscription on cleanup
///
/// `on_event` receives the mounted element alongside every viewport event.
pub fn bind_to_viewport<F>(node: NodeRef<leptos::html::Div>, on_event: F) -> SubscriptionSlot
where
    F: FnMut(&leptos::web_sys::HtmlDivElement, &ViewportEvent) + 'static,
{
    let slot: SubscriptionSlot = StoredValue::new_local(None);

    #[cfg(not(feature = "ssr"))]
    {
        let ctx = use_viewport_context();
        let mut on_event = Some(on_event);
        Effect::new(move |_| {
            let Some(element) = node.get() else { return };
            let Some(mut handler) = on_event.take() else { return };
            let Some(ctx) = ctx else {
                leptos::logging::warn!("Viewport binding without a viewport provider");
                return;
            };
            let subscription = ctx.subscribe(move |event| handler(&element, event));
            slot.set_value(subscription);
        });

        on_cleanup(move || {
            let released = slot.try_update_value(Option::take);
            drop(released);
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (node, on_event);
    }

    slot
}

/// Page-level subscription (no element to measure), released on cleanup
pub fn subscribe_viewport<F>(on_event: F) -> SubscriptionSlot
where
    F: FnMut(&ViewportEvent) + 'static,
{
    let slot: SubscriptionSlot = StoredValue::new_local(None);

    #[cfg(not(feature = "ssr"))]
    {
        match use_viewport_context() {
            Some(ctx) => slot.set_value(ctx.subscribe(on_event)),
            None => leptos::logging::warn!("Viewport subscription without a viewport provider"),
        }

        on_cleanup(move || {
            let released = slot.try_update_value(Option::take);
            drop(released);
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = on_event;
    }

    slot
}
