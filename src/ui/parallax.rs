//! Scroll-scrubbed parallax layer

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::parallax::{DEFAULT_SPEED, ParallaxDirective};
use crate::core::viewport::ViewportEvent;
use crate::ui::viewport::bind_to_viewport;

/// Clip `children` and shift them vertically as the block passes through the viewport
#[component]
pub fn ParallaxSection(
    children: Children,
    #[prop(default = DEFAULT_SPEED)] speed: f64,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let directive = ParallaxDirective::new(speed);
    let style = RwSignal::new(directive.style(0.0, 0.0, 0.0));

    let node = NodeRef::<Div>::new();
    let _subscription = bind_to_viewport(node, move |element, event| {
        if let ViewportEvent::Scrolled {
            viewport_height, ..
        } = *event
        {
            let rect = element.get_bounding_client_rect();
            style.set(directive.style(rect.top(), rect.height(), viewport_height));
        }
    });

    view! {
        <div node_ref=node class=format!("relative overflow-hidden {}", class)>
            <div class="parallax-layer" style=move || style.get()>
                {children()}
            </div>
        </div>
    }
}
