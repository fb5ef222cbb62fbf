//! Staggered per-unit text entrance

use leptos::prelude::*;

use crate::core::text_split::{
    DEFAULT_DURATION_SECONDS, DEFAULT_STAGGER_SECONDS, SplitGranularity, SplitTiming, split_text,
};

/// Split `text` into units and play them in on mount
#[component]
pub fn TextSplit(
    #[prop(into)] text: String,
    #[prop(default = SplitGranularity::Chars)] granularity: SplitGranularity,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = DEFAULT_DURATION_SECONDS)] duration: f64,
    #[prop(default = DEFAULT_STAGGER_SECONDS)] stagger: f64,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let units = split_text(&text, granularity, SplitTiming::new(delay, duration, stagger));
    let last = units.len().saturating_sub(1);
    let revealed = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        // Let the hidden pose paint before switching to the revealed one
        Effect::new(move |_| {
            request_animation_frame(move || revealed.set(true));
        });
    }

    view! {
        <div class=class aria-label=text.clone()>
            {units
                .into_iter()
                .map(|unit| {
                    let line_break = granularity == SplitGranularity::Lines && unit.index < last;
                    let label = if unit.text == " " { "\u{a0}".to_string() } else { unit.text.clone() };
                    view! {
                        <span aria-hidden="true" style=move || unit.style(revealed.get())>
                            {label}
                        </span>
                        {line_break.then(|| view! { <br/> })}
                    }
                })
                .collect_view()}
        </div>
    }
}
