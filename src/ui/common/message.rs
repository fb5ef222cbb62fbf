//! Inline status banners

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error banner shown while `visible` is true
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    visible: Signal<bool>,
    message: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <p>{message}</p>
            </div>
        </Show>
    }
}

/// Success banner with a headline and a detail line
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    visible: Signal<bool>,
    title: &'static str,
    detail: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="success-message" role="status">
                <Icon name=icons::CHECK class="icon-text"/>
                <div>
                    <p class="success-title">{title}</p>
                    <p class="success-detail">{detail}</p>
                </div>
            </div>
        </Show>
    }
}
