//! Fallback page for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::browser::current_year;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found | johnnightsteel" />
        <div class="centered-screen page-transition">
            <div class="text-center">
                <p class="not-found-code">"404"</p>
                <h1 class="text-title">"Page Not Found"</h1>
                <p class="body-copy">"The page you're looking for doesn't exist or has been moved."</p>

                <div class="button-row">
                    <A href="/" attr:class="btn-base btn-primary">
                        <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                        "Back to Home"
                    </A>
                    <A href="/partnership" attr:class="btn-base btn-secondary">
                        "Agency Partnership"
                    </A>
                </div>
            </div>

            <p class="not-found-footer">
                {format!("© {} johnnightsteel", current_year())}
            </p>
        </div>
    }
}
