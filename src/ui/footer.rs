use leptos::prelude::*;

use crate::ui::browser::{current_year, scroll_to_section};
use crate::ui::icon::{Icon, icons};

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", icons::FACEBOOK),
    ("Twitter", icons::TWITTER),
    ("Instagram", icons::INSTAGRAM),
    ("LinkedIn", icons::LINKEDIN),
];

/// Footer service links as (label, section id)
const SERVICE_LINKS: [(&str, &str); 4] = [
    ("Premium Websites", "services"),
    ("Interactive Portfolios", "services"),
    ("SEO & Growth Architecture", "services"),
    ("Strategy Consultation", "contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="container-wide footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-mark">"JS"</span>
                        <div>
                            <p class="brand-name">"johnnightsteel"</p>
                            <p class="eyebrow">"Digital Architect"</p>
                        </div>
                    </div>
                    <p class="footer-blurb">
                        "Crafting premium digital experiences for leaders and brands that refuse to blend in."
                    </p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|&(label, icon)| view! {
                                <button type="button" class="social-button">
                                    <Icon name=icon class="w-4 h-4"/>
                                    <span class="sr-only">{label}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                    <form class="newsletter" on:submit=|ev| ev.prevent_default()>
                        <input
                            type="email"
                            class="input-base"
                            placeholder="Enter your email"
                            aria-label="Email address"
                        />
                        <button type="submit" class="btn-base btn-primary btn-sm">"Subscribe"</button>
                    </form>
                </div>

                <div>
                    <h3 class="footer-heading">"Services"</h3>
                    <ul class="footer-links">
                        {SERVICE_LINKS
                            .iter()
                            .map(|&(label, id)| view! {
                                <li>
                                    <button class="footer-link" on:click=move |_| scroll_to_section(id)>
                                        {label}
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="footer-heading">"Let's Connect"</h3>
                    <p class="footer-blurb">
                        "Ready to build something exceptional? Let's discuss your vision."
                    </p>
                    <button class="footer-cta" on:click=|_| scroll_to_section("contact")>
                        "Start a Project"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4"/>
                    </button>
                </div>
            </div>

            <div class="container-wide footer-bottom">
                <p>{format!("© {} johnnightsteel. All rights reserved.", year)}</p>
                <p class="footer-tagline">
                    <span>"Crafted with precision"</span>
                    <span aria-hidden="true">"•"</span>
                    <span>"Built for impact"</span>
                </p>
            </div>
        </footer>
    }
}
