//! Fixed site header with the section menu and the mobile drawer

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::navigation::{
    HOME_SCROLL_DELAY, HeaderState, MENU_SECTIONS, SectionJump, section_jump,
};
use crate::core::viewport::ViewportEvent;
use crate::ui::browser::{after, scroll_to_section, set_scroll_locked};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::viewport::subscribe_viewport;

/// Landing-section link handler usable from any page
///
/// Off the landing page it navigates home first and scrolls once the sections
/// have rendered.
pub fn use_section_jump() -> impl Fn(&str) + Copy + Send + Sync + 'static {
    let pathname = use_location().pathname;
    let navigate = StoredValue::new_local(use_navigate());

    move |section: &str| match section_jump(&pathname.get_untracked(), section) {
        SectionJump::ScrollInPlace(id) => scroll_to_section(&id),
        SectionJump::NavigateHomeThenScroll(id) => {
            navigate.with_value(|navigate| navigate("/", Default::default()));
            after(HOME_SCROLL_DELAY, move || scroll_to_section(&id));
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());
    let navigate = StoredValue::new_local(use_navigate());

    let _subscription = subscribe_viewport(move |event| match *event {
        ViewportEvent::Scrolled { scroll_y, .. } => {
            header.try_update(|h| h.on_scroll(scroll_y));
        }
        ViewportEvent::Resized { viewport_width, .. } => {
            header.try_update(|h| h.on_resize(viewport_width));
        }
    });

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| set_scroll_locked(header.with(|h| h.mobile_menu_open)));
    on_cleanup(|| set_scroll_locked(false));

    let jump_to = use_section_jump();
    let jump = move |section: &str| {
        header.update(HeaderState::close_mobile_menu);
        jump_to(section);
    };
    let open_partnership = move || {
        header.update(HeaderState::close_mobile_menu);
        navigate.with_value(|navigate| navigate("/partnership", Default::default()));
    };

    let scrolled = move || header.with(|h| h.scrolled);
    let menu_open = move || header.with(|h| h.mobile_menu_open);

    let menu_items = move |class: &'static str| {
        MENU_SECTIONS
            .iter()
            .map(|&(label, id)| {
                view! {
                    <button
                        class=class
                        on:click=move |_| jump(id)
                        aria-label=format!("Go to {} section", label)
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header" class:site-header-solid=scrolled>
            <div class="container-wide header-bar">
                <button class="brand" on:click=move |_| jump("hero") aria-label="Go to top">
                    <span class="brand-mark">"JS"</span>
                    <span class="brand-name">"johnnightsteel"</span>
                </button>

                <nav class="header-nav" aria-label="Main navigation">
                    {menu_items("nav-link")}
                    <button class="nav-link" on:click=move |_| open_partnership()>
                        "Parcerias"
                    </button>
                </nav>

                <div class="header-cta" class:header-cta-dim=move || !scrolled()>
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Small
                        on_click=Callback::new(move |_| jump("contact"))
                    >
                        "Start a Project"
                    </Button>
                </div>

                <button
                    class="menu-toggle"
                    on:click=move |_| header.update(HeaderState::toggle_mobile_menu)
                    aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || menu_open().to_string()
                    aria-controls="mobile-menu"
                >
                    <Show when=menu_open fallback=|| view! { <Icon name=icons::MENU/> }>
                        <Icon name=icons::X/>
                    </Show>
                </button>
            </div>
        </header>

        <Show when=menu_open>
            <div
                class="drawer-overlay"
                on:click=move |_| header.update(HeaderState::close_mobile_menu)
                aria-hidden="true"
            ></div>
        </Show>

        <div
            id="mobile-menu"
            class="drawer"
            class:drawer-open=menu_open
            role="dialog"
            aria-modal="true"
            aria-label="Mobile navigation menu"
        >
            <div class="drawer-head">
                <div class="brand">
                    <span class="brand-mark">"JS"</span>
                    <span class="brand-name">"johnnightsteel"</span>
                </div>
                <button
                    class="drawer-close"
                    on:click=move |_| header.update(HeaderState::close_mobile_menu)
                    aria-label="Close menu"
                >
                    <Icon name=icons::X/>
                </button>
            </div>
            <nav class="drawer-nav">
                {menu_items("drawer-link")}
                <button class="drawer-link" on:click=move |_| open_partnership()>
                    "Parcerias"
                </button>
            </nav>
            <div class="drawer-foot">
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| jump("contact"))
                    class="w-full"
                >
                    "Start a Project"
                </Button>
                <p class="eyebrow">"Digital Architect"</p>
            </div>
        </div>
    }
}
