//! Landing page
//!
//! Held behind the splash screen until the startup gate opens. Single
//! scrolling page made of:
//! - Hero with the split-text headline
//! - About with a parallax portrait
//! - Services accordion
//! - Gallery with category filter and lightbox
//! - Projects carousel and testimonials
//! - Journal teasers, contact form and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::carousel::CarouselState;
use crate::core::content::{
    ABOUT_STATS, GALLERY_FILTERS, POSTS, SERVICES, SITES, Service, ServiceAccordion, Testimonial,
    filter_gallery, testimonial_columns,
};
use crate::core::reveal::RevealDirection;
use crate::core::startup::StartupGate;
use crate::core::text_split::SplitGranularity;
use crate::ui::browser::scroll_to_section;
use crate::ui::common::{Button, ButtonVariant, IconButton};
use crate::ui::contact::Contact;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::icon::{Icon, icons};
use crate::ui::loading_screen::{LoadingScreen, use_startup_gate};
use crate::ui::parallax::ParallaxSection;
use crate::ui::scroll_reveal::ScrollReveal;
use crate::ui::text_split::TextSplit;

#[component]
pub fn LandingPage() -> impl IntoView {
    let gate = use_startup_gate();

    view! {
        <SeoMeta />
        <Show
            when=move || gate.with(StartupGate::is_ready)
            fallback=move || view! { <LoadingScreen gate=gate /> }
        >
            <Header />
            <main class="page-transition">
                <Hero />
                <About />
                <Services />
                <Gallery />
                <Sites />
                <Testimonials />
                <Journal />
                <Contact />
            </main>
            <Footer />
        </Show>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="johnnightsteel | Digital Architect" />
        <Meta name="description" content="Designing resilient digital identities for leaders and premium brands. Premium websites, interactive portfolios and SEO architecture." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="johnnightsteel | Digital Architect" />
        <Meta property="og:description" content="Strength unseen. Results felt. Premium digital experiences for leaders and brands." />
        <Meta property="og:image" content="/img/1.jpeg" />
        <Link rel="canonical" href="https://johnnightsteel.netlify.app/" />
    }
}

/// Rounded label above each section heading
#[component]
fn SectionPill(text: &'static str) -> impl IntoView {
    view! { <span class="pill">{text}</span> }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="section hero">
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="container-wide hero-grid">
                <div class="hero-copy">
                    <div class="pill pill-glass">"Digital Architect"</div>
                    <h1 class="hero-title">
                        <TextSplit
                            text="Strength unseen."
                            granularity=SplitGranularity::Words
                            delay=0.3
                            duration=1.2
                            stagger=0.08
                        />
                        <br />
                        <TextSplit
                            text="Results felt."
                            granularity=SplitGranularity::Words
                            delay=1.2
                            duration=1.2
                            stagger=0.08
                        />
                    </h1>
                    <p class="lead hero-lead">
                        "Designing resilient digital identities for leaders and premium brands."
                    </p>
                    <div class="hero-actions">
                        <Button
                            variant=ButtonVariant::Primary
                            on_click=Callback::new(|_| scroll_to_section("sites"))
                        >
                            "Explore Portfolio"
                            <span class="nudge-x">"→"</span>
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(|_| scroll_to_section("contact"))
                        >
                            "Start a Project"
                            <span class="nudge-y">"↓"</span>
                        </Button>
                    </div>
                </div>

                <ScrollReveal direction=RevealDirection::Right delay=0.4 class="hero-portrait">
                    <div class="metallic-frame portrait portrait-square">
                        <img
                            src="/img/1.jpeg"
                            alt="johnnightsteel - Digital Architect and Creative Director"
                            loading="eager"
                        />
                        <div class="portrait-vignette"></div>
                    </div>
                    <div class="portrait-badge">"JS"</div>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="section" itemscope="" itemtype="https://schema.org/Person">
            <div class="container-wide about-grid">
                <div class="about-copy">
                    <ScrollReveal delay=0.2>
                        <SectionPill text="About" />
                    </ScrollReveal>
                    <ScrollReveal delay=0.3>
                        <h2 class="text-display">
                            "I architect digital experiences that command attention and drive results."
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=0.4>
                        <p class="lead" itemprop="description">
                            "Based between global creative hubs, I specialize in building premium digital identities for leaders who refuse to blend in. Every project is an exercise in strategic precision and uncompromising craft."
                        </p>
                    </ScrollReveal>
                    <ScrollReveal delay=0.6>
                        <p class="body-copy">
                            "My work spans visionary startups, established enterprises, and cultural institutions, all united by a commitment to digital excellence that stands the test of time. I don't just build websites; I forge digital legacies."
                        </p>
                    </ScrollReveal>
                    <ScrollReveal delay=0.8>
                        <p class="motto">"Strength in simplicity. Power in precision."</p>
                    </ScrollReveal>
                    <ScrollReveal delay=1.0>
                        <div class="stats">
                            {ABOUT_STATS
                                .iter()
                                .map(|&(value, label)| view! {
                                    <div class="stat">
                                        <div class="stat-value">{value}</div>
                                        <div class="stat-label">{label}</div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </ScrollReveal>
                </div>

                <ScrollReveal direction=RevealDirection::Right delay=0.3 class="about-portrait">
                    <ParallaxSection speed=0.3>
                        <div class="metallic-frame portrait portrait-tall">
                            <img
                                src="/img/2.jpeg"
                                alt="johnnightsteel - Digital Architect working on premium brand identity"
                                itemprop="image"
                                loading="lazy"
                            />
                        </div>
                        <figure class="quote-card">
                            <blockquote>
                                "\"Excellence is not a destination, but a standard of execution.\""
                            </blockquote>
                            <figcaption>"Design Philosophy"</figcaption>
                        </figure>
                    </ParallaxSection>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    let accordion = RwSignal::new(ServiceAccordion::default());

    view! {
        <section id="services" class="section">
            <div class="container-wide">
                <div class="section-head text-center">
                    <ScrollReveal delay=0.2>
                        <SectionPill text="Services" />
                    </ScrollReveal>
                    <ScrollReveal delay=0.3>
                        <h2 class="text-display">"Precision-crafted solutions for ambitious brands"</h2>
                    </ScrollReveal>
                    <ScrollReveal delay=0.4>
                        <p class="lead">
                            "Every service is designed to elevate your digital presence and drive measurable results."
                        </p>
                    </ScrollReveal>
                </div>

                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! {
                            <ScrollReveal delay={0.2 * (index as f64 + 1.0)}>
                                <ServiceCard service=service accordion=accordion />
                            </ScrollReveal>
                        })
                        .collect_view()}
                </div>

                <ScrollReveal delay=0.6 class="section-foot text-center">
                    <h3 class="text-title">"Ready to elevate your digital presence?"</h3>
                    <p class="body-copy">
                        "Let's discuss how we can build something exceptional together."
                    </p>
                    <Button
                        on_click=Callback::new(|_| scroll_to_section("contact"))
                        icon=icons::ARROW_UP_RIGHT
                    >
                        "Start a Project"
                    </Button>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service, accordion: RwSignal<ServiceAccordion>) -> impl IntoView {
    let expanded = move || accordion.with(|a| a.is_expanded(service.id));

    view! {
        <article
            class="card-elevated service-card"
            class:service-card-expanded=expanded
            on:click=move |_| accordion.update(|a| a.toggle(service.id))
            aria-expanded=move || expanded().to_string()
        >
            <div class="service-head">
                <div class="service-icon">
                    <Icon name=service.icon class="w-7 h-7" />
                </div>
                <div>
                    <h3 class="text-title">{service.title}</h3>
                    <div class="service-meta">
                        <span>{service.timeline}</span>
                        <span class="dot" aria-hidden="true"></span>
                        <span class="service-price">{service.investment}</span>
                    </div>
                </div>
            </div>
            <p class="body-copy">{service.description}</p>

            <Show
                when=expanded
                fallback=|| view! {
                    <div class="service-more">
                        <span>"View Details"</span>
                        <Icon name=icons::CHEVRON_DOWN class="w-4 h-4" />
                    </div>
                }
            >
                <div class="service-details">
                    <h4>"What's Included"</h4>
                    <ul class="feature-list">
                        {service
                            .features
                            .iter()
                            .map(|feature| view! { <li>{*feature}</li> })
                            .collect_view()}
                    </ul>
                    <button
                        class="btn-base btn-primary w-full"
                        on:click=|ev| {
                            ev.stop_propagation();
                            scroll_to_section("contact");
                        }
                    >
                        "Start This Project"
                        <Icon name=icons::ARROW_UP_RIGHT class="w-4 h-4" />
                    </button>
                </div>
            </Show>
        </article>
    }
}

#[component]
fn Gallery() -> impl IntoView {
    let filter = RwSignal::new(GALLERY_FILTERS[0]);
    let lightbox: RwSignal<Option<&'static str>> = RwSignal::new(None);

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && lightbox.with_untracked(Option::is_some) {
                lightbox.set(None);
            }
        });
        on_cleanup(move || drop(handle));
    }

    view! {
        <section id="gallery" class="section section-muted">
            <div class="container-wide">
                <div class="section-head text-center">
                    <h2 class="text-display">"Visual Chronicles"</h2>
                    <div class="filter-bar" role="tablist">
                        {GALLERY_FILTERS
                            .iter()
                            .map(|&name| view! {
                                <button
                                    class="filter-tab"
                                    class:filter-tab-active=move || filter.get() == name
                                    role="tab"
                                    aria-selected=move || (filter.get() == name).to_string()
                                    on:click=move |_| filter.set(name)
                                >
                                    {name}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="gallery-grid">
                    {move || {
                        filter_gallery(filter.get())
                            .into_iter()
                            .enumerate()
                            .map(|(index, image)| {
                                let label = format!("View {} gallery image {}", image.category, index + 1);
                                view! {
                                    <button
                                        class="gallery-item"
                                        on:click=move |_| lightbox.set(Some(image.src))
                                        aria-label=label
                                    >
                                        <img
                                            src=image.src
                                            alt=format!("{} - Gallery image {}", image.category, index + 1)
                                            loading="lazy"
                                        />
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || lightbox.get().map(|src| view! {
                <div
                    class="lightbox"
                    role="dialog"
                    aria-modal="true"
                    aria-label="Image lightbox"
                    on:click=move |_| lightbox.set(None)
                >
                    <img src=src alt="Enlarged gallery image" />
                    <button class="lightbox-close" aria-label="Close lightbox">"×"</button>
                </div>
            })}
        </section>
    }
}

#[component]
fn Sites() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(SITES.len()));
    let slide_style =
        move || format!("transform: translateX({}%);", carousel.with(CarouselState::track_offset_percent));

    view! {
        <section id="sites" class="section" aria-labelledby="sites-heading">
            <div class="container-wide carousel-head">
                <h2 id="sites-heading" class="text-display">"Our Projects"</h2>
                <div class="carousel-controls">
                    <IconButton
                        icon=icons::ARROW_LEFT
                        label="Previous project"
                        on_click=Callback::new(move |_| carousel.update(CarouselState::prev))
                        disabled=Signal::derive(move || !carousel.with(CarouselState::can_prev))
                    />
                    <IconButton
                        icon=icons::ARROW_RIGHT
                        label="Next project"
                        on_click=Callback::new(move |_| carousel.update(CarouselState::next))
                        disabled=Signal::derive(move || !carousel.with(CarouselState::can_next))
                    />
                </div>
            </div>

            <div class="container-wide carousel-viewport">
                <div class="carousel-track">
                    {SITES
                        .iter()
                        .map(|site| view! {
                            <a href=site.href class="carousel-slide" style=slide_style target="_blank" rel="noopener noreferrer">
                                <div class="slide-card">
                                    <img src=site.image alt=site.title loading="lazy" />
                                    <div class="slide-shade"></div>
                                    <div class="slide-caption">
                                        <h3>{site.title}</h3>
                                        <p>{site.description}</p>
                                    </div>
                                </div>
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="carousel-dots">
                {(0..SITES.len())
                    .map(|index| view! {
                        <button
                            class="carousel-dot"
                            class:carousel-dot-active=move || carousel.with(|c| c.current() == index)
                            on:click=move |_| carousel.update(|c| c.scroll_to(index))
                            aria-label=format!("Go to slide {}", index + 1)
                        ></button>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="section" aria-labelledby="works-heading">
            <div class="container-wide">
                <header class="section-head text-center">
                    <ScrollReveal delay=0.1>
                        <SectionPill text="Selected Works" />
                    </ScrollReveal>
                    <ScrollReveal delay=0.2>
                        <h2 id="works-heading" class="text-display">
                            "Crafted with intention."<br />"Built for long-term impact."
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=0.3>
                        <p class="lead">
                            "Each project represents a strategic partnership focused on digital excellence and measurable results."
                        </p>
                    </ScrollReveal>
                </header>

                <div class="testimonial-columns">
                    {testimonial_columns()
                        .into_iter()
                        .enumerate()
                        .map(|(index, (items, seconds))| view! {
                            <TestimonialColumn items=items seconds=seconds column=index />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One auto-scrolling column; the list is rendered twice so the loop is seamless
#[component]
fn TestimonialColumn(items: &'static [Testimonial], seconds: u32, column: usize) -> impl IntoView {
    let class = match column {
        0 => "testimonial-column",
        1 => "testimonial-column hide-below-md",
        _ => "testimonial-column hide-below-lg",
    };

    view! {
        <div class=class>
            <div class="testimonial-track" style=format!("animation-duration: {}s;", seconds)>
                {(0..2)
                    .map(|pass| {
                        items
                            .iter()
                            .map(move |t| view! {
                                <figure class="card-elevated testimonial" aria-hidden={(pass > 0).to_string()}>
                                    <blockquote>{t.text}</blockquote>
                                    <figcaption class="testimonial-author">
                                        <img src=t.image alt=t.name width="40" height="40" loading="lazy" />
                                        <div>
                                            <p class="testimonial-name">{t.name}</p>
                                            <p class="testimonial-role">{t.role}</p>
                                        </div>
                                    </figcaption>
                                </figure>
                            })
                            .collect_view()
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Journal() -> impl IntoView {
    view! {
        <section id="journal" class="section section-muted">
            <div class="container-mid">
                <div class="section-head text-center">
                    <ScrollReveal delay=0.2>
                        <h2 class="text-display">"Journal"</h2>
                    </ScrollReveal>
                    <ScrollReveal delay=0.4>
                        <p class="lead">
                            "Thoughts on design, culture, and the future of digital experiences."
                        </p>
                    </ScrollReveal>
                </div>

                <div class="journal-grid">
                    {POSTS
                        .iter()
                        .enumerate()
                        .map(|(index, post)| view! {
                            <ScrollReveal delay={0.2 * (index as f64 + 1.0)}>
                                <A href=post.href() attr:class="card-elevated journal-card">
                                    <div class="journal-meta">
                                        <span>{post.date}</span>
                                        <span aria-hidden="true">"•"</span>
                                        <span>{post.read_time}</span>
                                    </div>
                                    <h3 class="journal-title">{post.title}</h3>
                                    <p class="body-copy">{post.preview}</p>
                                    <span class="read-more">
                                        "Read more"
                                        <Icon name=icons::ARROW_RIGHT class="w-3 h-3" />
                                    </span>
                                </A>
                            </ScrollReveal>
                        })
                        .collect_view()}
                </div>

                <ScrollReveal delay=0.8 class="newsletter-card">
                    <h3 class="text-title">"Never Miss an Insight"</h3>
                    <p class="body-copy">
                        "Get fresh perspectives on design and digital innovation delivered to your inbox."
                    </p>
                    <form class="newsletter" on:submit=|ev| {
                        ev.prevent_default();
                        leptos::logging::log!("Newsletter subscription");
                    }>
                        <input type="email" class="input-base" placeholder="your@email.com" required />
                        <button type="submit" class="btn-base btn-primary btn-sm">"Subscribe"</button>
                    </form>
                    <p class="form-note">"No spam. Unsubscribe anytime."</p>
                </ScrollReveal>
            </div>
        </section>
    }
}
