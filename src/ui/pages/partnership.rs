//! Agency partnership page at `/partnership`

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::error::LeadError;
use crate::core::handoff::HandoffSettings;
use crate::core::partnership::{
    BENEFITS, CHART_MAX_PROJECTS, HEADLINE_ROTATION, MAX_PROJECTS, MIN_PROJECTS, PROCESS_STEPS,
    ProfitSimulator, SCENARIO_PRICES, Typewriter, format_brl, scenario_profit, show_sticky_cta,
};
use crate::core::pipeline::PartnershipHandoff;
use crate::core::schedule::{Scheduler, SystemClock};
use crate::core::viewport::ViewportEvent;
use crate::ui::browser::{BrowserScheduler, BrowserTask, WindowOpener, scroll_to_top};
use crate::ui::header::Header;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll_reveal::ScrollReveal;
use crate::ui::viewport::subscribe_viewport;

type BrowserHandoff = PartnershipHandoff<BrowserScheduler, WindowOpener, SystemClock>;
type TaskSlot = StoredValue<Option<BrowserTask>, LocalStorage>;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;

fn schedule_typing(writer: RwSignal<Typewriter>, slot: TaskSlot, delay: Duration) {
    let task = BrowserScheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(next) = writer.try_update(Typewriter::step) {
                schedule_typing(writer, slot, next);
            }
        }),
    );
    slot.try_update_value(|pending| *pending = Some(task));
}

#[component]
pub fn PartnershipPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let sticky = RwSignal::new(false);
    let simulator = RwSignal::new(ProfitSimulator::default());

    let handoff: StoredValue<BrowserHandoff, LocalStorage> =
        StoredValue::new_local(PartnershipHandoff::new(
            BrowserScheduler,
            WindowOpener,
            SystemClock,
            HandoffSettings::default(),
            move |is_busy| {
                busy.try_set(is_busy);
            },
        ));
    let contact = Callback::new(move |_| {
        match handoff.try_with_value(PartnershipHandoff::request) {
            Some(Err(LeadError::AlreadySubmitting)) | Some(Ok(())) | None => {}
            Some(Err(err)) => leptos::logging::error!("Partnership handoff failed: {}", err),
        }
    });

    let _subscription = subscribe_viewport(move |event| {
        if let ViewportEvent::Scrolled { scroll_y, .. } = *event {
            let show = show_sticky_cta(scroll_y);
            if sticky.get_untracked() != show {
                sticky.set(show);
            }
        }
    });

    Effect::new(move |_| scroll_to_top());

    view! {
        <Title text="Parceria para Agências | johnnightsteel" />
        <Meta name="description" content="Landings em até 48h para os clientes da sua agência. Você fecha, eu entrego." />

        <Header />
        <main class="page-transition partnership">
            <PartnershipHero busy=busy contact=contact />
            <ProcessSection />
            <BenefitsSection />
            <SimulatorSection simulator=simulator contact=contact />
            <FinalCta busy=busy contact=contact />
        </main>

        <Show when=move || sticky.get()>
            <div class="sticky-cta">
                <div class="sticky-cta-card">
                    <span>"Pronto para um piloto esta semana?"</span>
                    <button class="btn-base btn-primary btn-sm" on:click=move |_| contact.run(())>
                        "Falar no WhatsApp"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Call-to-action label that switches while the chat is being opened
fn busy_label(
    busy: RwSignal<bool>,
    idle: &'static str,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || if busy.get() { "Abrindo conversa..." } else { idle }
}

#[component]
fn PartnershipHero(busy: RwSignal<bool>, contact: Callback<()>) -> impl IntoView {
    let writer = RwSignal::new(Typewriter::new(&HEADLINE_ROTATION));
    let typing: TaskSlot = StoredValue::new_local(None);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| schedule_typing(writer, typing, Duration::ZERO));
    #[cfg(feature = "ssr")]
    let _ = (typing, schedule_typing);

    view! {
        <section class="section partnership-hero">
            <div class="container-wide text-center">
                <ScrollReveal delay=0.1>
                    <span class="pill">
                        <Icon name=icons::USERS class="w-4 h-4" />
                        "Parceria para Agências"
                    </span>
                </ScrollReveal>
                <h1 class="partnership-title">
                    <span class="typewriter">{move || writer.with(Typewriter::text)}</span>
                    <br />
                    <span class="accent">"para seus clientes"</span>
                </h1>
                <ScrollReveal delay=0.2>
                    <p class="lead">
                        "Você fecha clientes, eu entrego. Mais velocidade, mais lucro e zero peso operacional para sua agência."
                    </p>
                </ScrollReveal>
                <ScrollReveal delay=0.35>
                    <div class="chip-row">
                        <span class="chip"><Icon name=icons::SPARKLES class="w-4 h-4" />"100+ LPs entregues em 2025"</span>
                        <span class="chip"><Icon name=icons::CLOCK class="w-4 h-4" />"Tempo médio: 42h"</span>
                    </div>
                </ScrollReveal>
                <ScrollReveal delay=0.45>
                    <button
                        class="btn-base btn-primary btn-lg btn-pill"
                        on:click=move |_| contact.run(())
                        disabled=move || busy.get()
                    >
                        {busy_label(busy, "Reservar um slot")}
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[component]
fn ProcessSection() -> impl IntoView {
    view! {
        <section class="section section-muted">
            <div class="container-wide">
                <div class="section-head text-center">
                    <h2 class="text-display">"Como funciona na prática?"</h2>
                    <p class="lead">"3 passos para você vender mais sem travar operação."</p>
                </div>
                <div class="process-grid">
                    {PROCESS_STEPS[..3]
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! {
                            <ScrollReveal delay={index as f64 * 0.15} class="card-glass process-step">
                                <div class="step-number">{step.number}</div>
                                <h4>{step.title}</h4>
                                <p class="body-copy">{step.description}</p>
                            </ScrollReveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container-wide">
                <div class="section-head text-center">
                    <h2 class="text-display">"Por que sua agência vai escalar mais?"</h2>
                    <p class="lead">
                        "Mais lucro, mais velocidade, menos dor de cabeça. Você cuida do cliente; eu cuido da entrega."
                    </p>
                </div>
                <div class="benefit-grid">
                    {BENEFITS
                        .iter()
                        .enumerate()
                        .map(|(index, benefit)| view! {
                            <ScrollReveal delay={index as f64 * 0.12} class="card-glass benefit">
                                <div class="service-icon">
                                    <Icon name=benefit.icon class="w-6 h-6" />
                                </div>
                                <div>
                                    <div class="benefit-head">
                                        <h3>{benefit.title}</h3>
                                        <span class="badge-success">{benefit.highlight}</span>
                                    </div>
                                    <p class="body-copy">{benefit.description}</p>
                                    <p class="benefit-included">
                                        <Icon name=icons::CHECK_CIRCLE class="w-4 h-4" />
                                        "Incluído na parceria"
                                    </p>
                                </div>
                            </ScrollReveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SimulatorSection(simulator: RwSignal<ProfitSimulator>, contact: Callback<()>) -> impl IntoView {
    let stat = move |f: fn(&ProfitSimulator) -> String| move || simulator.with(f);

    view! {
        <section class="section">
            <div class="container-mid">
                <div class="simulator-grid">
                    <ScrollReveal class="card-glass simulator-panel">
                        <div class="panel-head">
                            <Icon name=icons::BAR_CHART />
                            <h3 class="text-title">"Simule seu lucro"</h3>
                        </div>

                        <label class="label" for="sim-price">"Quanto você cobra por landing page?"</label>
                        <div class="input-prefixed">
                            <span>"R$"</span>
                            <input
                                id="sim-price"
                                type="number"
                                min="0"
                                class="input-base"
                                prop:value=move || simulator.with(|s| s.price.to_string())
                                on:input=move |ev| {
                                    let raw = event_target_value(&ev);
                                    simulator.update(|s| s.set_price_input(&raw));
                                }
                            />
                        </div>
                        <div class="chip-row">
                            {SCENARIO_PRICES
                                .iter()
                                .map(|&price| view! {
                                    <button
                                        class="chip chip-button"
                                        class:chip-active=move || simulator.with(|s| s.price == price)
                                        on:click=move |_| simulator.update(|s| s.set_price(price))
                                    >
                                        {format_brl(u64::from(price))}
                                    </button>
                                })
                                .collect_view()}
                        </div>

                        <label class="label" for="sim-projects">"Projetos por mês"</label>
                        <input
                            id="sim-projects"
                            type="range"
                            min=MIN_PROJECTS.to_string()
                            max=MAX_PROJECTS.to_string()
                            class="w-full"
                            prop:value=move || simulator.with(|s| s.projects_per_month.to_string())
                            on:input=move |ev| {
                                if let Ok(projects) = event_target_value(&ev).parse::<u32>() {
                                    simulator.update(|s| s.set_projects(projects));
                                }
                            }
                        />
                        <p class="form-note">
                            {move || format!("{} projeto(s)/mês", simulator.with(|s| s.projects_per_month))}
                        </p>

                        <div class="maintenance-row">
                            <label class="label checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || simulator.with(|s| s.include_maintenance)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        simulator.update(|s| s.include_maintenance = checked);
                                    }
                                />
                                "Incluir manutenção mensal"
                            </label>
                            <div class="input-prefixed input-small">
                                <span>"R$"</span>
                                <input
                                    type="number"
                                    min="0"
                                    class="input-base"
                                    prop:value=move || simulator.with(|s| s.maintenance_fee.to_string())
                                    disabled=move || simulator.with(|s| !s.include_maintenance)
                                    on:input=move |ev| {
                                        let raw = event_target_value(&ev);
                                        simulator.update(|s| s.set_maintenance_fee_input(&raw));
                                    }
                                />
                                <span>"/site"</span>
                            </div>
                        </div>

                        <div class="summary-grid">
                            <div class="summary-tile">
                                <p class="summary-label">"Lucro por projeto"</p>
                                <p class="summary-value">
                                    {stat(|s| format_brl(u64::from(s.profit_per_project())))}
                                </p>
                            </div>
                            <div class="summary-tile">
                                <p class="summary-label">"Lucro mensal"</p>
                                <p class="summary-value">{stat(|s| format_brl(s.monthly_profit()))}</p>
                            </div>
                            <div class="summary-tile">
                                <p class="summary-label">"Multiplicador"</p>
                                <p class="summary-value">{stat(ProfitSimulator::multiplier_label)}</p>
                            </div>
                        </div>

                        <button class="btn-base btn-primary" on:click=move |_| contact.run(())>
                            "Falar sobre parceria"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                        </button>
                    </ScrollReveal>

                    <ScrollReveal delay=0.1 class="card-glass simulator-panel">
                        <div class="panel-head">
                            <Icon name=icons::LINE_CHART />
                            <h3 class="text-title">"Crescimento do lucro por mês"</h3>
                        </div>
                        <p class="form-note">
                            "Simulação de 1 a 12 projetos mensais com os parâmetros atuais."
                        </p>
                        <ProfitChart simulator=simulator />
                        <p class="form-note">{stat(ProfitSimulator::summary)}</p>
                    </ScrollReveal>
                </div>

                <div class="scenario-grid">
                    {SCENARIO_PRICES
                        .iter()
                        .map(|&price| view! {
                            <button class="card-glass scenario" on:click=move |_| simulator.update(|s| s.set_price(price))>
                                <span class="summary-label">"Se cobrar"</span>
                                <span class="summary-value">{format_brl(u64::from(price))}</span>
                                <span class="summary-label">"Lucro por projeto"</span>
                                <span class="scenario-profit">{format_brl(u64::from(scenario_profit(price)))}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Monthly profit for 1..=12 projects as an SVG line chart
#[component]
fn ProfitChart(simulator: RwSignal<ProfitSimulator>) -> impl IntoView {
    let points = move || simulator.with(|s| s.chart_polyline(CHART_WIDTH, CHART_HEIGHT));
    let peak = move || simulator.with(|s| format_brl(s.monthly_profit_for(CHART_MAX_PROJECTS)));

    view! {
        <figure class="chart">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="none"
                role="img"
                aria-label="Lucro mensal por quantidade de projetos"
            >
                {(0..=4)
                    .map(|row| {
                        let y = (CHART_HEIGHT * f64::from(row) / 4.0).to_string();
                        view! {
                            <line class="chart-grid" x1="0" x2=CHART_WIDTH.to_string() y1=y.clone() y2=y />
                        }
                    })
                    .collect_view()}
                <polyline class="chart-line" fill="none" points=points />
            </svg>
            <figcaption class="chart-axis">
                {(1..=CHART_MAX_PROJECTS)
                    .map(|qty| view! { <span>{qty}</span> })
                    .collect_view()}
            </figcaption>
            <p class="chart-peak">{move || format!("{} projetos: {}", CHART_MAX_PROJECTS, peak())}</p>
        </figure>
    }
}

#[component]
fn FinalCta(busy: RwSignal<bool>, contact: Callback<()>) -> impl IntoView {
    view! {
        <section class="section section-dark">
            <div class="container-narrow text-center">
                <ScrollReveal>
                    <h2 class="text-display">
                        "Quer testar com um "<span class="accent-light">"projeto piloto?"</span>
                    </h2>
                </ScrollReveal>
                <ScrollReveal delay=0.15>
                    <p class="lead">
                        "Envie o briefing de um cliente, receba a landing em até 48h e revenda com sua marca."
                    </p>
                </ScrollReveal>
                <ScrollReveal delay=0.25>
                    <button
                        class="btn-base btn-primary btn-lg btn-pill"
                        on:click=move |_| contact.run(())
                        disabled=move || busy.get()
                    >
                        {busy_label(busy, "Reservar meu slot")}
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                </ScrollReveal>
                <p class="cta-note">"📱 Conversa direta via WhatsApp • Resposta em até 2h"</p>
                <p class="cta-fineprint">"Garantia: se atrasar, 20% de desconto imediato."</p>
            </div>
        </section>
    }
}
