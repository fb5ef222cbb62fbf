//! Contact section: lead form with WhatsApp handoff

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::catalog::Catalog;
use crate::core::dropdown::{LeadDropdowns, select_option};
use crate::core::error::LeadError;
use crate::core::handoff::HandoffSettings;
use crate::core::lead::{LeadCapture, LeadField, SubmitStatus};
use crate::core::pipeline::{LeadPipeline, LeadStore};
use crate::core::schedule::SystemClock;
use crate::ui::browser::{BrowserScheduler, WindowOpener};
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, ErrorMessage, FormField, SelectDropdown, SuccessMessage,
    TextAreaField,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll_reveal::ScrollReveal;

impl LeadStore for RwSignal<LeadCapture> {
    fn with_capture<R>(&self, f: impl FnOnce(&mut LeadCapture) -> R) -> Option<R> {
        self.try_update(f)
    }
}

type BrowserLeadPipeline = LeadPipeline<BrowserScheduler, RwSignal<LeadCapture>, WindowOpener, SystemClock>;

#[component]
pub fn Contact() -> impl IntoView {
    let capture = RwSignal::new(LeadCapture::new());
    let dropdowns = RwSignal::new(LeadDropdowns::default());
    let pipeline: StoredValue<BrowserLeadPipeline, LocalStorage> =
        StoredValue::new_local(LeadPipeline::new(
            BrowserScheduler,
            capture,
            WindowOpener,
            SystemClock,
            HandoffSettings::default(),
        ));
    on_cleanup(move || {
        pipeline.try_with_value(LeadPipeline::cancel);
    });

    let project_ref = NodeRef::<Div>::new();
    let budget_ref = NodeRef::<Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{keydown, pointerdown};
        use leptos::web_sys::Node;
        use wasm_bindgen::JsCast;

        let pointer_handle = window_event_listener(pointerdown, move |ev| {
            let any_open = dropdowns
                .with_untracked(|d| d.project_type.is_open() || d.budget_range.is_open());
            if !any_open {
                return;
            }
            let target = ev.target().and_then(|target| target.dyn_into::<Node>().ok());
            let inside = |container: NodeRef<Div>| match (container.get_untracked(), &target) {
                (Some(element), Some(target)) => element.contains(Some(target)),
                _ => false,
            };
            let (in_project, in_budget) = (inside(project_ref), inside(budget_ref));
            dropdowns.update(|d| {
                d.project_type.pointer_down(in_project);
                d.budget_range.pointer_down(in_budget);
            });
        });
        let key_handle = window_event_listener(keydown, move |ev| {
            let key = ev.key();
            if key == "Escape" {
                dropdowns.update(|d| d.key_down(&key));
            }
        });
        on_cleanup(move || {
            drop(pointer_handle);
            drop(key_handle);
        });
    }

    let status = move || capture.with(|c| c.status);
    let submitting = Signal::derive(move || capture.with(LeadCapture::is_submitting));

    let value_of =
        move |field: LeadField| Signal::derive(move || capture.with(|c| c.form.get(field).to_string()));
    let invalid = move |field: LeadField| Signal::derive(move || capture.with(|c| c.highlight_field(field)));
    let edit = move |field: LeadField| {
        Callback::new(move |value: String| capture.update(|c| c.update_field(field, value)))
    };
    let open_of = move |field: LeadField| {
        Signal::derive(move || dropdowns.with(|d| d.get(field).is_some_and(|s| s.is_open())))
    };
    let toggle = move |field: LeadField| {
        Callback::new(move |_| {
            dropdowns.update(|d| {
                if let Some(state) = d.get_mut(field) {
                    state.toggle();
                }
            })
        })
    };
    let choose = move |field: LeadField| {
        Callback::new(move |code: &'static str| {
            let mut current = dropdowns.get_untracked();
            capture.update(|c| select_option(c, &mut current, field, code));
            dropdowns.set(current);
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = pipeline.try_with_value(LeadPipeline::submit);
        match outcome {
            Some(Err(LeadError::IncompleteFields)) => {
                leptos::logging::log!("Contact form submitted with missing fields");
            }
            Some(Err(err)) => leptos::logging::warn!("Contact submit ignored: {}", err),
            Some(Ok(())) | None => {}
        }
    };

    view! {
        <section id="contact" class="section section-contact" aria-labelledby="contact-heading">
            <div class="container-narrow">
                <div class="section-head text-center">
                    <ScrollReveal delay=0.2>
                        <span class="pill">"Contact"</span>
                    </ScrollReveal>
                    <ScrollReveal delay=0.3>
                        <h2 id="contact-heading" class="text-display">
                            "Let's build something exceptional."
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=0.4>
                        <p class="lead">
                            "Ready to elevate your digital presence? Share your vision and let's discuss how we can bring it to life."
                        </p>
                    </ScrollReveal>
                </div>

                <ScrollReveal delay=0.5>
                    <form class="card-elevated contact-form" on:submit=on_submit novalidate>
                        <SuccessMessage
                            visible=Signal::derive(move || status() == SubmitStatus::Success)
                            title="Message sent successfully!"
                            detail="WhatsApp opened with your message. I'll respond within 24 hours."
                        />
                        <ErrorMessage
                            visible=Signal::derive(move || status() == SubmitStatus::Error)
                            message="Please fill in all required fields."
                        />

                        <div class="form-grid">
                            <FormField
                                id="name"
                                label="Your Name"
                                required=true
                                value=value_of(LeadField::Name)
                                on_input=edit(LeadField::Name)
                                disabled=submitting
                                invalid=invalid(LeadField::Name)
                            />
                            <FormField
                                id="email"
                                label="Email Address"
                                required=true
                                input_type="email"
                                value=value_of(LeadField::Email)
                                on_input=edit(LeadField::Email)
                                disabled=submitting
                                invalid=invalid(LeadField::Email)
                            />
                        </div>

                        <SelectDropdown
                            id="project"
                            label="Project Type"
                            placeholder="Select project type"
                            entries=Catalog::ProjectType.entries()
                            selected=value_of(LeadField::ProjectType)
                            open=open_of(LeadField::ProjectType)
                            on_toggle=toggle(LeadField::ProjectType)
                            on_select=choose(LeadField::ProjectType)
                            disabled=submitting
                            invalid=invalid(LeadField::ProjectType)
                            container=project_ref
                        />
                        <SelectDropdown
                            id="budget"
                            label="Available Budget"
                            placeholder="Select your budget"
                            entries=Catalog::BudgetRange.entries()
                            selected=value_of(LeadField::BudgetRange)
                            open=open_of(LeadField::BudgetRange)
                            on_toggle=toggle(LeadField::BudgetRange)
                            on_select=choose(LeadField::BudgetRange)
                            disabled=submitting
                            invalid=invalid(LeadField::BudgetRange)
                            container=budget_ref
                        />

                        <TextAreaField
                            id="message"
                            label="Tell me about your vision"
                            required=true
                            placeholder="Describe your project goals, target audience, and what success looks like to you..."
                            value=value_of(LeadField::Message)
                            on_input=edit(LeadField::Message)
                            disabled=submitting
                            invalid=invalid(LeadField::Message)
                        />

                        <Button
                            variant=ButtonVariant::Primary
                            size=ButtonSize::Large
                            button_type="submit"
                            disabled=submitting
                            class="w-full btn-submit"
                        >
                            {move || match status() {
                                SubmitStatus::Submitting => view! {
                                    <span class="spinner" aria-hidden="true"></span>
                                    <span>"Sending Message..."</span>
                                }.into_any(),
                                SubmitStatus::Success => view! {
                                    <Icon name=icons::CHECK/>
                                    <span>"Message Sent!"</span>
                                }.into_any(),
                                SubmitStatus::Idle | SubmitStatus::Error => view! {
                                    <Icon name=icons::SEND/>
                                    <span>"Send Message"</span>
                                }.into_any(),
                            }}
                        </Button>

                        <p class="form-note">
                            "🔒 Your message will be sent securely via WhatsApp. I typically respond within 24 hours."
                        </p>
                    </form>
                </ScrollReveal>
            </div>
        </section>
    }
}
