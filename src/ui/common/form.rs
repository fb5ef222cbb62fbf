use leptos::prelude::*;

/// Labelled single-line input bound to a string signal
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (adds the asterisk and aria-required)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Draw the field as invalid
    #[prop(into, optional)]
    invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id class="label">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:input-invalid=move || invalid.get()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                required=required
                aria-required=required.to_string()
                aria-invalid=move || invalid.get().to_string()
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled multi-line input bound to a string signal
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    #[prop(into, optional)]
    disabled: Signal<bool>,
    #[prop(into, optional)]
    invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id class="label">
                {label}
                {required.then_some(" *")}
            </label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class:input-invalid=move || invalid.get()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                required=required
                aria-required=required.to_string()
                aria-invalid=move || invalid.get().to_string()
                disabled=move || disabled.get()
            />
        </div>
    }
}
