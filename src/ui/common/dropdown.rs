use leptos::html::Div;
use leptos::prelude::*;

use crate::core::catalog::CatalogEntry;
use crate::ui::icon::{Icon, icons};

/// Single-select popover over a catalog
///
/// Open state lives with the caller so outside clicks and Escape can be
/// handled for several popovers at once.
#[component]
pub fn SelectDropdown(
    /// Trigger id, referenced by the label and the listbox
    id: &'static str,
    label: &'static str,
    /// Trigger text while nothing is selected
    placeholder: &'static str,
    entries: &'static [CatalogEntry],
    /// Selected catalog code, empty when unset
    #[prop(into)]
    selected: Signal<String>,
    #[prop(into)]
    open: Signal<bool>,
    on_toggle: Callback<()>,
    on_select: Callback<&'static str>,
    #[prop(into, optional)]
    disabled: Signal<bool>,
    #[prop(into, optional)]
    invalid: Signal<bool>,
    /// Container ref used for outside-pointer detection
    container: NodeRef<Div>,
) -> impl IntoView {
    let selected_label = move || {
        selected.with(|code| {
            entries
                .iter()
                .find(|entry| entry.code == code)
                .map(|entry| entry.label)
        })
    };

    view! {
        <div class="field dropdown-container" node_ref=container>
            <label for=id class="label">{label}" *"</label>
            <button
                id=id
                type="button"
                class="input-base dropdown-trigger"
                class:input-invalid=move || invalid.get()
                on:click=move |_| on_toggle.run(())
                disabled=move || disabled.get()
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
            >
                <span class:dropdown-placeholder=move || selected_label().is_none()>
                    {move || selected_label().unwrap_or(placeholder)}
                </span>
                <span class="dropdown-chevron" class:dropdown-chevron-open=move || open.get()>
                    <Icon name=icons::CHEVRON_DOWN/>
                </span>
            </button>

            <Show when=move || open.get()>
                <div class="dropdown-menu" role="listbox" aria-labelledby=id>
                    {entries
                        .iter()
                        .map(|entry| {
                            let code = entry.code;
                            view! {
                                <button
                                    type="button"
                                    class="dropdown-item"
                                    role="option"
                                    aria-selected=move || selected.with(|s| s == code).to_string()
                                    on:click=move |_| on_select.run(code)
                                >
                                    {entry.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
