use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let base = format!("btn-base {} {}", variant.class(), size.class());
    if class.is_empty() {
        base
    } else {
        format!("{} {}", base, class)
    }
}

/// Call-to-action button with the sheen hover effect
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; omit for submit buttons
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// `type` attribute
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Optional icon name to show after the label
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_classes(variant, size, class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get()
        >
            {children()}
            {icon.map(|icon_name| view! { <Icon name=icon_name class="icon-btn"/> })}
        </button>
    }
}

/// Icon-only button component
#[component]
pub fn IconButton(
    /// Icon name to display
    icon: &'static str,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Accessible label
    label: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-icon".to_string()
    } else {
        format!("btn-icon {}", class)
    };

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| on_click.run(())
            disabled=move || disabled.get()
            aria-label=label
            title=label
        >
            <Icon name=icon class="icon-standalone"/>
        </button>
    }
}
