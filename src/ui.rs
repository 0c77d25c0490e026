use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Light,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Light => "btn-light",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[component]
pub fn Button(
    children: Element,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] wide: bool,
    class: Option<String>,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let extra = class.unwrap_or_default();
    let width = if wide { "btn-wide" } else { "" };
    rsx! {
        button {
            r#type: if submit { "submit" } else { "button" },
            class: "btn {variant.class()} {size.class()} {width} {extra}",
            aria_label,
            disabled,
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    placeholder: Option<String>,
    kind: Option<String>,
    hint: Option<String>,
    #[props(default)] required: bool,
    max_length: Option<usize>,
    #[props(default)] centered: bool,
) -> Element {
    let kind = kind.unwrap_or_else(|| "text".to_string());
    let placeholder = placeholder.unwrap_or_default();
    let align = if centered { "field-input centered" } else { "field-input" };
    rsx! {
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "{align}",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                required,
                maxlength: max_length.map(|max| max.to_string()),
                oninput: move |event| oninput.call(event.value()),
            }
            if let Some(hint) = hint {
                p { class: "field-hint", "{hint}" }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSpec {
    pub value: &'static str,
    pub label: &'static str,
}

#[component]
pub fn TabList(tabs: Vec<TabSpec>, active: String, onselect: EventHandler<&'static str>) -> Element {
    rsx! {
        div { class: "tab-list", role: "tablist",
            for tab in tabs {
                button {
                    key: "{tab.value}",
                    r#type: "button",
                    role: "tab",
                    class: if active == tab.value { "tab-trigger active" } else { "tab-trigger" },
                    aria_selected: active == tab.value,
                    onclick: move |_| onselect.call(tab.value),
                    "{tab.label}"
                }
            }
        }
    }
}

#[component]
pub fn Dialog(
    open: bool,
    title: String,
    description: String,
    onclose: EventHandler<()>,
    tone: Option<String>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    let tone = tone.unwrap_or_default();
    rsx! {
        div { class: "dialog-backdrop", onclick: move |_| onclose.call(()),
            div {
                class: "dialog-card {tone}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |event| event.stop_propagation(),
                h2 { class: "dialog-title", "{title}" }
                p { class: "dialog-description", "{description}" }
                div { class: "dialog-actions", {children} }
            }
        }
    }
}

#[component]
pub fn Badge(children: Element, tone: Option<String>) -> Element {
    let tone = tone.unwrap_or_else(|| "badge-info".to_string());
    rsx! {
        span { class: "badge {tone}", {children} }
    }
}

#[component]
pub fn Avatar(label: String, size: Option<String>, online: Option<bool>) -> Element {
    let size = size.unwrap_or_else(|| "avatar-md".to_string());
    rsx! {
        div { class: "avatar-wrap",
            div { class: "avatar {size}", "{label}" }
            if online.unwrap_or(false) {
                span { class: "avatar-online" }
            }
        }
    }
}

#[component]
pub fn ProgressBar(value: f64) -> Element {
    let clamped = value.clamp(0.0, 100.0);
    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{clamped:.0}",
            div { class: "progress-fill", style: "width: {clamped}%;" }
        }
    }
}

#[component]
pub fn Tooltip(label: String, children: Element) -> Element {
    rsx! {
        span { class: "tooltip", title: "{label}",
            {children}
            span { class: "tooltip-content", role: "tooltip", "{label}" }
        }
    }
}
