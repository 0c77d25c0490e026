use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::timers::delay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// App-wide notification queue. Holds no domain state.
#[derive(Clone, Copy)]
pub struct Toaster {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    lifetime_ms: u32,
}

impl Toaster {
    pub fn success(&self, title: &str, description: Option<&str>) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: Option<&str>) {
        self.push(ToastKind::Error, title, description);
    }

    pub fn info(&self, title: &str, description: Option<&str>) {
        self.push(ToastKind::Info, title, description);
    }

    fn push(&self, kind: ToastKind, title: &str, description: Option<&str>) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.map(str::to_string),
        });
        let lifetime_ms = self.lifetime_ms;
        spawn_forever(async move {
            delay(lifetime_ms).await;
            items.write().retain(|toast| toast.id != id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|toast| toast.id != id);
    }
}

pub fn use_toaster_provider(lifetime_ms: u32) -> Toaster {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toaster {
        items,
        next_id,
        lifetime_ms,
    })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_toaster();
    let items = toaster.items;
    rsx! {
        div { class: "toast-viewport", aria_live: "polite",
            for toast in items() {
                div { key: "{toast.id}", class: "{toast.kind.class()}",
                    div { class: "toast-copy",
                        p { class: "toast-title", "{toast.title}" }
                        if let Some(description) = toast.description.clone() {
                            p { class: "toast-description", "{description}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "toast-close",
                        aria_label: "Dismiss",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
