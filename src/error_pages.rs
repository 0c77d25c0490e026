use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::config::RuntimeConfig;
use crate::routes::Route;
use crate::ui::{Button, ButtonSize, ButtonVariant};

pub const RATE_LIMIT_RULE: &str = "5 attempts per 15 minutes";
pub const RATE_LIMIT_REMAINING: &str = "12:34";

pub const LOCK_REASONS: [&str; 3] = [
    "Multiple failed unlock attempts",
    "Suspicious activity detected",
    "Security policy violation",
];

#[component]
pub fn RateLimitPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let navigator = use_navigator();
    rsx! {
        document::Title { "Too Many Attempts | {config.app_name}" }
        div { class: "screen screen-soft centered-screen",
            div { class: "card narrow centered",
                div { class: "icon-tile icon-tile-danger", "⛔" }
                h1 { class: "screen-title", "Too Many Attempts" }
                p { class: "muted",
                    "You've exceeded the maximum number of unlock attempts. Please wait before trying again."
                }
                div { class: "notice notice-danger",
                    p {
                        strong { "Rate Limit: " }
                        "{RATE_LIMIT_RULE}"
                    }
                    p {
                        "Time remaining: "
                        strong { "{RATE_LIMIT_REMAINING}" }
                    }
                }
                div { class: "button-stack",
                    Button {
                        size: ButtonSize::Lg,
                        wide: true,
                        onclick: move |_| {
                            navigator.push(Route::Landing {});
                        },
                        "🏠 Go to Home"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        wide: true,
                        onclick: move |_| reload_page(),
                        "↻ Refresh Page"
                    }
                }
            }
        }
    }
}

#[component]
pub fn AccountLockedPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let navigator = use_navigator();
    rsx! {
        document::Title { "Account Locked | {config.app_name}" }
        div { class: "screen screen-soft centered-screen",
            div { class: "card narrow centered",
                div { class: "icon-tile icon-tile-warning", "⚠" }
                h1 { class: "screen-title", "Account Locked" }
                p { class: "muted",
                    "Your account has been locked due to security concerns. Telegram has been disconnected."
                }
                div { class: "notice notice-warning align-left",
                    p { class: "notice-title", "Reasons for locking:" }
                    ul {
                        for reason in LOCK_REASONS {
                            li { key: "{reason}", "{reason}" }
                        }
                    }
                }
                div { class: "button-stack",
                    Button {
                        size: ButtonSize::Lg,
                        wide: true,
                        onclick: move |_| {
                            navigator.push(Route::Connect {});
                        },
                        "Reconnect Telegram"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        wide: true,
                        onclick: move |_| {
                            navigator.push(Route::Landing {});
                        },
                        "Go to Home"
                    }
                }
                p { class: "muted small", "If you believe this is an error, please contact support" }
            }
        }
    }
}

fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().reload() {
            tracing::warn!("reload failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("reload requested outside the browser; ignoring");
}
