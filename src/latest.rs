use dioxus::prelude::*;

use crate::config::RuntimeConfig;
use crate::date::{clock_label, now_ms};
use crate::decision::random_index;
use crate::mock_data::LATEST_MESSAGES;
use crate::timers::simulated_latency;
use crate::ui::{Button, ButtonSize};

/// Message at `index`, wrapping so any drawn index is valid.
pub fn message_at(index: usize) -> &'static str {
    LATEST_MESSAGES[index % LATEST_MESSAGES.len()]
}

#[derive(Clone, Debug, PartialEq)]
struct Fetched {
    text: &'static str,
    received_at: f64,
}

#[component]
pub fn LatestMessagePage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut message = use_signal(|| None::<Fetched>);
    let mut loading = use_signal(|| true);

    let latency_ms = config.latest_message_latency_ms;
    let mut fetch_latest = move || {
        loading.set(true);
        spawn(async move {
            simulated_latency(latency_ms).await;
            let text = message_at(random_index(LATEST_MESSAGES.len()));
            tracing::debug!("latest message: fetched {text:?}");
            message.set(Some(Fetched {
                text,
                received_at: now_ms(),
            }));
            loading.set(false);
        });
    };

    use_effect(move || fetch_latest());

    let busy = loading();

    rsx! {
        document::Title { "Latest Message | {config.app_name}" }
        div { class: "screen screen-soft centered-screen",
            div { class: "column narrow",
                div { class: "card-header centered",
                    div { class: "logo-tile", "💬" }
                    h1 { class: "screen-title", "Latest Telegram Message" }
                    p { class: "screen-subtitle", "Your most recent notification" }
                }
                div { class: "card",
                    if busy {
                        div { class: "loading-block centered",
                            div { class: "spinner" }
                            p { class: "muted", "Loading message..." }
                        }
                    } else if let Some(fetched) = message() {
                        div { class: "latest-message",
                            div { class: "latest-header",
                                div { class: "avatar avatar-md", "💬" }
                                div {
                                    h3 { class: "latest-sender", "Telegram" }
                                    p { class: "muted small", "{clock_label(fetched.received_at)}" }
                                }
                            }
                            div { class: "latest-bubble",
                                p { "{fetched.text}" }
                            }
                            div { class: "latest-footer muted small",
                                span { "Received just now" }
                                span { class: "delivered",
                                    span { class: "status-dot status-dot-connected status-dot-sm" }
                                    "Delivered"
                                }
                            }
                        }
                    }
                }
                Button {
                    size: ButtonSize::Lg,
                    wide: true,
                    disabled: busy,
                    onclick: move |_| fetch_latest(),
                    if busy { "Loading..." } else { "↻ Refresh Message" }
                }
                p { class: "muted small centered", "Click refresh to fetch a new message" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_drawn_index_maps_to_a_message() {
        assert_eq!(message_at(0), "📩 Your Telegram code: 12345");
        assert_eq!(message_at(4), "🎉 Account activated successfully");
        assert_eq!(message_at(5), message_at(0));
    }

    #[test]
    fn random_draw_stays_in_pool() {
        for _ in 0..50 {
            let text = message_at(random_index(LATEST_MESSAGES.len()));
            assert!(LATEST_MESSAGES.contains(&text));
        }
    }
}
