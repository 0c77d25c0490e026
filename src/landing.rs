use dioxus::prelude::*;
use dioxus_router::Link;

use crate::config::RuntimeConfig;
use crate::mock_data::FEATURES;
use crate::routes::Route;

#[component]
pub fn LandingPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    rsx! {
        document::Title { "{config.app_name}" }
        div { class: "screen screen-gradient landing",
            div { class: "backdrop-shapes", aria_hidden: "true",
                span { class: "blob blob-purple" }
                span { class: "blob blob-blue" }
                span { class: "blob blob-cyan" }
            }
            nav { class: "top-nav",
                div { class: "brand",
                    div { class: "brand-tile", "💬" }
                    span { class: "brand-name light", "{config.app_name}" }
                }
                div { class: "nav-actions",
                    Link { to: Route::Auth {}, class: "btn btn-ghost btn-md light", "Login" }
                    Link { to: Route::Auth {}, class: "btn btn-light btn-md", "Register" }
                }
            }
            section { class: "hero centered",
                div { class: "pill glass",
                    span { class: "status-dot status-dot-connected status-dot-sm status-pulse" }
                    span { "Real-time Telegram Integration" }
                }
                h1 { class: "hero-title",
                    "Stay Connected"
                    br {}
                    span { class: "hero-accent", "with Telegram" }
                }
                p { class: "hero-copy",
                    "Access your Telegram messages seamlessly on the web. Secure, fast, and beautifully designed for the modern user."
                }
                div { class: "hero-actions",
                    Link { to: Route::Auth {}, class: "btn btn-light btn-lg", "Get Started Free ⚡" }
                    Link { to: Route::Auth {}, class: "btn btn-outline btn-lg light", "Sign In" }
                }
                div { class: "feature-grid",
                    for feature in FEATURES.iter() {
                        article { key: "{feature.title}", class: "glass-card feature-card",
                            div { class: "feature-icon {feature.gradient}", "{feature.icon}" }
                            h3 { class: "feature-title", "{feature.title}" }
                            p { class: "feature-copy", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}
