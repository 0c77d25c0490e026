use dioxus::prelude::*;
use dioxus_router::{use_navigator, Routable, Router};

use crate::auth::AuthPage;
use crate::config::use_runtime_config;
use crate::connect::ConnectPage;
use crate::dashboard::DashboardPage;
use crate::design_system::DesignSystemPage;
use crate::error_pages::{AccountLockedPage, RateLimitPage};
use crate::landing::LandingPage;
use crate::latest::LatestMessagePage;
use crate::settings::SettingsPage;
use crate::status::StatusWidget;
use crate::toast::{use_toaster_provider, ToastViewport};
use crate::unlock::UnlockPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "TeleConnect" }
            div { class: "screen centered-screen",
                div { class: "spinner" }
            }
        };
    };

    tracing::debug!("app: runtime config ready for {}", config.app_name);
    let lifetime_ms = config.toast_lifetime_ms;
    use_context_provider(|| config);
    use_toaster_provider(lifetime_ms);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
        ToastViewport {}
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/latest")]
    Latest {},
    #[route("/auth")]
    Auth {},
    #[route("/connect")]
    Connect {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/unlock")]
    Unlock {},
    #[route("/settings")]
    Settings {},
    #[route("/rate-limit")]
    RateLimit {},
    #[route("/account-locked")]
    AccountLocked {},
    #[route("/widget")]
    Widget {},
    #[route("/design-system")]
    DesignSystem {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The screen a route actually shows. Unknown paths land on `/`.
    pub fn resolve(self) -> Route {
        match self {
            Route::NotFound { .. } => Route::Landing {},
            other => other,
        }
    }
}

#[component]
fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn Latest() -> Element {
    rsx! { LatestMessagePage {} }
}

#[component]
fn Auth() -> Element {
    rsx! { AuthPage {} }
}

#[component]
fn Connect() -> Element {
    rsx! { ConnectPage {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
fn Unlock() -> Element {
    rsx! { UnlockPage {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsPage {} }
}

#[component]
fn RateLimit() -> Element {
    rsx! { RateLimitPage {} }
}

#[component]
fn AccountLocked() -> Element {
    rsx! { AccountLockedPage {} }
}

#[component]
fn Widget() -> Element {
    rsx! { StatusWidget {} }
}

#[component]
fn DesignSystem() -> Element {
    rsx! { DesignSystemPage {} }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = route.join("/");
    use_effect(move || {
        tracing::info!("unknown path /{path}; redirecting home");
        let target = Route::NotFound { route: Vec::new() }.resolve();
        navigator.replace(target);
    });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    const PATHS: [&str; 11] = [
        "/",
        "/latest",
        "/auth",
        "/connect",
        "/dashboard",
        "/unlock",
        "/settings",
        "/rate-limit",
        "/account-locked",
        "/widget",
        "/design-system",
    ];

    fn parse(path: &str) -> Route {
        match Route::from_str(path) {
            Ok(route) => route,
            Err(err) => panic!("{path} did not parse: {err}"),
        }
    }

    #[test]
    fn known_paths_round_trip() {
        for path in PATHS {
            let route = parse(path);
            assert!(!matches!(route, Route::NotFound { .. }), "{path}");
            assert_eq!(route.to_string(), path);
            assert_eq!(route.clone().resolve(), route);
        }
    }

    #[test]
    fn unknown_paths_resolve_home() {
        for path in ["/nonexistent", "/a/b", "/dashboard/extra"] {
            let route = parse(path);
            assert!(matches!(route, Route::NotFound { .. }), "{path}");
            assert_eq!(route.resolve().to_string(), "/");
        }
    }
}
