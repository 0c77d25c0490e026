use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::config::RuntimeConfig;
use crate::date::{clock_label, date_label, minutes_before, now_ms};
use crate::mock_data::{audit_log, sessions};
use crate::routes::Route;
use crate::timers::{schedule_redirect, use_scoped_timer, PendingRedirect};
use crate::toast::use_toaster;
use crate::ui::{Badge, Button, ButtonSize, ButtonVariant, Dialog};

const SECURITY_NOTE: &str = "TDLib runs on a secure VPS. Session files are encrypted. Twilio webhooks are verified. OTP codes are hashed. Rate limits are enforced. CORS and CSP protect embedded widgets.";

/// Link state of the settings screen. Starts linked on every mount.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkSettings {
    pub linked: bool,
    pub confirm_open: bool,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            linked: true,
            confirm_open: false,
        }
    }
}

impl LinkSettings {
    pub fn request_unlink(&mut self) {
        if self.linked {
            self.confirm_open = true;
        }
    }

    pub fn cancel_unlink(&mut self) {
        self.confirm_open = false;
    }

    /// Marks the account unlinked; returns the redirect to the connect flow.
    pub fn confirm_unlink(&mut self) -> Option<PendingRedirect> {
        self.confirm_open = false;
        if !self.linked {
            return None;
        }
        self.linked = false;
        tracing::info!("settings: telegram unlinked");
        Some(PendingRedirect::to_connect())
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mut link = use_signal(LinkSettings::default);
    let mut redirect_timer = use_scoped_timer("settings-redirect");
    let opened_at = use_hook(now_ms);

    let state = link();
    let sessions = sessions();
    let entries = audit_log();

    rsx! {
        document::Title { "Settings | {config.app_name}" }
        div { class: "screen screen-soft",
            header { class: "top-bar",
                div { class: "top-bar-inner",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        onclick: move |_| {
                            navigator.push(Route::Dashboard {});
                        },
                        "← Back"
                    }
                    h1 { class: "top-bar-title", "⚙ Settings" }
                }
            }
            main { class: "page-column",
                section { class: "card",
                    div { class: "card-header split",
                        div {
                            h2 { class: "card-title", "Telegram Connection" }
                            p { class: "muted small", "Manage your Telegram account connection" }
                        }
                        if state.linked {
                            Badge { tone: Some("badge-success".to_string()), "✓ Connected" }
                        } else {
                            Badge { tone: Some("badge-muted".to_string()), "! Disconnected" }
                        }
                    }
                    div { class: "action-grid",
                        if state.linked {
                            Button {
                                variant: ButtonVariant::Danger,
                                wide: true,
                                onclick: move |_| link.write().request_unlink(),
                                "Unlink Telegram"
                            }
                            Button {
                                wide: true,
                                onclick: move |_| {
                                    navigator.push(Route::Unlock {});
                                },
                                "🛡 Request Unlock"
                            }
                        } else {
                            Button {
                                wide: true,
                                class: Some("span-all".to_string()),
                                onclick: move |_| {
                                    navigator.push(Route::Connect {});
                                },
                                "🔗 Re-link Telegram"
                            }
                        }
                    }
                }
                section { class: "card",
                    h2 { class: "card-title", "Active Sessions" }
                    div { class: "list-stack",
                        for session in sessions {
                            div { key: "{session.id}", class: "list-row",
                                div { class: "grow",
                                    div { class: "row-title",
                                        p { class: "strong", "{session.device}" }
                                        if session.current {
                                            Badge { tone: Some("badge-outline".to_string()), "Current" }
                                        }
                                    }
                                    p { class: "muted small", "{session.location}" }
                                    p { class: "muted tiny", "{session.last_active}" }
                                }
                                if !session.current {
                                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Sm, "Terminate" }
                                }
                            }
                        }
                    }
                }
                section { class: "card",
                    h2 { class: "card-title", "🕒 Audit Log" }
                    div { class: "list-stack",
                        for entry in entries {
                            {
                                let at = minutes_before(opened_at, entry.minutes_ago);
                                let (icon_class, icon) = if entry.succeeded {
                                    ("audit-icon audit-success", "✓")
                                } else {
                                    ("audit-icon audit-failed", "!")
                                };
                                rsx! {
                                    div { key: "{entry.id}", class: "list-row",
                                        div { class: "{icon_class}", "{icon}" }
                                        div { class: "grow",
                                            div { class: "row-title split",
                                                p { class: "strong", "{entry.action}" }
                                                span { class: "muted tiny", "{clock_label(at)}" }
                                            }
                                            p { class: "muted small", "{entry.details}" }
                                            p { class: "muted tiny", "{date_label(at)}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "notice notice-info",
                    p { class: "notice-title", "🛡 Security Information" }
                    p { "{SECURITY_NOTE}" }
                }
            }
            Dialog {
                open: state.confirm_open,
                title: "Unlink Telegram Account?".to_string(),
                description: "This will disconnect your Telegram account. You'll need to reconnect to access messages.".to_string(),
                onclose: move |_| link.write().cancel_unlink(),
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| link.write().cancel_unlink(),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        let redirect = link.write().confirm_unlink();
                        if let Some(redirect) = redirect {
                            toaster.success("Telegram Disconnected", Some("Your account has been unlinked"));
                            schedule_redirect(&mut redirect_timer, navigator, redirect);
                        }
                    },
                    "Unlink"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unlink_needs_confirmation() {
        let mut settings = LinkSettings::default();
        settings.request_unlink();
        assert!(settings.confirm_open);
        settings.cancel_unlink();
        assert_eq!(settings, LinkSettings::default());
    }

    #[test]
    fn confirming_unlinks_and_redirects_to_connect() {
        let mut settings = LinkSettings::default();
        settings.request_unlink();
        let redirect = settings.confirm_unlink();
        assert_eq!(redirect, Some(PendingRedirect::to_connect()));
        assert!(!settings.linked);
        assert!(!settings.confirm_open);
    }

    #[test]
    fn unlinked_account_cannot_unlink_again() {
        let mut settings = LinkSettings {
            linked: false,
            confirm_open: false,
        };
        settings.request_unlink();
        assert!(!settings.confirm_open);
        assert_eq!(settings.confirm_unlink(), None);
    }
}
