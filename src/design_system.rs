use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RuntimeConfig;
use crate::mock_data::DeliveryStatus;
use crate::status::{ConnectionStatus, IndicatorSize, StatusIndicator};
use crate::ui::{Avatar, Badge, Button, ButtonSize, ButtonVariant, TextField};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const PRIMARY_COLORS: [ColorToken; 2] = [
    ColorToken { name: "Primary Blue", hex: "#3b82f6" },
    ColorToken { name: "Accent Purple", hex: "#8b5cf6" },
];

pub const STATUS_COLORS: [ColorToken; 3] = [
    ColorToken { name: "Success", hex: "#10b981" },
    ColorToken { name: "Danger", hex: "#ef4444" },
    ColorToken { name: "Warning", hex: "#f97316" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub sample: &'static str,
    pub class: &'static str,
    pub detail: &'static str,
}

pub const TYPE_SCALE: [TypeStep; 4] = [
    TypeStep { sample: "H1 Heading", class: "type-h1", detail: "Poppins Bold, 2.5rem (40px)" },
    TypeStep { sample: "H2 Heading", class: "type-h2", detail: "Poppins SemiBold, 1.5rem (24px)" },
    TypeStep { sample: "Body Text", class: "type-body", detail: "Inter Regular, 1rem (16px)" },
    TypeStep { sample: "Caption Text", class: "type-caption", detail: "Inter Regular, 0.875rem (14px)" },
];

/// Spacing steps on the 4/8 grid, in pixels.
pub const SPACING_PX: [u32; 6] = [4, 8, 16, 24, 32, 48];

pub fn spacing_token(px: u32) -> String {
    format!("--spacing-{}", px / 4)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockMethod {
    Sms,
    Call,
}

/// Shape of the realtime events a widget host would receive. Documentation
/// only; nothing in the app opens a socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SocketEvent {
    Connected {
        timestamp: String,
        user_id: String,
        session_id: String,
    },
    Unlocked {
        timestamp: String,
        user_id: String,
        method: UnlockMethod,
        otp_code: String,
    },
    Disconnected {
        timestamp: String,
        user_id: String,
        reason: String,
    },
}

impl SocketEvent {
    pub fn channel(&self) -> &'static str {
        match self {
            SocketEvent::Connected { .. } => "socket:connected",
            SocketEvent::Unlocked { .. } => "socket:unlocked",
            SocketEvent::Disconnected { .. } => "socket:disconnected",
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| {
            tracing::warn!("socket event: {err}");
            String::from("{}")
        })
    }
}

pub fn sample_events() -> Vec<SocketEvent> {
    vec![
        SocketEvent::Connected {
            timestamp: "2025-01-06T10:30:00Z".to_string(),
            user_id: "user_123".to_string(),
            session_id: "sess_abc".to_string(),
        },
        SocketEvent::Unlocked {
            timestamp: "2025-01-06T10:35:00Z".to_string(),
            user_id: "user_123".to_string(),
            method: UnlockMethod::Sms,
            otp_code: "123456".to_string(),
        },
        SocketEvent::Disconnected {
            timestamp: "2025-01-06T11:00:00Z".to_string(),
            user_id: "user_123".to_string(),
            reason: "session_expired".to_string(),
        },
    ]
}

#[component]
fn Swatches(title: String, tokens: Vec<ColorToken>) -> Element {
    rsx! {
        div {
            h3 { class: "section-subtitle", "{title}" }
            div { class: "swatch-list",
                for token in tokens {
                    div { key: "{token.hex}", class: "swatch",
                        div { class: "swatch-chip", style: "background: {token.hex};" }
                        div {
                            p { class: "strong", "{token.name}" }
                            p { class: "muted small mono", "{token.hex}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DesignSystemPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut sample_username = use_signal(String::new);
    let mut sample_password = use_signal(String::new);

    rsx! {
        document::Title { "Design System | {config.app_name}" }
        div { class: "screen screen-soft",
            main { class: "page-column wide",
                h1 { class: "screen-title", "Design System Documentation" }

                section { class: "card",
                    h2 { class: "card-title", "Color Tokens" }
                    div { class: "two-column",
                        Swatches { title: "Primary Colors".to_string(), tokens: PRIMARY_COLORS.to_vec() }
                        Swatches { title: "Status Colors".to_string(), tokens: STATUS_COLORS.to_vec() }
                    }
                }

                section { class: "card",
                    h2 { class: "card-title", "Typography Scale" }
                    div { class: "list-stack",
                        for step in TYPE_SCALE {
                            div { key: "{step.sample}",
                                p { class: "{step.class}", "{step.sample}" }
                                p { class: "muted small", "{step.detail}" }
                            }
                        }
                    }
                }

                section { class: "card",
                    h2 { class: "card-title", "Component Library" }
                    h3 { class: "section-subtitle", "Buttons" }
                    div { class: "sample-row",
                        Button { "Primary Button" }
                        Button { variant: ButtonVariant::Outline, "Secondary Button" }
                        Button { variant: ButtonVariant::Ghost, "Ghost Button" }
                        Button { size: ButtonSize::Sm, "Small" }
                        Button { size: ButtonSize::Lg, "Large" }
                        Button { disabled: true, "Disabled" }
                    }
                    h3 { class: "section-subtitle", "Inputs" }
                    div { class: "two-column",
                        TextField {
                            id: "sample-username".to_string(),
                            label: "Username".to_string(),
                            value: sample_username(),
                            placeholder: Some("Username".to_string()),
                            oninput: move |value| sample_username.set(value),
                        }
                        TextField {
                            id: "sample-password".to_string(),
                            label: "Password".to_string(),
                            value: sample_password(),
                            kind: Some("password".to_string()),
                            placeholder: Some("Password".to_string()),
                            oninput: move |value| sample_password.set(value),
                        }
                    }
                    h3 { class: "section-subtitle", "Badges" }
                    div { class: "sample-row",
                        Badge { tone: Some("badge-success".to_string()), "✓ Connected" }
                        Badge { tone: Some("badge-danger".to_string()), "! Disconnected" }
                        Badge { tone: Some("badge-outline".to_string()), "Outline Badge" }
                        Badge { "3" }
                    }
                    h3 { class: "section-subtitle", "Avatars" }
                    div { class: "sample-row",
                        Avatar { label: "U".to_string(), size: Some("avatar-sm".to_string()) }
                        Avatar { label: "T".to_string() }
                        Avatar { label: "A".to_string(), size: Some("avatar-lg".to_string()), online: Some(true) }
                    }
                    h3 { class: "section-subtitle", "Message Bubbles" }
                    div { class: "message-list",
                        div { class: "bubble-row",
                            div { class: "bubble",
                                p { "Incoming message bubble" }
                                div { class: "bubble-meta", span { "14:23" } }
                            }
                        }
                        for status in DeliveryStatus::ALL {
                            div { key: "{status.label()}", class: "bubble-row own",
                                div { class: "bubble bubble-own",
                                    p { "Outgoing message bubble ({status.label()})" }
                                    div { class: "bubble-meta",
                                        span { "14:25" }
                                        span { class: "ticks", "{status.ticks()}" }
                                    }
                                }
                            }
                        }
                    }
                    h3 { class: "section-subtitle", "Status Indicators" }
                    div { class: "sample-row",
                        for status in ConnectionStatus::ALL {
                            StatusIndicator { key: "{status.label()}", status, show_label: true }
                        }
                        StatusIndicator { status: ConnectionStatus::Connected, size: IndicatorSize::Sm }
                        StatusIndicator { status: ConnectionStatus::Connected, size: IndicatorSize::Lg }
                    }
                }

                section { class: "card",
                    h2 { class: "card-title", "Spacing System (4/8 Grid)" }
                    div { class: "list-stack",
                        for px in SPACING_PX {
                            div { key: "{px}", class: "spacing-row",
                                code { class: "mono spacing-name", "{spacing_token(px)}" }
                                div { class: "spacing-bar", style: "width: {px}px;" }
                                span { class: "muted small", "{px}px" }
                            }
                        }
                    }
                }

                section { class: "card",
                    h2 { class: "card-title", "Sample WebSocket Events" }
                    div { class: "list-stack",
                        for event in sample_events() {
                            div { key: "{event.channel()}", class: "event-sample",
                                p { class: "strong small", "Event: {event.channel()}" }
                                pre { class: "code-block", "{event.to_pretty_json()}" }
                            }
                        }
                    }
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
    fn connected_event_matches_documented_shape() {
        let events = sample_events();
        assert_eq!(
            events[0].to_pretty_json(),
            r#"{
  "event": "connected",
  "timestamp": "2025-01-06T10:30:00Z",
  "userId": "user_123",
  "sessionId": "sess_abc"
}"#
        );
    }

    #[test]
    fn unlocked_event_uses_camel_case_fields() {
        let value = serde_json::to_value(&sample_events()[1]).unwrap();
        assert_eq!(value["event"], "unlocked");
        assert_eq!(value["method"], "sms");
        assert_eq!(value["otpCode"], "123456");
    }

    #[test]
    fn documented_json_parses_back() {
        let raw = r#"{"event":"disconnected","timestamp":"2025-01-06T11:00:00Z","userId":"user_123","reason":"session_expired"}"#;
        let event: SocketEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event, sample_events()[2]);
        assert_eq!(event.channel(), "socket:disconnected");
    }

    #[test]
    fn spacing_tokens_follow_the_grid() {
        let names: Vec<String> = SPACING_PX.iter().map(|px| spacing_token(*px)).collect();
        assert_eq!(
            names,
            vec!["--spacing-1", "--spacing-2", "--spacing-4", "--spacing-6", "--spacing-8", "--spacing-12"]
        );
    }
}
