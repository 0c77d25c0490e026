use dioxus::prelude::*;

use crate::config::RuntimeConfig;
use crate::date::{clock_label_seconds, now_ms};
use crate::timers::use_scoped_timer;
use crate::ui::{Button, ButtonSize, ButtonVariant, Tooltip};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connected,
    Connecting,
    Disconnected,
    UnlockPending,
}

impl ConnectionStatus {
    pub const ALL: [ConnectionStatus; 4] = [
        ConnectionStatus::Connected,
        ConnectionStatus::Connecting,
        ConnectionStatus::Disconnected,
        ConnectionStatus::UnlockPending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::UnlockPending => "Unlock Pending",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Telegram is active",
            ConnectionStatus::Connecting => "Establishing connection...",
            ConnectionStatus::Disconnected => "Telegram not connected",
            ConnectionStatus::UnlockPending => "Waiting for SMS verification",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting",
            other => other.label(),
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "status-dot-connected",
            ConnectionStatus::Connecting => "status-dot-connecting",
            ConnectionStatus::Disconnected => "status-dot-disconnected",
            ConnectionStatus::UnlockPending => "status-dot-pending",
        }
    }

    /// Every state except a dropped connection animates.
    pub fn pulses(self) -> bool {
        !matches!(self, ConnectionStatus::Disconnected)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IndicatorSize {
    fn class(self) -> &'static str {
        match self {
            IndicatorSize::Sm => "status-dot-sm",
            IndicatorSize::Md => "status-dot-md",
            IndicatorSize::Lg => "status-dot-lg",
        }
    }
}

#[component]
pub fn StatusIndicator(
    status: ConnectionStatus,
    #[props(default)] size: IndicatorSize,
    #[props(default)] show_label: bool,
) -> Element {
    let pulse = if status.pulses() { "status-pulse" } else { "" };
    rsx! {
        Tooltip { label: status.label().to_string(),
            span { class: "status-indicator",
                span { class: "status-dot {status.dot_class()} {size.class()} {pulse}" }
                if show_label {
                    span { class: "status-label", "{status.label()}" }
                }
            }
        }
    }
}

#[component]
pub fn StatusWidget() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut status = use_signal(ConnectionStatus::default);
    let mut last_update = use_signal(now_ms);
    let mut clock = use_scoped_timer("status-clock");

    let refresh_ms = config.status_refresh_ms;
    use_effect(move || {
        clock.start_interval(refresh_ms, move || last_update.set(now_ms()));
    });

    let current = status();

    rsx! {
        document::Title { "Status | {config.app_name}" }
        div { class: "screen screen-muted centered-screen",
            div { class: "card narrow",
                div { class: "card-header",
                    h2 { class: "card-title", "Connection Status" }
                    StatusIndicator { status: current, size: IndicatorSize::Lg }
                }
                div { class: "status-summary",
                    p { class: "status-title", "{current.short_label()}" }
                    p { class: "muted", "{current.description()}" }
                }
                div { class: "status-clock muted",
                    span { "🕒" }
                    span { "Last update: {clock_label_seconds(last_update())}" }
                }
                div { class: "simulate-grid",
                    for option in ConnectionStatus::ALL {
                        Button {
                            key: "{option.short_label()}",
                            variant: if option == current { ButtonVariant::Primary } else { ButtonVariant::Outline },
                            size: ButtonSize::Sm,
                            onclick: move |_| {
                                tracing::debug!("status: simulate {}", option.label());
                                status.set(option);
                                last_update.set(now_ms());
                            },
                            "{option.short_label()}"
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
    fn only_disconnected_is_still() {
        let still: Vec<ConnectionStatus> = ConnectionStatus::ALL
            .into_iter()
            .filter(|status| !status.pulses())
            .collect();
        assert_eq!(still, vec![ConnectionStatus::Disconnected]);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = ConnectionStatus::ALL.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 4);
        assert_eq!(ConnectionStatus::UnlockPending.label(), "Unlock Pending");
    }
}
