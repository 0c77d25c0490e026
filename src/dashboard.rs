use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::config::RuntimeConfig;
use crate::date::{elapsed_label, minutes_before, now_ms, relative_label};
use crate::decision::{CoinFlip, Decision};
use crate::mock_data::{all_chats, filter_chats, get_chat, messages_for, SYSTEM_CHAT_ID};
use crate::routes::Route;
use crate::status::{ConnectionStatus, StatusIndicator};
use crate::timers::{simulated_latency, use_scoped_timer};
use crate::ui::{Avatar, Badge, Button, ButtonSize, ButtonVariant, Dialog};

/// Screen-local dashboard state. Nothing here survives navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub selected_chat: Option<i64>,
    pub sidebar_open: bool,
    pub search: String,
    pub draft: String,
    pub refreshing: bool,
    pub session_expired: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            selected_chat: Some(SYSTEM_CHAT_ID),
            sidebar_open: true,
            search: String::new(),
            draft: String::new(),
            refreshing: false,
            session_expired: false,
        }
    }
}

impl DashboardState {
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Clears the composer. Returns false for a blank draft.
    pub fn send(&mut self) -> bool {
        if !self.can_send() {
            return false;
        }
        tracing::debug!("dashboard: sent {} chars", self.draft.trim().len());
        self.draft.clear();
        true
    }

    pub fn select(&mut self, chat_id: i64) {
        self.selected_chat = Some(chat_id);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Returns false while a refresh is already in flight.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Ends the refresh. Returns true when the sync succeeded.
    pub fn finish_refresh(&mut self, expiry: &dyn Decision) -> bool {
        self.refreshing = false;
        if expiry.decide() {
            tracing::info!("dashboard: session expired during refresh");
            self.session_expired = true;
            return false;
        }
        true
    }

    pub fn dismiss_expired(&mut self) {
        self.session_expired = false;
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let navigator = use_navigator();
    let mut dashboard = use_signal(DashboardState::default);
    let mut synced_at = use_signal(now_ms);
    let mut now = use_signal(now_ms);
    let mut ticker = use_scoped_timer("dashboard-sync-label");
    let opened_at = use_hook(now_ms);

    use_effect(move || {
        ticker.start_interval(1000, move || now.set(now_ms()));
    });

    let expiry = CoinFlip::new(config.session_expiry_probability);
    let latency_ms = config.refresh_latency_ms;
    let refresh = move |_: MouseEvent| {
        if !dashboard.write().begin_refresh() {
            return;
        }
        tracing::debug!("dashboard: refreshing, expiry odds {}", expiry.probability());
        spawn(async move {
            simulated_latency(latency_ms).await;
            let synced = dashboard.write().finish_refresh(&expiry);
            if synced {
                let at = now_ms();
                synced_at.set(at);
                now.set(at);
            }
        });
    };

    let state = dashboard();
    let chats = filter_chats(&all_chats(), &state.search);
    let current = state.selected_chat.and_then(get_chat);
    let since_sync = ((now() - synced_at()) / 1000.0).max(0.0) as u64;
    let sidebar_class = if state.sidebar_open { "chat-sidebar open" } else { "chat-sidebar" };

    rsx! {
        document::Title { "Dashboard | {config.app_name}" }
        div { class: "screen dashboard",
            header { class: "top-bar",
                div { class: "top-bar-inner split",
                    div { class: "brand",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            aria_label: Some("Toggle chat list".to_string()),
                            onclick: move |_| dashboard.write().toggle_sidebar(),
                            if state.sidebar_open { "✕" } else { "☰" }
                        }
                        div { class: "brand-tile", "💬" }
                        span { class: "brand-name", "{config.app_name}" }
                    }
                    div { class: "nav-actions",
                        span { class: "muted small", "Synced {elapsed_label(since_sync)}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            disabled: state.refreshing,
                            onclick: refresh,
                            if state.refreshing { "↻ Refreshing..." } else { "↻ Refresh" }
                        }
                        StatusIndicator { status: ConnectionStatus::Connected }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            aria_label: Some("Settings".to_string()),
                            onclick: move |_| {
                                navigator.push(Route::Settings {});
                            },
                            "⚙"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            aria_label: Some("Log out".to_string()),
                            onclick: move |_| {
                                tracing::info!("dashboard: logout");
                                navigator.push(Route::Landing {});
                            },
                            "⎋"
                        }
                    }
                }
            }
            div { class: "chat-layout",
                aside { class: "{sidebar_class}",
                    div { class: "chat-search",
                        input {
                            class: "field-input",
                            r#type: "search",
                            placeholder: "Search",
                            value: "{state.search}",
                            oninput: move |event| dashboard.write().search = event.value(),
                        }
                    }
                    div { class: "chat-list",
                        for chat in chats {
                            div {
                                key: "{chat.id}",
                                class: if state.selected_chat == Some(chat.id) { "chat-row selected" } else { "chat-row" },
                                onclick: move |_| dashboard.write().select(chat.id),
                                Avatar { label: chat.avatar.to_string(), online: Some(chat.online) }
                                div { class: "grow",
                                    div { class: "row-title split",
                                        span { class: "strong", "{chat.name}" }
                                        span { class: "muted tiny", "{chat.timestamp}" }
                                    }
                                    div { class: "row-title split",
                                        p { class: "muted small truncate", "{chat.last_message}" }
                                        if chat.unread > 0 {
                                            Badge { "{chat.unread}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                section { class: "chat-view",
                    if let Some(chat) = current {
                        div { class: "chat-header",
                            Avatar { label: chat.avatar.to_string() }
                            div {
                                p { class: "strong", "{chat.name}" }
                                p { class: "muted tiny",
                                    if chat.is_system { "Chat ID: {chat.id}" } else { "last seen recently" }
                                }
                            }
                        }
                        div { class: "message-list",
                            if chat.is_system {
                                div { class: "system-banner", "Official Telegram System Messages" }
                            }
                            for message in messages_for(chat.id) {
                                div {
                                    key: "{message.id}",
                                    class: if message.is_own { "bubble-row own" } else { "bubble-row" },
                                    div { class: if message.is_own { "bubble bubble-own" } else { "bubble" },
                                        p { "{message.text}" }
                                        div { class: "bubble-meta",
                                            span { "{message.timestamp}" }
                                            if message.is_own {
                                                if let Some(status) = message.status {
                                                    span { class: "ticks", "{status.ticks()}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            p { class: "muted tiny centered",
                                "Last message {relative_label(minutes_before(opened_at, chat.received_minutes_ago), now())}"
                            }
                        }
                        form {
                            class: "composer",
                            onsubmit: move |event| {
                                event.prevent_default();
                                dashboard.write().send();
                            },
                            input {
                                class: "field-input grow",
                                placeholder: "Type a message...",
                                value: "{state.draft}",
                                oninput: move |event| dashboard.write().draft = event.value(),
                            }
                            Button { submit: true, disabled: !state.can_send(), aria_label: Some("Send".to_string()), "➤" }
                        }
                    } else {
                        div { class: "empty-state centered",
                            p { class: "muted", "Select a chat to start messaging" }
                        }
                    }
                }
            }
            Dialog {
                open: state.session_expired,
                title: "Session Expired".to_string(),
                description: "Your Telegram session has expired. Please reconnect your account to continue viewing messages.".to_string(),
                tone: Some("dialog-danger".to_string()),
                onclose: move |_| dashboard.write().dismiss_expired(),
                Button {
                    wide: true,
                    onclick: move |_| {
                        dashboard.write().dismiss_expired();
                        navigator.push(Route::Connect {});
                    },
                    "🔗 Reconnect Telegram"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    wide: true,
                    onclick: move |_| dashboard.write().dismiss_expired(),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Fixed;
    use pretty_assertions::assert_eq;

    #[test]
    fn opens_on_the_system_chat() {
        let state = DashboardState::default();
        assert_eq!(state.selected_chat, Some(777000));
        assert!(state.sidebar_open);
        assert!(!state.can_send());
    }

    #[test]
    fn blank_draft_is_not_sent() {
        let mut state = DashboardState {
            draft: "   ".to_string(),
            ..DashboardState::default()
        };
        assert!(!state.send());
        assert_eq!(state.draft, "   ");
    }

    #[test]
    fn sending_clears_the_composer() {
        let mut state = DashboardState {
            draft: "hello".to_string(),
            ..DashboardState::default()
        };
        assert!(state.send());
        assert_eq!(state.draft, "");
    }

    #[test]
    fn overlapping_refresh_is_rejected() {
        let mut state = DashboardState::default();
        assert!(state.begin_refresh());
        assert!(!state.begin_refresh());
        assert!(state.finish_refresh(&Fixed(false)));
        assert!(!state.refreshing);
        assert!(!state.session_expired);
    }

    #[test]
    fn expired_session_opens_dialog_until_dismissed() {
        let mut state = DashboardState::default();
        state.begin_refresh();
        assert!(!state.finish_refresh(&Fixed(true)));
        assert!(state.session_expired);
        state.dismiss_expired();
        assert!(!state.session_expired);
    }

    #[test]
    fn sidebar_toggles() {
        let mut state = DashboardState::default();
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
        state.toggle_sidebar();
        assert!(state.sidebar_open);
    }
}
