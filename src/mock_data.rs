/// Chat id of Telegram's official service account.
pub const SYSTEM_CHAT_ID: i64 = 777000;

const WELCOME_TEXT: &str = "Welcome to Telegram! This is the official Telegram account. Here you'll receive important updates and notifications about your account.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::Sent,
        DeliveryStatus::Delivered,
        DeliveryStatus::Read,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Read => "Read",
        }
    }

    pub fn ticks(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "✓",
            DeliveryStatus::Delivered | DeliveryStatus::Read => "✓✓",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub id: i64,
    pub name: &'static str,
    pub avatar: &'static str,
    pub last_message: &'static str,
    pub timestamp: &'static str,
    pub unread: u32,
    pub online: bool,
    pub is_system: bool,
    /// How long ago the last message arrived.
    pub received_minutes_ago: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub chat_id: i64,
    pub text: &'static str,
    pub timestamp: &'static str,
    pub is_own: bool,
    pub status: Option<DeliveryStatus>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuditEntry {
    pub id: u64,
    pub action: &'static str,
    pub minutes_ago: i64,
    pub succeeded: bool,
    pub details: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub id: u64,
    pub device: &'static str,
    pub location: &'static str,
    pub last_active: &'static str,
    pub current: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

const CHATS: &[Chat] = &[Chat {
    id: SYSTEM_CHAT_ID,
    name: "Telegram",
    avatar: "T",
    last_message: "Welcome to Telegram! This is the official Telegram account...",
    timestamp: "32m",
    unread: 0,
    online: true,
    is_system: true,
    received_minutes_ago: 32,
}];

const MESSAGES: &[Message] = &[Message {
    id: 1,
    chat_id: SYSTEM_CHAT_ID,
    text: WELCOME_TEXT,
    timestamp: "14:23",
    is_own: false,
    status: None,
}];

const AUDIT_LOG: &[AuditEntry] = &[
    AuditEntry {
        id: 1,
        action: "Telegram Connected",
        minutes_ago: 120,
        succeeded: true,
        details: "Successfully linked Telegram account",
    },
    AuditEntry {
        id: 2,
        action: "Account Unlocked",
        minutes_ago: 30,
        succeeded: true,
        details: "SMS verification completed",
    },
    AuditEntry {
        id: 3,
        action: "Login Attempt",
        minutes_ago: 15,
        succeeded: true,
        details: "Logged in from 95.214.xxx.xxx",
    },
];

const SESSIONS: &[Session] = &[Session {
    id: 1,
    device: "Desktop - Chrome",
    location: "Tashkent, Uzbekistan",
    last_active: "Active now",
    current: true,
}];

pub const LATEST_MESSAGES: &[&str] = &[
    "📩 Your Telegram code: 12345",
    "🔐 Security code: 67890",
    "✅ Welcome to Telegram!",
    "📱 Your verification code is: 54321",
    "🎉 Account activated successfully",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "💬",
        title: "Real-time Sync",
        description: "Messages appear instantly with zero delay",
        gradient: "gradient-blue-cyan",
    },
    Feature {
        icon: "🛡",
        title: "Secure & Private",
        description: "End-to-end encryption keeps your data safe",
        gradient: "gradient-purple-pink",
    },
    Feature {
        icon: "🌐",
        title: "Access Anywhere",
        description: "Use from any device, anytime, anywhere",
        gradient: "gradient-indigo-purple",
    },
];

pub fn all_chats() -> Vec<Chat> {
    CHATS.to_vec()
}

pub fn get_chat(id: i64) -> Option<Chat> {
    CHATS.iter().find(|chat| chat.id == id).cloned()
}

pub fn messages_for(chat_id: i64) -> Vec<Message> {
    MESSAGES
        .iter()
        .filter(|message| message.chat_id == chat_id)
        .cloned()
        .collect()
}

/// Newest entries last, as they were recorded.
pub fn audit_log() -> Vec<AuditEntry> {
    let mut entries = AUDIT_LOG.to_vec();
    entries.sort_by(|a, b| b.minutes_ago.cmp(&a.minutes_ago));
    entries
}

pub fn sessions() -> Vec<Session> {
    SESSIONS.to_vec()
}

/// Case-insensitive match on chat name or last message.
pub fn filter_chats(chats: &[Chat], query: &str) -> Vec<Chat> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return chats.to_vec();
    }
    chats
        .iter()
        .filter(|chat| {
            chat.name.to_lowercase().contains(&needle)
                || chat.last_message.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn system_chat_is_the_only_chat() {
        let chats = all_chats();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].id, 777000);
        assert!(chats[0].is_system);
        assert_eq!(messages_for(SYSTEM_CHAT_ID).len(), 1);
        assert!(messages_for(42).is_empty());
    }

    #[test]
    fn audit_log_is_chronological() {
        let actions: Vec<&str> = audit_log().iter().map(|entry| entry.action).collect();
        assert_eq!(actions, vec!["Telegram Connected", "Account Unlocked", "Login Attempt"]);
    }

    #[test]
    fn single_current_session() {
        let sessions = sessions();
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].current);
    }

    #[test]
    fn chat_filter_ignores_case() {
        let chats = all_chats();
        assert_eq!(filter_chats(&chats, "TELEGRAM").len(), 1);
        assert_eq!(filter_chats(&chats, "  ").len(), 1);
        assert!(filter_chats(&chats, "alice").is_empty());
    }
}
