use std::time::{Duration, Instant};

/// How long the transient banner stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppState {
    Search,
    Results,
    Settings,
}

/// The three form inputs, in focus order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Keyword,
    ChannelId,
    Category,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Keyword => Self::ChannelId,
            Self::ChannelId => Self::Category,
            Self::Category => Self::Keyword,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Keyword => Self::Category,
            Self::ChannelId => Self::Keyword,
            Self::Category => Self::ChannelId,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient status message, auto-dismissed by the tick loop.
#[derive(Debug)]
pub struct Banner {
    pub text: String,
    pub kind: MessageKind,
    pub shown_at: Instant,
}

impl Banner {
    pub fn new(text: String, kind: MessageKind) -> Self {
        Self {
            text,
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= MESSAGE_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_expires_after_the_ttl() {
        let fresh = Banner::new("Settings saved.".to_string(), MessageKind::Success);
        assert!(!fresh.expired());

        let aged = Banner {
            shown_at: Instant::now() - MESSAGE_TTL,
            ..fresh
        };
        assert!(aged.expired());
    }
}
