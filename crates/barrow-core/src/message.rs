//! Narrated event log.
//!
//! Every observable consequence of a turn ends up here as an ordered
//! (text, color) pair; the renderer shows the most recent window.

use serde::{Deserialize, Serialize};

use crate::data::colors::CLR_WHITE;

/// One narrated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub color: u8,
}

impl Message {
    pub fn new(text: impl Into<String>, color: u8) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// A plain white message.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, CLR_WHITE)
    }
}

/// Append-only message log with a bounded visible window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
    window: usize,
}

impl MessageLog {
    /// Create a log whose visible window holds `window` messages.
    pub fn new(window: usize) -> Self {
        Self {
            messages: Vec::new(),
            window,
        }
    }

    pub fn add(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent messages that fit the visible window.
    pub fn visible(&self) -> &[Message] {
        let start = self.messages.len().saturating_sub(self.window);
        &self.messages[start..]
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::colors::CLR_YELLOW;

    #[test]
    fn window_shows_most_recent() {
        let mut log = MessageLog::new(3);
        for i in 0..5 {
            log.add(Message::new(format!("msg {i}"), CLR_YELLOW));
        }
        assert_eq!(log.len(), 5);
        let visible: Vec<_> = log.visible().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(visible, ["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn window_smaller_than_log() {
        let mut log = MessageLog::new(6);
        log.add(Message::plain("hello"));
        assert_eq!(log.visible().len(), 1);
    }
}
