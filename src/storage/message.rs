//! Conversation messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who wrote a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// The signed-in user
    Me,
    /// The matched colleague, by display name
    Peer(String),
}

impl Sender {
    /// Label shown next to the message
    pub fn label(&self) -> &str {
        match self {
            Sender::Me => "You",
            Sender::Peer(name) => name,
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A message in the active thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author
    pub sender: Sender,
    /// Body text, already trimmed
    pub text: String,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Whether the signed-in user wrote this message
    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}
