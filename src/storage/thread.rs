//! The single active match conversation

use crate::storage::message::{Message, Sender};
use crate::storage::profile::Profile;
use serde::{Deserialize, Serialize};

/// Opening line sent by the other side once a match is confirmed
pub const MATCH_GREETING: &str = "It's a match! Want to grab lunch this week?";

/// Conversation with one liked colleague
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// The colleague this thread is with
    pub with: Profile,
    /// Mutual match confirmed
    pub matched: bool,
    /// Messages, oldest first
    pub messages: Vec<Message>,
}

impl Thread {
    /// Thread opened by a like, still waiting for the other side
    pub fn pending(with: Profile) -> Self {
        Self {
            with,
            matched: false,
            messages: Vec::new(),
        }
    }

    /// Fresh thread for a confirmed match, seeded with the greeting
    pub fn matched(with: Profile) -> Self {
        let greeting = Message::new(Sender::Peer(with.name.clone()), MATCH_GREETING);
        Self {
            with,
            matched: true,
            messages: vec![greeting],
        }
    }

    /// Append a message to this thread
    pub fn append_message(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    /// Status line shown above the messages, if any
    pub fn status_text(&self) -> Option<&'static str> {
        if self.matched {
            None
        } else {
            Some("Waiting for mutual match…")
        }
    }
}
