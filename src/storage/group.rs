//! Partner group chats and the requests that create them

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a group meets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingMode {
    /// Online only
    #[default]
    Virtual,
    /// Meets in person
    InPerson,
}

impl fmt::Display for MeetingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetingMode::Virtual => f.write_str("Virtual"),
            MeetingMode::InPerson => f.write_str("In-person"),
        }
    }
}

/// A partner group chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerGroup {
    /// Group ID
    pub id: String,
    /// Group name
    pub name: String,
    /// Member display names
    pub members: Vec<String>,
    /// Meeting mode
    pub mode: MeetingMode,
}

impl PartnerGroup {
    /// Create an empty group from an approved request
    pub fn from_request(request: &GroupRequest) -> Self {
        Self {
            id: format!("g{}", uuid::Uuid::new_v4().simple()),
            name: request.topic.clone(),
            members: Vec::new(),
            mode: request.mode,
        }
    }
}

/// A pending request for a new group chat, awaiting HR approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequest {
    /// Request ID
    pub id: String,
    /// Proposed topic, becomes the group name
    pub topic: String,
    /// Proposed meeting mode
    pub mode: MeetingMode,
}

impl GroupRequest {
    /// Create a request with a fresh ID
    pub fn new(topic: &str, mode: MeetingMode) -> Self {
        Self {
            id: format!("r{}", uuid::Uuid::new_v4().simple()),
            topic: topic.to_string(),
            mode,
        }
    }
}
