//! Company and community events

use serde::{Deserialize, Serialize};

/// An event listed on the employee events panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID
    pub id: String,
    /// Title
    pub name: String,
    /// Free-text time, e.g. "Thu 12:30 PM"
    pub when: String,
    /// Venue
    pub location: String,
    /// Attendee display names
    pub attendees: Vec<String>,
    /// Organised by the company (vs. community-led)
    pub company_sponsored: bool,
}

impl Event {
    /// Create an event with a fresh ID and no attendees
    pub fn new(name: &str, when: &str, location: &str, company_sponsored: bool) -> Self {
        Self {
            id: format!("e{}", uuid::Uuid::new_v4().simple()),
            name: name.to_string(),
            when: when.to_string(),
            location: location.to_string(),
            attendees: Vec::new(),
            company_sponsored,
        }
    }
}

/// Company vs. community split of the event list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMix {
    /// Company sponsored events
    pub company: usize,
    /// Community-led events
    pub community: usize,
}
