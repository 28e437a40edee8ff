//! Calendar invite stubs
//!
//! Nothing here talks to a real calendar service; issuing an invite or adding
//! an event only produces a record and a log line.

use crate::storage::{Event, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar / chat platform an invite is sent through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarPlatform {
    /// Microsoft Outlook
    Outlook,
    /// Google Calendar
    GoogleCalendar,
    /// Slack
    Slack,
    /// Microsoft Teams
    Teams,
}

impl fmt::Display for CalendarPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarPlatform::Outlook => "Outlook",
            CalendarPlatform::GoogleCalendar => "Google Calendar",
            CalendarPlatform::Slack => "Slack",
            CalendarPlatform::Teams => "Teams",
        };
        f.write_str(name)
    }
}

/// Invite to meet a matched colleague
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInvite {
    /// Platform used
    pub platform: CalendarPlatform,
    /// Free-text time, e.g. "Thu 12:30 PM"
    pub time: String,
    /// Display name of the invitee
    pub with: String,
    /// Unix milliseconds the invite was issued at
    pub issued_at: i64,
}

impl CalendarInvite {
    pub(crate) fn issue(platform: CalendarPlatform, time: &str, with: &Profile) -> Self {
        tracing::info!(
            "{} invite created for {} with {} (stub)",
            platform,
            time,
            with.name
        );
        Self {
            platform,
            time: time.to_string(),
            with: with.name.clone(),
            issued_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Result of asking for a match invite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteOutcome {
    /// No mutually matched thread yet
    Unavailable,
    /// Invite was issued
    Issued(CalendarInvite),
}

impl InviteOutcome {
    /// Whether an invite was issued
    pub fn is_issued(&self) -> bool {
        matches!(self, InviteOutcome::Issued(_))
    }
}

/// An event added to the user's own calendar from the events panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Platform used
    pub platform: CalendarPlatform,
    /// Event ID
    pub event_id: String,
    /// Event title
    pub title: String,
    /// Free-text time
    pub when: String,
}

/// Add a listed event to the user's calendar (stub)
///
/// Unlike match invites this needs no mutual match.
pub fn add_event_to_calendar(platform: CalendarPlatform, event: &Event) -> CalendarEntry {
    tracing::info!(
        "{} calendar: added {} ({}) (stub)",
        platform,
        event.name,
        event.when
    );
    CalendarEntry {
        platform,
        event_id: event.id.clone(),
        title: event.name.clone(),
        when: event.when.clone(),
    }
}
