use crate::calendar::*;
use crate::storage::AppState;

#[test]
fn test_platform_display() {
    assert_eq!(CalendarPlatform::Outlook.to_string(), "Outlook");
    assert_eq!(CalendarPlatform::GoogleCalendar.to_string(), "Google Calendar");
    assert_eq!(CalendarPlatform::Slack.to_string(), "Slack");
    assert_eq!(CalendarPlatform::Teams.to_string(), "Teams");
}

#[test]
fn test_add_event_to_calendar_needs_no_match() {
    let state = AppState::new();
    let event = state.get_event("e2").expect("seed event");

    let entry = add_event_to_calendar(CalendarPlatform::Slack, event);

    assert_eq!(entry.platform, CalendarPlatform::Slack);
    assert_eq!(entry.event_id, "e2");
    assert_eq!(entry.title, "Tuesday 5k Run");
    assert_eq!(entry.when, "Tue 6:30 PM");
}

#[test]
fn test_invite_outcome_is_issued() {
    assert!(!InviteOutcome::Unavailable.is_issued());
}

#[test]
fn test_platform_serialization() {
    let json = serde_json::to_string(&CalendarPlatform::GoogleCalendar).expect("serialize");
    let back: CalendarPlatform = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, CalendarPlatform::GoogleCalendar);
}
