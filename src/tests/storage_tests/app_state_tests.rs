// AppState Tests - Testing AppState struct and its list operations

use crate::storage::{AppState, EventMix, MeetingMode, Settings};

#[test]
fn test_app_state_creation() {
    let state = AppState::new();

    assert_eq!(state.me.name, "Alex Kim");
    assert_eq!(state.events.len(), 3);
    assert_eq!(state.groups.len(), 2);
    assert_eq!(state.requests.len(), 2);
    assert_eq!(state.settings, Settings::default());
}

#[test]
fn test_save_profile_replaces_snapshot() {
    let mut state = AppState::new();
    let before = state.me.clone();

    let mut draft = state.me.draft();
    draft.profile.team = "IBD – TMT".to_string();
    draft.set_interests_csv("Chess, Coffee");

    let saved = state.save_profile(draft).clone();
    assert_eq!(saved.team, "IBD – TMT");
    assert_eq!(state.me, saved);
    assert_ne!(state.me, before);
    assert_eq!(state.me.interests, vec!["Chess", "Coffee"]);
}

#[test]
fn test_create_event_prepends() {
    let mut state = AppState::new();

    let id = state
        .create_event("Chess Club", "Wed 6:00 PM", "Level 3 lounge", false)
        .map(|e| e.id.clone())
        .expect("event created");

    assert_eq!(state.events.len(), 4);
    assert_eq!(state.events[0].id, id);
    assert!(state.events[0].attendees.is_empty());
    assert!(!state.events[0].company_sponsored);
    assert!(state.get_event(&id).is_some());
}

#[test]
fn test_create_event_requires_all_fields() {
    let mut state = AppState::new();

    assert!(state.create_event("", "Wed", "Lobby", true).is_none());
    assert!(state.create_event("Chess", "  ", "Lobby", true).is_none());
    assert!(state.create_event("Chess", "Wed", "", true).is_none());
    assert_eq!(state.events.len(), 3);
}

#[test]
fn test_event_ids_are_unique() {
    let mut state = AppState::new();
    let a = state.create_event("A", "Mon", "Here", true).map(|e| e.id.clone());
    let b = state.create_event("A", "Mon", "Here", true).map(|e| e.id.clone());
    assert_ne!(a, b);
}

#[test]
fn test_event_mix() {
    let mut state = AppState::new();
    assert_eq!(
        state.event_mix(),
        EventMix {
            company: 1,
            community: 2
        }
    );

    state.create_event("Town hall", "Fri 4:00 PM", "Auditorium", true);
    assert_eq!(state.event_mix().company, 2);
}

#[test]
fn test_submit_request() {
    let mut state = AppState::new();

    let request = state
        .submit_request("Dads of first-years – NYC", MeetingMode::Virtual)
        .cloned()
        .expect("request submitted");

    assert_eq!(state.requests.len(), 3);
    assert_eq!(state.requests[0], request);
    assert!(state.submit_request("   ", MeetingMode::InPerson).is_none());
    assert_eq!(state.requests.len(), 3);
}

#[test]
fn test_approve_request_creates_empty_group() {
    let mut state = AppState::new();

    let group = state.approve_request("r1").cloned().expect("group created");

    assert_eq!(group.name, "Evening wellness circle – FiDi");
    assert_eq!(group.mode, MeetingMode::InPerson);
    assert!(group.members.is_empty());

    assert_eq!(state.groups.len(), 3);
    assert_eq!(state.groups[0], group);
    assert_eq!(state.requests.len(), 1);
    assert!(state.requests.iter().all(|r| r.id != "r1"));
}

#[test]
fn test_approve_unknown_request_is_noop() {
    let mut state = AppState::new();
    assert!(state.approve_request("r404").is_none());
    assert_eq!(state.groups.len(), 2);
    assert_eq!(state.requests.len(), 2);
}

#[test]
fn test_decline_request_only_removes() {
    let mut state = AppState::new();

    assert!(state.decline_request("r2"));
    assert_eq!(state.requests.len(), 1);
    assert_eq!(state.groups.len(), 2);

    assert!(!state.decline_request("r2"));
    assert_eq!(state.requests.len(), 1);
}

#[test]
fn test_join_group() {
    let state = AppState::new();
    assert!(state.join_group("g1"));
    assert!(!state.join_group("g9"));
}

#[test]
fn test_meeting_mode_display() {
    assert_eq!(MeetingMode::InPerson.to_string(), "In-person");
    assert_eq!(MeetingMode::Virtual.to_string(), "Virtual");
    assert_eq!(MeetingMode::default(), MeetingMode::Virtual);
}
