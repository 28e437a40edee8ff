// Thread Tests - Testing Thread and Message structs

use crate::pool::seed_candidates;
use crate::storage::{Message, Sender, Thread, MATCH_GREETING};

#[test]
fn test_pending_thread() {
    let thread = Thread::pending(seed_candidates()[1].clone());

    assert_eq!(thread.with.name, "Sam Lee");
    assert!(!thread.matched);
    assert!(thread.messages.is_empty());
    assert_eq!(thread.status_text(), Some("Waiting for mutual match…"));
}

#[test]
fn test_matched_thread_is_seeded_with_greeting() {
    let thread = Thread::matched(seed_candidates()[1].clone());

    assert!(thread.matched);
    assert_eq!(thread.messages.len(), 1);
    assert_eq!(thread.messages[0].sender, Sender::Peer("Sam Lee".to_string()));
    assert_eq!(thread.messages[0].text, MATCH_GREETING);
    assert!(!thread.messages[0].is_mine());
    assert!(thread.status_text().is_none());
}

#[test]
fn test_append_message() {
    let mut thread = Thread::matched(seed_candidates()[0].clone());
    thread.append_message(Message::new(Sender::Me, "Thursday works"));

    assert_eq!(thread.messages.len(), 2);
    assert!(thread.messages[1].is_mine());
    assert!(thread.messages[1].timestamp >= thread.messages[0].timestamp);
}

#[test]
fn test_sender_labels() {
    assert_eq!(Sender::Me.label(), "You");
    assert_eq!(Sender::Peer("Priya Shah".to_string()).to_string(), "Priya Shah");
}
