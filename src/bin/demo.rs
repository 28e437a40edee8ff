//! Cohesa demo
//!
//! Headless walkthrough of the discover flow: filter the deck, pass, like,
//! wait for the mutual match, chat and send a calendar invite.

use anyhow::Context;
use cohesa::calendar::{add_event_to_calendar, CalendarPlatform};
use cohesa::discover::DiscoverSession;
use cohesa::matching::MatchEvent;
use cohesa::pool::interest_palette;
use cohesa::storage::{AppState, MeetingMode, Settings};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cohesa::init();

    let settings_path =
        std::env::var("COHESA_SETTINGS").unwrap_or_else(|_| "cohesa.json".to_string());
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path))?;

    let mut app = AppState::with_settings(settings);
    let mut session = DiscoverSession::from_app(&app);
    let mut events = session.engine().subscribe();

    let palette = interest_palette(session.pool().seed(), &app.me);
    println!("Interests: {}", palette.join(", "));

    session.select_interest(Some("Coffee"));
    println!("{} candidates like coffee", session.deck().len());

    if let Some(current) = session.current() {
        println!("Passing on {}", current.name);
    }
    session.pass();

    if let Some(current) = session.current() {
        let shared = session.shared_interests(&app.me);
        println!("Connecting with {} (shared: {})", current.name, shared.join(", "));
    }
    session.like().await;

    let engine = session.engine();
    if let Some(status) = engine.pending_status_text().await {
        println!("{}", status);
    }
    println!(
        "Invite button: {}",
        engine.invite_status_label(CalendarPlatform::Outlook).await
    );

    if app.settings.enable_notifications {
        loop {
            match events.recv().await.context("match engine closed")? {
                MatchEvent::ConnectionEstablished { profile } => {
                    println!("New connection! You and {} are now connected.", profile.name);
                    break;
                }
                MatchEvent::Pending { .. } | MatchEvent::Superseded { .. } => {}
            }
        }
    } else {
        tokio::time::sleep(engine.delay() + Duration::from_millis(50)).await;
    }

    engine.send_message("Lunch Thursday?").await;
    let invite = engine
        .request_calendar_invite(CalendarPlatform::Outlook, "Thu 12:30 PM")
        .await;
    println!("Invite issued: {}", invite.is_issued());

    if let Some(thread) = engine.thread().await {
        for message in &thread.messages {
            println!("{}: {}", message.sender, message.text);
        }
    }

    if let Some(event) = app.events.first() {
        add_event_to_calendar(CalendarPlatform::Slack, event);
    }

    let request_id = app
        .submit_request("Dads of first-years – NYC", MeetingMode::Virtual)
        .map(|r| r.id.clone());
    if let Some(id) = request_id {
        app.approve_request(&id);
    }
    println!(
        "{} groups, {} pending requests",
        app.groups.len(),
        app.requests.len()
    );

    engine.shutdown();
    Ok(())
}
