//! Match engine
//!
//! This module owns the single active conversation and the like → match
//! state machine:
//! - `Idle` until the first like
//! - `Pending` from a like until its confirmation fires
//! - `Matched` once the other side "connects back"
//!
//! A like never waits for the other side. It opens a pending thread right
//! away and schedules a confirmation task that fires after the configured
//! delay, standing in for the remote party's reciprocal like. Calendar
//! invites are only issued from a matched thread.

use crate::calendar::{CalendarInvite, CalendarPlatform, InviteOutcome};
use crate::storage::{Message, Profile, ResolutionPolicy, Sender, Settings, Thread};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Where the active conversation stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No thread yet
    Idle,
    /// Liked, waiting for the other side
    Pending,
    /// Mutual match confirmed
    Matched,
}

/// Notifications emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A like was recorded and is waiting for confirmation
    Pending {
        /// Name of the liked colleague
        name: String,
    },
    /// A confirmation fired and the thread is now matched
    ConnectionEstablished {
        /// The matched colleague
        profile: Box<Profile>,
    },
    /// A confirmation fired for a like that a newer like replaced; ignored
    Superseded {
        /// Name of the colleague whose confirmation was dropped
        name: String,
    },
}

#[derive(Debug, Default)]
pub(crate) struct MatchState {
    pub(crate) thread: Option<Thread>,
    pub(crate) pending_label: Option<String>,
    /// Bumped by every like; confirmations carry the value they were issued under
    pub(crate) generation: u64,
}

type ConfirmationList = Vec<(u64, JoinHandle<()>)>;

/// Scheduled confirmation tasks, tagged with their like generation
///
/// Kept outside the async state so `Drop` can always reach them.
type Confirmations = Arc<StdMutex<ConfirmationList>>;

fn lock_confirmations(
    confirmations: &StdMutex<ConfirmationList>,
) -> MutexGuard<'_, ConfirmationList> {
    confirmations.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Like / match state machine over the single active thread
///
/// Cheap reads return clones; only the engine mutates the thread.
#[derive(Debug)]
pub struct MatchEngine {
    state: Arc<Mutex<MatchState>>,
    confirmations: Confirmations,
    events: broadcast::Sender<MatchEvent>,
    delay: Duration,
    policy: ResolutionPolicy,
    notifications: bool,
}

impl MatchEngine {
    /// Create an engine using the delay and policy from `settings`
    pub fn new(settings: &Settings) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(MatchState::default())),
            confirmations: Arc::new(StdMutex::new(Vec::new())),
            events,
            delay: settings.match_delay(),
            policy: settings.resolution_policy,
            notifications: settings.enable_notifications,
        }
    }

    /// Subscribe to engine notifications
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.events.subscribe()
    }

    /// Confirmation delay in use
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolution policy in use
    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Like `profile`
    ///
    /// Replaces the active thread with a pending one and records the pending
    /// label at once, then schedules the confirmation. Must be called from
    /// within a tokio runtime.
    pub async fn like(&self, profile: Profile) {
        let mut state = self.state.lock().await;

        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;

        {
            let mut confirmations = lock_confirmations(&self.confirmations);
            match self.policy {
                ResolutionPolicy::LatestLikeWins => {
                    for (stale, task) in confirmations.drain(..) {
                        debug!("Cancelling confirmation for like #{}", stale);
                        task.abort();
                    }
                }
                ResolutionPolicy::LastConfirmationWins => {
                    confirmations.retain(|(_, task)| !task.is_finished());
                }
            }
        }

        info!("Liked {} ({}), like #{}", profile.name, profile.id, generation);
        state.pending_label = Some(profile.name.clone());
        state.thread = Some(Thread::pending(profile.clone()));
        let _ = self.events.send(MatchEvent::Pending {
            name: profile.name.clone(),
        });

        let task = tokio::spawn(confirm_after_delay(
            self.state.clone(),
            self.confirmations.clone(),
            self.events.clone(),
            self.delay,
            self.policy,
            self.notifications,
            profile,
            generation,
        ));
        lock_confirmations(&self.confirmations).push((generation, task));
    }

    /// Append a message from the user to the active thread
    ///
    /// Returns false (and does nothing) if the text is blank or there is no
    /// thread. Pending threads accept messages too.
    pub async fn send_message(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let mut state = self.state.lock().await;
        match state.thread.as_mut() {
            Some(thread) => {
                thread.append_message(Message::new(Sender::Me, text));
                debug!("Sent message to {}", thread.with.name);
                true
            }
            None => false,
        }
    }

    /// Issue a calendar invite to the matched colleague
    ///
    /// Only a mutually matched thread can invite; anything else reports
    /// [`InviteOutcome::Unavailable`].
    pub async fn request_calendar_invite(
        &self,
        platform: CalendarPlatform,
        time: &str,
    ) -> InviteOutcome {
        let state = self.state.lock().await;
        match state.thread.as_ref() {
            Some(thread) if thread.matched => {
                InviteOutcome::Issued(CalendarInvite::issue(platform, time, &thread.with))
            }
            _ => {
                debug!("Calendar invite requested before mutual match");
                InviteOutcome::Unavailable
            }
        }
    }

    /// Label for the invite button
    pub async fn invite_status_label(&self, platform: CalendarPlatform) -> String {
        let state = self.state.lock().await;
        match state.thread.as_ref() {
            Some(thread) if thread.matched => format!("Send {} calendar invite", platform),
            _ => "Invite available after mutual match".to_string(),
        }
    }

    /// Snapshot of the active thread
    pub async fn thread(&self) -> Option<Thread> {
        self.state.lock().await.thread.clone()
    }

    /// Name of the colleague whose like is waiting for confirmation
    pub async fn pending_label(&self) -> Option<String> {
        self.state.lock().await.pending_label.clone()
    }

    /// "Waiting for X to connect back…" while a like is pending
    pub async fn pending_status_text(&self) -> Option<String> {
        self.pending_label()
            .await
            .map(|name| format!("Waiting for {} to connect back…", name))
    }

    /// Current phase of the active thread
    pub async fn phase(&self) -> MatchPhase {
        match self.state.lock().await.thread.as_ref() {
            None => MatchPhase::Idle,
            Some(thread) if thread.matched => MatchPhase::Matched,
            Some(_) => MatchPhase::Pending,
        }
    }

    /// Number of confirmations scheduled but not yet fired
    pub fn outstanding_confirmations(&self) -> usize {
        lock_confirmations(&self.confirmations)
            .iter()
            .filter(|(_, task)| !task.is_finished())
            .count()
    }

    /// Abort every outstanding confirmation
    pub fn shutdown(&self) {
        let count = abort_all(&self.confirmations);
        if count > 0 {
            info!("Match engine stopped, {} confirmation(s) aborted", count);
        }
    }

    #[cfg(test)]
    pub(crate) fn shared_state(&self) -> Arc<Mutex<MatchState>> {
        self.state.clone()
    }
}

impl Drop for MatchEngine {
    fn drop(&mut self) {
        abort_all(&self.confirmations);
    }
}

fn abort_all(confirmations: &StdMutex<ConfirmationList>) -> usize {
    let mut confirmations = lock_confirmations(confirmations);
    let count = confirmations.len();
    for (_, task) in confirmations.drain(..) {
        task.abort();
    }
    count
}

/// Confirmation task for one like
#[allow(clippy::too_many_arguments)]
async fn confirm_after_delay(
    state: Arc<Mutex<MatchState>>,
    confirmations: Confirmations,
    events: broadcast::Sender<MatchEvent>,
    delay: Duration,
    policy: ResolutionPolicy,
    notifications: bool,
    profile: Profile,
    generation: u64,
) {
    tokio::time::sleep(delay).await;

    let mut state = state.lock().await;
    lock_confirmations(&confirmations).retain(|(g, _)| *g != generation);

    if policy == ResolutionPolicy::LatestLikeWins && generation != state.generation {
        debug!(
            "Ignoring confirmation for {} (like #{} superseded by #{})",
            profile.name, generation, state.generation
        );
        let _ = events.send(MatchEvent::Superseded { name: profile.name });
        return;
    }

    info!("Mutual match with {} ({})", profile.name, profile.id);
    state.thread = Some(Thread::matched(profile.clone()));
    state.pending_label = None;

    if notifications {
        let _ = events.send(MatchEvent::ConnectionEstablished {
            profile: Box::new(profile),
        });
    }
}
