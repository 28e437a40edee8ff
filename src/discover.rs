//! Discover session
//!
//! Wires the pieces together the way the swipe view drives them: a filter
//! change recomputes the deck, the cursor keeps its position (reduced modulo
//! the new length), and like / pass act on whatever is current.

use crate::deck::DeckCursor;
use crate::matching::MatchEngine;
use crate::pool::{CandidatePool, Filter, ProfileSynthesizer, RandomProfileGenerator};
use crate::storage::{AppState, Profile, SelfProfile, Settings};
use std::collections::BTreeSet;
use tracing::debug;

/// Swipe-through-colleagues session
#[derive(Debug)]
pub struct DiscoverSession<S: ProfileSynthesizer = RandomProfileGenerator> {
    pool: CandidatePool<S>,
    filter: Filter,
    deck: Vec<Profile>,
    cursor: DeckCursor,
    engine: MatchEngine,
}

impl DiscoverSession<RandomProfileGenerator> {
    /// Session over the built-in seed candidates
    pub fn new(settings: &Settings) -> Self {
        Self::with_pool(CandidatePool::new(settings), settings)
    }

    /// Session configured from the shared application state
    pub fn from_app(app: &AppState) -> Self {
        Self::new(&app.settings)
    }
}

impl<S: ProfileSynthesizer> DiscoverSession<S> {
    /// Session over a custom pool
    pub fn with_pool(mut pool: CandidatePool<S>, settings: &Settings) -> Self {
        let filter = Filter::new();
        let deck = pool.get_candidates(&filter);
        Self {
            pool,
            filter,
            deck,
            cursor: DeckCursor::new(),
            engine: MatchEngine::new(settings),
        }
    }

    /// Active filter
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Current deck snapshot
    pub fn deck(&self) -> &[Profile] {
        &self.deck
    }

    /// Cursor state
    pub fn cursor(&self) -> DeckCursor {
        self.cursor
    }

    /// The match engine, for reading the thread and messaging
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Candidate pool
    pub fn pool(&self) -> &CandidatePool<S> {
        &self.pool
    }

    /// Replace the whole filter and rebuild the deck
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.refresh();
    }

    /// Change the free-text query
    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
        self.refresh();
    }

    /// Replace the selected interests
    pub fn set_interests<I, T>(&mut self, interests: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.filter.interests = interests.into_iter().map(Into::into).collect::<BTreeSet<_>>();
        self.refresh();
    }

    /// Single-choice interest dropdown; `None` means all interests
    pub fn select_interest(&mut self, interest: Option<&str>) {
        self.filter.interests.clear();
        if let Some(interest) = interest.filter(|i| !i.is_empty()) {
            self.filter.interests.insert(interest.to_string());
        }
        self.refresh();
    }

    /// Add or remove one interest from the selection
    pub fn toggle_interest(&mut self, interest: &str) {
        if !self.filter.interests.remove(interest) {
            self.filter.interests.insert(interest.to_string());
        }
        self.refresh();
    }

    /// Rebuild the deck from the current filter
    ///
    /// Padding may produce different filler profiles each time.
    pub fn refresh(&mut self) {
        self.deck = self.pool.get_candidates(&self.filter);
        debug!(
            "Deck rebuilt: {} candidates for query {:?}, interests {:?}",
            self.deck.len(),
            self.filter.query,
            self.filter.interests
        );
    }

    /// The profile being shown
    pub fn current(&self) -> Option<&Profile> {
        self.cursor.current(&self.deck)
    }

    /// Interests the current profile shares with `me`
    pub fn shared_interests(&self, me: &SelfProfile) -> Vec<String> {
        self.current()
            .map(|profile| me.shared_interests(profile))
            .unwrap_or_default()
    }

    /// Skip the current profile; never touches the thread
    pub fn pass(&mut self) {
        if let Some(profile) = self.current() {
            debug!("Passed on {}", profile.name);
        }
        self.cursor.advance();
    }

    /// Like the current profile and move on
    ///
    /// Returns false without doing anything when the deck is empty.
    pub async fn like(&mut self) -> bool {
        let Some(profile) = self.current().cloned() else {
            return false;
        };
        self.engine.like(profile).await;
        self.cursor.advance();
        true
    }
}
