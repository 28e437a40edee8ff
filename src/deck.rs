//! Deck cursor
//!
//! The discover deck is an endless cyclic tour: the cursor only ever moves
//! forward and is reduced modulo the deck length on every read, so a
//! profile comes around again after wrapping and a deck that changes length
//! underneath the cursor needs no clamping.

use crate::storage::Profile;
use serde::{Deserialize, Serialize};

/// Position in the cyclic discover deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCursor {
    position: usize,
}

impl DeckCursor {
    /// Cursor at the start of the deck
    pub fn new() -> Self {
        Self::default()
    }

    /// The profile under the cursor, or `None` for an empty deck
    pub fn current<'a>(&self, deck: &'a [Profile]) -> Option<&'a Profile> {
        if deck.is_empty() {
            return None;
        }
        deck.get(self.position % deck.len())
    }

    /// Index into `deck` the cursor currently points at
    pub fn index_in(&self, deck_len: usize) -> Option<usize> {
        (deck_len > 0).then(|| self.position % deck_len)
    }

    /// Move to the next profile, after a like or a pass alike
    pub fn advance(&mut self) {
        self.position = self.position.wrapping_add(1);
    }

    /// Raw position (number of decisions made)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Back to the start
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
