//! Application settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// What happens when several likes are waiting for confirmation at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Every confirmation overwrites the active thread when it fires.
    /// Nothing is cancelled; whichever fires last wins.
    #[default]
    LastConfirmationWins,
    /// Only the most recent like may resolve. Older outstanding
    /// confirmations are aborted and ignored if they fire anyway.
    LatestLikeWins,
}

/// Application settings
///
/// Stored as JSON. Missing fields fall back to the defaults so older
/// files keep loading.
///
/// # Example
/// ```rust,no_run
/// use cohesa::storage::Settings;
///
/// let mut settings = Settings::load("cohesa.json").expect("Failed to load");
/// settings.match_delay_ms = 250;
/// settings.save("cohesa.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay before a like is confirmed as a mutual match, in milliseconds
    pub match_delay_ms: u64,
    /// Below this many exact filter hits the deck gets padded
    pub min_exact_matches: usize,
    /// Length a padded deck is filled up to
    pub padded_deck_size: usize,
    /// Handling of overlapping pending likes
    pub resolution_policy: ResolutionPolicy,
    /// Emit connection notifications
    pub enable_notifications: bool,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Storage(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Storage(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file, creating parent directories
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Storage(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;

        std::fs::write(path, json)
            .map_err(|e| Error::Storage(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Check that the deck sizing is coherent
    pub fn validate(&self) -> Result<()> {
        if self.padded_deck_size == 0 {
            return Err(Error::InvalidSetting(
                "padded_deck_size must be greater than zero".to_string(),
            ));
        }
        if self.min_exact_matches > self.padded_deck_size {
            return Err(Error::InvalidSetting(format!(
                "min_exact_matches ({}) exceeds padded_deck_size ({})",
                self.min_exact_matches, self.padded_deck_size
            )));
        }
        Ok(())
    }

    /// Match confirmation delay
    pub fn match_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.match_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_delay_ms: 600,
            min_exact_matches: 5,
            padded_deck_size: 10,
            resolution_policy: ResolutionPolicy::default(),
            enable_notifications: true,
        }
    }
}
