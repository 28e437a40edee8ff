//! Candidate and self-profile records

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Profile photo reference
///
/// Seed and synthesized profiles point at a hosted avatar. A photo uploaded
/// through the profile editor is kept as raw image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Photo {
    /// Hosted image URI
    Uri(String),
    /// Raw image data with its MIME type
    Data {
        /// MIME type, e.g. `image/png`
        mime: String,
        /// Image bytes
        bytes: Vec<u8>,
    },
}

impl Photo {
    /// Get a value usable as an image source (URI, or a base64 data URL)
    pub fn to_src(&self) -> String {
        match self {
            Photo::Uri(uri) => uri.clone(),
            Photo::Data { mime, bytes } => {
                format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
            }
        }
    }

    /// Whether this photo points at something
    pub fn is_set(&self) -> bool {
        match self {
            Photo::Uri(uri) => !uri.trim().is_empty(),
            Photo::Data { bytes, .. } => !bytes.is_empty(),
        }
    }
}

/// A colleague shown in the discover deck
///
/// Seed profiles and synthesized filler profiles share this one type.
/// `interests` keeps the order it was entered in and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique within a deck snapshot
    pub id: String,
    /// Display name
    pub name: String,
    /// Job title
    pub role: String,
    /// Team / division
    pub team: String,
    /// Office location
    pub location: String,
    /// School attended
    pub school: String,
    /// Free-text bio
    pub bio: String,
    /// Avatar
    pub photo: Photo,
    /// Interest tags
    pub interests: Vec<String>,
}

impl Profile {
    /// Text searched by the free-text discover query
    pub fn search_text(&self) -> String {
        [
            self.name.as_str(),
            self.role.as_str(),
            self.team.as_str(),
            self.location.as_str(),
            self.school.as_str(),
            self.bio.as_str(),
        ]
        .join(" ")
    }

    /// Whether the profile lists `interest`
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Initials for avatar placeholders ("Jordan Patel" -> "JP")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// A "prompt" question and the user's answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Question
    pub question: String,
    /// Answer
    pub answer: String,
}

impl Prompt {
    /// Create a prompt
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The signed-in user's own profile
///
/// Snapshots are immutable from the outside: edits go through a
/// [`ProfileDraft`] and are committed with `AppState::save_profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfProfile {
    /// Display name
    pub name: String,
    /// Job title
    pub role: String,
    /// Team / division
    pub team: String,
    /// Office location
    pub location: String,
    /// Avatar
    pub photo: Photo,
    /// School attended
    pub school: String,
    /// Degree
    pub degree: String,
    /// Graduation year, as entered
    pub grad_year: String,
    /// Interest tags
    pub interests: Vec<String>,
    /// Prompt answers
    pub prompts: Vec<Prompt>,
}

/// Number of fields counted by the profile completeness meter
const COMPLETION_FIELDS: usize = 8;

impl SelfProfile {
    /// Percentage of the headline fields that are filled in, rounded
    pub fn completion_percent(&self) -> u8 {
        let filled = [
            !self.name.trim().is_empty(),
            !self.role.trim().is_empty(),
            !self.team.trim().is_empty(),
            !self.location.trim().is_empty(),
            self.photo.is_set(),
            !self.school.trim().is_empty(),
            !self.degree.trim().is_empty(),
            !self.grad_year.trim().is_empty(),
        ]
        .iter()
        .filter(|filled| **filled)
        .count();

        ((filled as f64 / COMPLETION_FIELDS as f64) * 100.0).round() as u8
    }

    /// Interests of `candidate` that this user shares, in the candidate's order
    pub fn shared_interests(&self, candidate: &Profile) -> Vec<String> {
        candidate
            .interests
            .iter()
            .filter(|i| self.interests.contains(i))
            .cloned()
            .collect()
    }

    /// Start editing a copy of this profile
    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            profile: self.clone(),
        }
    }
}

/// Working copy of a [`SelfProfile`] being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    /// The edited fields
    pub profile: SelfProfile,
}

impl ProfileDraft {
    /// Replace interests from a comma separated string
    ///
    /// Entries are trimmed and blanks dropped. Order and duplicates are kept.
    pub fn set_interests_csv(&mut self, csv: &str) {
        self.profile.interests = csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Comma separated view of the interests, as shown in the editor
    pub fn interests_csv(&self) -> String {
        self.profile.interests.join(", ")
    }

    /// Append an empty prompt and return its index
    pub fn add_prompt(&mut self) -> usize {
        self.profile.prompts.push(Prompt::default());
        self.profile.prompts.len() - 1
    }

    /// Edit an existing prompt; returns false if `index` is out of range
    pub fn set_prompt(&mut self, index: usize, question: &str, answer: &str) -> bool {
        match self.profile.prompts.get_mut(index) {
            Some(prompt) => {
                prompt.question = question.to_string();
                prompt.answer = answer.to_string();
                true
            }
            None => false,
        }
    }

    /// Use uploaded image bytes as the photo
    pub fn set_photo_data(&mut self, mime: &str, bytes: Vec<u8>) {
        self.profile.photo = Photo::Data {
            mime: mime.to_string(),
            bytes,
        };
    }

    /// Finish editing
    pub fn into_profile(self) -> SelfProfile {
        self.profile
    }
}
