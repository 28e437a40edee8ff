//! In-memory storage module
//!
//! This module holds the data the app works on:
//! - Candidate and self profiles
//! - The active match thread and its messages
//! - Events, partner groups and group requests
//! - Configuration
//!
//! The module is organized into submodules:
//! - `profile` - Profiles, photos, prompts and the profile editor draft
//! - `message` - Message structures and senders
//! - `thread` - The single active match conversation
//! - `event` - Company and community events
//! - `group` - Partner group chats and requests
//! - `settings` - Application settings and configuration
//! - `app_state` - Shared application state and its list operations

// Submodules
pub mod app_state;
pub mod event;
pub mod group;
pub mod message;
pub mod profile;
pub mod settings;
pub mod thread;

// Re-export commonly used types
pub use app_state::AppState;
pub use event::{Event, EventMix};
pub use group::{GroupRequest, MeetingMode, PartnerGroup};
pub use message::{Message, Sender};
pub use profile::{Photo, Profile, ProfileDraft, Prompt, SelfProfile};
pub use settings::{ResolutionPolicy, Settings};
pub use thread::{Thread, MATCH_GREETING};
