//! Candidate pool module
//!
//! This module supplies the profiles shown in the discover deck:
//! - Seed candidates
//! - Search / interest filtering
//! - Padding sparse results with synthesized profiles
//!
//! Randomness lives behind [`ProfileSynthesizer`] so callers (and tests) can
//! swap in a seeded or scripted generator.

use crate::storage::{Photo, Profile, SelfProfile, Settings};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const SYNTH_NAMES: &[&str] = &[
    "Morgan Lee",
    "Jamie Carter",
    "Avery Brooks",
    "Riley Tran",
    "Casey Morgan",
    "Taylor Price",
];
const SYNTH_ROLES: &[&str] = &["Analyst", "Associate", "VP", "Director"];
const SYNTH_TEAMS: &[&str] = &[
    "IBD – TMT",
    "IBD – Industrials",
    "Global Markets",
    "Asset Management",
    "Healthcare",
];
const SYNTH_LOCATIONS: &[&str] = &["200 West, NYC", "Jersey City", "Chicago", "SF Office"];
const SYNTH_INTERESTS: &[&str] = &[
    "Running",
    "Coffee",
    "Photography",
    "Cooking",
    "Chess",
    "Tennis",
    "Travel",
    "Bouldering",
];
const SYNTH_INTEREST_COUNT: usize = 3;
const SYNTH_SCHOOL: &str = "University of Example";
const AVATAR_COUNT: u32 = 70;

/// Lowest synthesized ID; seeded generators start here
const SEEDED_ID_BASE: u64 = 1_000_000;

/// Current discover search criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Free-text query, matched case-insensitively
    pub query: String,
    /// Selected interests; empty means no restriction
    pub interests: BTreeSet<String>,
}

impl Filter {
    /// Filter with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Add a selected interest
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.insert(interest.into());
        self
    }

    /// Whether the profile passes both the query and the interest test
    ///
    /// Interests use OR semantics: one shared tag is enough.
    pub fn matches(&self, profile: &Profile) -> bool {
        let query = self.query.to_lowercase();
        let hit_query = query.is_empty() || profile.search_text().to_lowercase().contains(&query);
        let interest_ok = self.interests.is_empty()
            || profile.interests.iter().any(|i| self.interests.contains(i));
        hit_query && interest_ok
    }
}

/// Source of filler profiles for sparse decks
pub trait ProfileSynthesizer {
    /// Produce a new profile with an ID not handed out before
    fn synthesize(&mut self) -> Profile;
}

/// Random filler profiles drawn from fixed name/role/team/location lists
#[derive(Debug)]
pub struct RandomProfileGenerator<R: Rng = StdRng> {
    rng: R,
    next_id: u64,
}

impl RandomProfileGenerator<StdRng> {
    /// Non-deterministic generator; IDs start at the current Unix millis
    pub fn from_entropy() -> Self {
        let first_id = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(SEEDED_ID_BASE);
        Self::new(StdRng::from_entropy(), first_id)
    }

    /// Deterministic generator for reproducible decks
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), SEEDED_ID_BASE)
    }
}

impl<R: Rng> RandomProfileGenerator<R> {
    /// Generator over any RNG, handing out IDs from `first_id` upwards
    ///
    /// IDs below 1 000 000 are reserved for seed profiles; a lower
    /// `first_id` is raised to that floor.
    pub fn new(rng: R, first_id: u64) -> Self {
        Self {
            rng,
            next_id: first_id.max(SEEDED_ID_BASE),
        }
    }

    fn pick(&mut self, options: &[&str]) -> String {
        options[self.rng.gen_range(0..options.len())].to_string()
    }
}

impl<R: Rng> ProfileSynthesizer for RandomProfileGenerator<R> {
    fn synthesize(&mut self) -> Profile {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let name = self.pick(SYNTH_NAMES);
        let role = self.pick(SYNTH_ROLES);
        let team = self.pick(SYNTH_TEAMS);
        let location = self.pick(SYNTH_LOCATIONS);
        // Repeats allowed
        let interests = (0..SYNTH_INTEREST_COUNT)
            .map(|_| self.pick(SYNTH_INTERESTS))
            .collect();
        let avatar = self.rng.gen_range(0..AVATAR_COUNT);

        Profile {
            id: id.to_string(),
            bio: format!(
                "Hi, I'm {}. Always happy to connect over coffee or events.",
                name
            ),
            name,
            role,
            team,
            location,
            school: SYNTH_SCHOOL.to_string(),
            photo: Photo::Uri(format!("https://i.pravatar.cc/160?img={}", avatar)),
            interests,
        }
    }
}

/// Filtered, padded candidate source for the discover deck
#[derive(Debug)]
pub struct CandidatePool<S: ProfileSynthesizer = RandomProfileGenerator> {
    seed: Vec<Profile>,
    synthesizer: S,
    min_exact_matches: usize,
    padded_deck_size: usize,
}

impl CandidatePool<RandomProfileGenerator> {
    /// Pool over the built-in seed candidates with random padding
    pub fn new(settings: &Settings) -> Self {
        Self::with_synthesizer(
            seed_candidates(),
            RandomProfileGenerator::from_entropy(),
            settings,
        )
    }
}

impl<S: ProfileSynthesizer> CandidatePool<S> {
    /// Pool over `seed` using `synthesizer` for padding
    pub fn with_synthesizer(seed: Vec<Profile>, synthesizer: S, settings: &Settings) -> Self {
        Self {
            seed,
            synthesizer,
            min_exact_matches: settings.min_exact_matches,
            padded_deck_size: settings.padded_deck_size,
        }
    }

    /// The unfiltered seed list
    pub fn seed(&self) -> &[Profile] {
        &self.seed
    }

    /// Candidates for `filter`, in seed order
    ///
    /// When fewer than `min_exact_matches` seed profiles pass, the result is
    /// topped up with synthesized profiles to `padded_deck_size`. Each call
    /// may synthesize different filler.
    pub fn get_candidates(&mut self, filter: &Filter) -> Vec<Profile> {
        let mut deck: Vec<Profile> = self
            .seed
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        let exact = deck.len();
        if exact < self.min_exact_matches {
            while deck.len() < self.padded_deck_size {
                deck.push(self.synthesizer.synthesize());
            }
            tracing::debug!(
                "Padded deck from {} exact matches to {} candidates",
                exact,
                deck.len()
            );
        }

        deck
    }
}

/// Sorted, de-duplicated interests offered by the filter dropdown
pub fn interest_palette(seed: &[Profile], me: &SelfProfile) -> Vec<String> {
    seed.iter()
        .flat_map(|p| p.interests.iter())
        .chain(me.interests.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_profile(
    id: &str,
    name: &str,
    role: &str,
    team: &str,
    location: &str,
    interests: &[&str],
    bio: &str,
    school: &str,
    avatar: u32,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        team: team.to_string(),
        location: location.to_string(),
        school: school.to_string(),
        bio: bio.to_string(),
        photo: Photo::Uri(format!("https://i.pravatar.cc/160?img={}", avatar)),
        interests: interests.iter().map(|i| i.to_string()).collect(),
    }
}

/// Built-in candidate list
pub fn seed_candidates() -> Vec<Profile> {
    vec![
        seed_profile(
            "1",
            "Jordan Patel",
            "Analyst",
            "IBD – TMT",
            "200 West, NYC",
            &["Coffee", "Chess", "Cooking"],
            "New to TMT. Always down for espresso chats and weekend chess.",
            "NYU Stern",
            5,
        ),
        seed_profile(
            "2",
            "Sam Lee",
            "Associate",
            "Asset Management",
            "Jersey City",
            &["Running", "Bouldering", "Cooking"],
            "Morning runner. Looking for a lunch buddy near the esplanade.",
            "Rutgers",
            7,
        ),
        seed_profile(
            "3",
            "Taylor Chen",
            "Analyst",
            "IBD – Industrials",
            "200 West, NYC",
            &["Photography", "Reading", "Coffee"],
            "Street photo walks after work; coffee near Oculus?",
            "Cornell",
            12,
        ),
        seed_profile(
            "4",
            "Priya Shah",
            "VP",
            "IBD – Healthcare",
            "200 West, NYC",
            &["Tennis", "Running", "Travel"],
            "Tennis on Sundays; friendly doubles welcome.",
            "Harvard",
            47,
        ),
        seed_profile(
            "5",
            "Chris Rivera",
            "Analyst",
            "Global Markets",
            "200 West, NYC",
            &["Gaming", "Photography", "Coffee"],
            "Learning film photography; museum lunches?",
            "UChicago",
            22,
        ),
    ]
}
