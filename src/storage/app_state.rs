//! In-memory application state shared by every view

use crate::storage::{
    event::{Event, EventMix},
    group::{GroupRequest, MeetingMode, PartnerGroup},
    profile::{Photo, ProfileDraft, Prompt, SelfProfile},
    settings::Settings,
};
use serde::{Deserialize, Serialize};

/// Application state
///
/// One owner for the self-profile and the sibling stores (events, partner
/// groups, group requests). Nothing is persisted: a new state starts from
/// the seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// The signed-in user's profile
    pub me: SelfProfile,
    /// Events, newest first
    pub events: Vec<Event>,
    /// Partner group chats, newest first
    pub groups: Vec<PartnerGroup>,
    /// Pending group chat requests, newest first
    pub requests: Vec<GroupRequest>,
    /// Application settings
    pub settings: Settings,
}

impl AppState {
    /// Create a state seeded with the demo data
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Seeded state using `settings`
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            me: default_self_profile(),
            events: default_events(),
            groups: default_groups(),
            requests: default_requests(),
            settings,
        }
    }

    /// Replace the self-profile with the edited snapshot
    pub fn save_profile(&mut self, draft: ProfileDraft) -> &SelfProfile {
        self.me = draft.into_profile();
        tracing::info!("Profile saved for {}", self.me.name);
        &self.me
    }

    /// Create an event at the top of the list
    ///
    /// Blank name, time or location is a no-op.
    pub fn create_event(
        &mut self,
        name: &str,
        when: &str,
        location: &str,
        company_sponsored: bool,
    ) -> Option<&Event> {
        if name.trim().is_empty() || when.trim().is_empty() || location.trim().is_empty() {
            return None;
        }
        let event = Event::new(name, when, location, company_sponsored);
        tracing::info!("Event created: {} ({})", event.name, event.id);
        self.events.insert(0, event);
        self.events.first()
    }

    /// Get an event by ID
    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Company vs. community split of the events
    pub fn event_mix(&self) -> EventMix {
        let company = self.events.iter().filter(|e| e.company_sponsored).count();
        EventMix {
            company,
            community: self.events.len() - company,
        }
    }

    /// Submit a new group chat request for HR approval
    ///
    /// A blank topic is a no-op.
    pub fn submit_request(&mut self, topic: &str, mode: MeetingMode) -> Option<&GroupRequest> {
        if topic.trim().is_empty() {
            return None;
        }
        let request = GroupRequest::new(topic, mode);
        tracing::info!("Group request submitted: {} ({})", request.topic, request.id);
        self.requests.insert(0, request);
        self.requests.first()
    }

    /// Approve a request: it leaves the pending list and becomes an empty group
    pub fn approve_request(&mut self, id: &str) -> Option<&PartnerGroup> {
        let index = self.requests.iter().position(|r| r.id == id)?;
        let request = self.requests.remove(index);
        let group = PartnerGroup::from_request(&request);
        tracing::info!("Approved request {}, created group {}", request.id, group.id);
        self.groups.insert(0, group);
        self.groups.first()
    }

    /// Decline a request; returns whether it was pending
    pub fn decline_request(&mut self, id: &str) -> bool {
        let before = self.requests.len();
        self.requests.retain(|r| r.id != id);
        let removed = self.requests.len() != before;
        if removed {
            tracing::info!("Declined request {}", id);
        }
        removed
    }

    /// Get a group by ID
    pub fn get_group(&self, id: &str) -> Option<&PartnerGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Join a group chat (stub: membership is not tracked)
    pub fn join_group(&self, id: &str) -> bool {
        match self.get_group(id) {
            Some(group) => {
                tracing::info!("Joined group {} (stub)", group.name);
                true
            }
            None => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo self-profile
pub fn default_self_profile() -> SelfProfile {
    SelfProfile {
        name: "Alex Kim".to_string(),
        role: "Analyst".to_string(),
        team: "Global Markets".to_string(),
        location: "200 West, NYC".to_string(),
        photo: Photo::Uri("https://i.pravatar.cc/160?img=15".to_string()),
        school: "Columbia University".to_string(),
        degree: "BS, Financial Engineering".to_string(),
        grad_year: "2024".to_string(),
        interests: ["Running", "Coffee", "Photography", "Skiing"]
            .iter()
            .map(|i| i.to_string())
            .collect(),
        prompts: vec![
            Prompt::new(
                "Two truths and a lie",
                "I ran a marathon, I roast my own beans, I've never left NYC.",
            ),
            Prompt::new("My ideal lunch", "15-minute walk + deli + park bench."),
        ],
    }
}

fn default_events() -> Vec<Event> {
    let names = |list: &[&str]| -> Vec<String> { list.iter().map(|n| n.to_string()).collect() };
    vec![
        Event {
            id: "e1".to_string(),
            name: "NYC Coffee Crawl".to_string(),
            when: "Thu 12:30 PM".to_string(),
            location: "Tribeca".to_string(),
            attendees: names(&["Alex Kim", "Jordan Patel", "Taylor Chen"]),
            company_sponsored: true,
        },
        Event {
            id: "e2".to_string(),
            name: "Tuesday 5k Run".to_string(),
            when: "Tue 6:30 PM".to_string(),
            location: "Hudson River Park".to_string(),
            attendees: names(&["Sam Lee", "Priya Shah"]),
            company_sponsored: false,
        },
        Event {
            id: "e3".to_string(),
            name: "Beginner Photography Walk".to_string(),
            when: "Sat 10:00 AM".to_string(),
            location: "Battery Park".to_string(),
            attendees: names(&["Chris Rivera"]),
            company_sponsored: false,
        },
    ]
}

fn default_groups() -> Vec<PartnerGroup> {
    vec![
        PartnerGroup {
            id: "g1".to_string(),
            name: "Moms of analysts – NYC".to_string(),
            members: ["Dana", "Riya", "Mei"].iter().map(|m| m.to_string()).collect(),
            mode: MeetingMode::InPerson,
        },
        PartnerGroup {
            id: "g2".to_string(),
            name: "Remote partners peer chat".to_string(),
            members: ["Kyle", "Asha", "Luis", "Sam"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            mode: MeetingMode::Virtual,
        },
    ]
}

fn default_requests() -> Vec<GroupRequest> {
    vec![
        GroupRequest {
            id: "r1".to_string(),
            topic: "Evening wellness circle – FiDi".to_string(),
            mode: MeetingMode::InPerson,
        },
        GroupRequest {
            id: "r2".to_string(),
            topic: "Parents of first-years – Midtown".to_string(),
            mode: MeetingMode::InPerson,
        },
    ]
}
