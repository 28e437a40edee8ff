// Profile Tests - Testing profile records and the profile editor draft

use crate::pool::seed_candidates;
use crate::storage::app_state::default_self_profile;
use crate::storage::{Photo, Prompt};

#[test]
fn test_search_text_joins_fields() {
    let jordan = &seed_candidates()[0];
    let text = jordan.search_text();

    assert!(text.starts_with("Jordan Patel Analyst IBD – TMT 200 West, NYC NYU Stern"));
    assert!(text.ends_with("weekend chess."));
}

#[test]
fn test_has_interest_and_initials() {
    let jordan = &seed_candidates()[0];
    assert!(jordan.has_interest("Chess"));
    assert!(!jordan.has_interest("chess"));
    assert_eq!(jordan.initials(), "JP");
}

#[test]
fn test_photo_sources() {
    let uri = Photo::Uri("https://i.pravatar.cc/160?img=15".to_string());
    assert_eq!(uri.to_src(), "https://i.pravatar.cc/160?img=15");
    assert!(uri.is_set());
    assert!(!Photo::Uri("  ".to_string()).is_set());

    let data = Photo::Data {
        mime: "image/png".to_string(),
        bytes: b"hello".to_vec(),
    };
    assert_eq!(data.to_src(), "data:image/png;base64,aGVsbG8=");
    assert!(data.is_set());
}

#[test]
fn test_completion_percent() {
    let mut me = default_self_profile();
    assert_eq!(me.completion_percent(), 100);

    me.degree.clear();
    // 7 of 8
    assert_eq!(me.completion_percent(), 88);

    me.grad_year = "   ".to_string();
    me.photo = Photo::Uri(String::new());
    assert_eq!(me.completion_percent(), 63);
}

#[test]
fn test_shared_interests_keep_candidate_order() {
    let me = default_self_profile();
    let taylor = &seed_candidates()[2];

    assert_eq!(me.shared_interests(taylor), vec!["Photography", "Coffee"]);
}

#[test]
fn test_draft_interests_csv() {
    let mut draft = default_self_profile().draft();
    assert_eq!(draft.interests_csv(), "Running, Coffee, Photography, Skiing");

    draft.set_interests_csv(" Chess ,, Tennis,Chess ,  ");
    assert_eq!(draft.profile.interests, vec!["Chess", "Tennis", "Chess"]);
}

#[test]
fn test_draft_prompts() {
    let mut draft = default_self_profile().draft();
    let index = draft.add_prompt();

    assert_eq!(index, 2);
    assert_eq!(draft.profile.prompts[2], Prompt::default());

    assert!(draft.set_prompt(index, "Best coffee nearby", "The cart on Vesey"));
    assert_eq!(
        draft.profile.prompts[2],
        Prompt::new("Best coffee nearby", "The cart on Vesey")
    );
    assert!(!draft.set_prompt(9, "q", "a"));
}

#[test]
fn test_draft_does_not_touch_original() {
    let me = default_self_profile();
    let mut draft = me.draft();
    draft.profile.name = "Alex K.".to_string();
    draft.set_photo_data("image/jpeg", vec![0xff, 0xd8]);

    assert_eq!(me.name, "Alex Kim");
    let edited = draft.into_profile();
    assert_eq!(edited.name, "Alex K.");
    assert!(matches!(edited.photo, Photo::Data { .. }));
}
