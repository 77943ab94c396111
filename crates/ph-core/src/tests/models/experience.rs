use crate::{
    CoreError, DEFAULT_DESCRIPTION, DEFAULT_LOCATION, Experience, ExperienceDocument,
    ExperienceDraft, PRESENT,
};

fn experience(id: u64) -> Experience {
    Experience {
        id,
        title: format!("Role {id}"),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        from: "2020-01".to_string(),
        to: PRESENT.to_string(),
        description: "Work".to_string(),
    }
}

#[test]
fn test_from_draft_applies_defaults() {
    let draft = ExperienceDraft {
        title: "  Engineer ".to_string(),
        company: " Acme".to_string(),
        location: "   ".to_string(),
        from: "2021-03".to_string(),
        to: String::new(),
        description: String::new(),
    };

    let experience = Experience::from_draft(7, &draft);

    assert_eq!(experience.id, 7);
    assert_eq!(experience.title, "Engineer");
    assert_eq!(experience.company, "Acme");
    assert_eq!(experience.location, DEFAULT_LOCATION);
    assert_eq!(experience.to, PRESENT);
    assert_eq!(experience.description, DEFAULT_DESCRIPTION);
    assert!(experience.is_current());
}

#[test]
fn test_from_draft_keeps_provided_values() {
    let draft = ExperienceDraft {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Berlin".to_string(),
        from: "2019-05".to_string(),
        to: "2021-02".to_string(),
        description: "Built pipelines".to_string(),
    };

    let experience = Experience::from_draft(1, &draft);

    assert_eq!(experience.location, "Berlin");
    assert_eq!(experience.to, "2021-02");
    assert_eq!(experience.description, "Built pipelines");
    assert!(!experience.is_current());
}

#[test]
fn test_next_id_empty_starts_at_one() {
    assert_eq!(Experience::next_id(&[], 0).unwrap(), 1);
}

#[test]
fn test_next_id_is_max_plus_one() {
    let list = vec![experience(4), experience(2), experience(9)];
    assert_eq!(Experience::next_id(&list, 0).unwrap(), 10);
}

#[test]
fn test_next_id_skips_past_high_water_mark() {
    // 9 was handed out earlier and then deleted
    let list = vec![experience(4), experience(2)];
    assert_eq!(Experience::next_id(&list, 9).unwrap(), 10);
}

#[test]
fn test_next_id_ignores_stale_high_water_mark() {
    let list = vec![experience(12)];
    assert_eq!(Experience::next_id(&list, 3).unwrap(), 13);
}

#[test]
fn test_next_id_exhausted_at_u64_max() {
    let list = vec![experience(u64::MAX)];

    let err = Experience::next_id(&list, 0).unwrap_err();

    assert!(matches!(err, CoreError::IdExhausted { last: u64::MAX, .. }));
}

#[test]
fn test_display_range() {
    let mut e = experience(1);
    e.from = "2021-03".to_string();
    assert_eq!(e.display_range(), "Mar 2021 - Present");
}

#[test]
fn test_document_round_trip_preserves_order() {
    let document = ExperienceDocument::new(vec![experience(3), experience(1)]);
    let json = document.to_pretty_json().unwrap();
    let parsed = ExperienceDocument::from_json(&json).unwrap();

    assert_eq!(parsed, document);
    assert!(json.starts_with("{\n  \"experiences\""));
}

#[test]
fn test_document_missing_experiences_is_empty() {
    let parsed = ExperienceDocument::from_json(r#"{"profile": {}}"#).unwrap();
    assert!(parsed.experiences.is_empty());
}

#[test]
fn test_seed_record_without_optional_fields_deserializes() {
    let parsed = ExperienceDocument::from_json(
        r#"{"experiences": [{"id": 1, "title": "Dev", "company": "Acme", "from": "2020-01"}]}"#,
    )
    .unwrap();
    assert_eq!(parsed.experiences[0].location, "");
    assert_eq!(parsed.experiences[0].to, "");
}
