use crate::{Experience, ExperienceDraft, ExperienceField};

fn valid_draft() -> ExperienceDraft {
    ExperienceDraft {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        from: "2021-03".to_string(),
        ..ExperienceDraft::default()
    }
}

#[test]
fn test_valid_draft_passes() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn test_missing_title_reported_first() {
    let draft = ExperienceDraft::default();
    let err = draft.validate().unwrap_err();
    assert_eq!(err.invalid_field(), Some(ExperienceField::Title));
    assert!(err.to_string().contains("Please enter a job title."));
}

#[test]
fn test_whitespace_company_rejected() {
    let draft = ExperienceDraft {
        company: "   ".to_string(),
        ..valid_draft()
    };
    let err = draft.validate().unwrap_err();
    assert_eq!(err.invalid_field(), Some(ExperienceField::Company));
}

#[test]
fn test_missing_from_rejected() {
    let draft = ExperienceDraft {
        from: String::new(),
        ..valid_draft()
    };
    let err = draft.validate().unwrap_err();
    assert_eq!(err.invalid_field(), Some(ExperienceField::From));
}

#[test]
fn test_optional_fields_not_validated() {
    let draft = ExperienceDraft {
        location: String::new(),
        to: String::new(),
        description: String::new(),
        ..valid_draft()
    };
    assert!(draft.validate().is_ok());
}

#[test]
fn test_draft_from_current_experience_clears_present() {
    let experience = Experience::from_draft(3, &valid_draft());
    let draft = ExperienceDraft::from(&experience);

    assert_eq!(draft.to, "");
    assert_eq!(draft.title, "Engineer");
    assert_eq!(draft.location, "Not specified");
}

#[test]
fn test_draft_from_past_experience_keeps_end_date() {
    let mut experience = Experience::from_draft(3, &valid_draft());
    experience.to = "2023-06".to_string();
    let draft = ExperienceDraft::from(&experience);

    assert_eq!(draft.to, "2023-06");
}

#[test]
fn test_draft_set_and_get() {
    let mut draft = ExperienceDraft::default();
    draft.set(ExperienceField::Description, "Built things");
    assert_eq!(draft.get(ExperienceField::Description), "Built things");
}
