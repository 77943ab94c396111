use crate::{Profile, ProfileField};

use std::str::FromStr;

use serde_json::json;

#[test]
fn test_profile_deserializes_camel_case_with_missing_fields() {
    let profile: Profile = serde_json::from_value(json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "linkedinUrl": "https://linkedin.com/in/ada"
    }))
    .unwrap();

    assert_eq!(profile.full_name, "Ada Lovelace");
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.linkedin_url, "https://linkedin.com/in/ada");
    assert_eq!(profile.phone, "");
    assert_eq!(profile.cover_letter, "");
}

#[test]
fn test_profile_serializes_wire_names() {
    let profile = Profile {
        github_url: "https://github.com/ada".to_string(),
        ..Profile::default()
    };
    let value = serde_json::to_value(&profile).unwrap();

    assert_eq!(value["githubUrl"], "https://github.com/ada");
    assert_eq!(value["portfolioUrl"], "");
    assert!(value.get("github_url").is_none());
}

#[test]
fn test_profile_get_and_set_cover_every_field() {
    let mut profile = Profile::default();
    for field in ProfileField::ALL {
        profile.set(field, field.as_str());
    }
    for field in ProfileField::ALL {
        assert_eq!(profile.get(field), field.as_str());
    }
}

#[test]
fn test_profile_field_from_str_spellings() {
    assert_eq!(
        ProfileField::from_str("fullName").unwrap(),
        ProfileField::FullName
    );
    assert_eq!(
        ProfileField::from_str("full_name").unwrap(),
        ProfileField::FullName
    );
    assert_eq!(
        ProfileField::from_str("linkedin-url").unwrap(),
        ProfileField::LinkedinUrl
    );
    assert_eq!(
        ProfileField::from_str("cover").unwrap(),
        ProfileField::CoverLetter
    );
    assert!(ProfileField::from_str("address").is_err());
}

#[test]
fn test_profile_field_labels() {
    assert_eq!(ProfileField::FullName.label(), "Name");
    assert_eq!(ProfileField::Phone.label(), "Phone No");
    assert_eq!(ProfileField::GithubUrl.label(), "GitHub URL");
}
