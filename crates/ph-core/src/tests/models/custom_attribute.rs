use crate::CustomAttributeDraft;

#[test]
fn test_draft_complete_requires_both_fields() {
    assert!(CustomAttributeDraft::new("Phone", "+1-555-0100").is_complete());
    assert!(!CustomAttributeDraft::new("Phone", "").is_complete());
    assert!(!CustomAttributeDraft::new("", "+1-555-0100").is_complete());
    assert!(!CustomAttributeDraft::new("  ", "\t").is_complete());
}

#[test]
fn test_draft_to_attribute_trims() {
    let draft = CustomAttributeDraft::new("  Phone ", " +1-555-0100  ");
    let attribute = draft.to_attribute(42);

    assert_eq!(attribute.id, 42);
    assert_eq!(attribute.key, "Phone");
    assert_eq!(attribute.value, "+1-555-0100");
}

#[test]
fn test_draft_clear() {
    let mut draft = CustomAttributeDraft::new("Phone", "+1-555-0100");
    draft.clear();
    assert_eq!(draft, CustomAttributeDraft::default());
}
