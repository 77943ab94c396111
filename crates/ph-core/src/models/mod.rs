pub mod custom_attribute;
pub mod experience;
pub mod experience_document;
pub mod experience_draft;
pub mod experience_field;
pub mod profile;
pub mod profile_field;
