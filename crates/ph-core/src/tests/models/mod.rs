mod custom_attribute;
mod experience;
mod experience_draft;
mod profile;
