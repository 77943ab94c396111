pub mod display_date;
pub mod error;
pub mod id_allocator;
pub mod models;
pub mod notice;

#[cfg(test)]
mod tests;

pub use display_date::{MONTH_ABBREVIATIONS, format_display_date};
pub use error::{CoreError, Result as CoreErrorResult};
pub use id_allocator::IdAllocator;
pub use models::custom_attribute::{CustomAttribute, CustomAttributeDraft};
pub use models::experience::{DEFAULT_DESCRIPTION, DEFAULT_LOCATION, Experience, PRESENT};
pub use models::experience_document::{EXPORT_FILE_NAME, ExperienceDocument};
pub use models::experience_draft::ExperienceDraft;
pub use models::experience_field::ExperienceField;
pub use models::profile::Profile;
pub use models::profile_field::ProfileField;
pub use notice::{Notice, NoticeLevel};
