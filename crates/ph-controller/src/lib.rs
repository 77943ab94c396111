//! Controllers owning the profile, custom attribute and experience state.
//!
//! Each controller holds its own records and notice board and talks only to
//! the collaborators it was constructed with. None of them reads another's
//! state.

pub mod clipboard;
pub mod confirmation;
pub mod custom_attributes;
pub mod error;
pub mod experience;
pub mod in_flight;
pub mod notice_board;
pub mod profile;

#[cfg(test)]
mod tests;

pub use clipboard::{Clipboard, copy_to_clipboard};
pub use confirmation::Confirmed;
pub use custom_attributes::CustomAttributesController;
pub use error::{ControllerError, Result as ControllerResult};
pub use experience::{
    EXPERIENCE_HIGH_WATER_KEY, EXPERIENCES_CACHE_KEY, ExperienceController, ExperienceSource,
    ResolvedExperiences, fetch_seed_and_populate_cache, resolve_experiences, try_cache,
};
pub use in_flight::{InFlight, InFlightGuard};
pub use notice_board::{NoticeBoard, NoticeDurations};
pub use profile::ProfileController;
