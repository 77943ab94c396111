use crate::{
    Clipboard, ControllerError, ControllerResult, InFlight, NoticeBoard, copy_to_clipboard,
};

use std::sync::Arc;

use log::{debug, info};
use ph_client::RecordStore;
use ph_core::{Profile, ProfileField};

/// Owns the single profile record and its edit mode.
///
/// The store is the source of truth: `load` and `cancel` replace local state
/// wholesale, and a failed `save` keeps the user's edits for another try.
pub struct ProfileController {
    store: Arc<dyn RecordStore>,
    notices: NoticeBoard,
    in_flight: InFlight,
    profile: Profile,
    editing: bool,
}

impl ProfileController {
    pub fn new(store: Arc<dyn RecordStore>, notices: NoticeBoard) -> Self {
        Self {
            store,
            notices,
            in_flight: InFlight::new(),
            profile: Profile::default(),
            editing: false,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Shared view of the busy flag, observable while an operation runs
    pub fn busy_handle(&self) -> InFlight {
        self.in_flight.clone()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Fetch the profile and replace local state. On failure the previous
    /// profile is kept.
    pub async fn load(&mut self) -> ControllerResult<&Profile> {
        let _guard = self.in_flight.begin();

        match self.store.fetch_profile().await {
            Ok(profile) => {
                debug!("Loaded profile for '{}'", profile.full_name);
                self.profile = profile;
                Ok(&self.profile)
            }
            Err(e) => {
                self.notices.error("Error loading profile data");
                Err(ControllerError::store(e))
            }
        }
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Set one field on the local copy. Only legal in edit mode.
    pub fn update_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> ControllerResult<()> {
        if !self.editing {
            return Err(ControllerError::invalid_state(format!(
                "cannot update {field} outside edit mode"
            )));
        }

        self.profile.set(field, value);
        Ok(())
    }

    /// Send the full profile to the store and leave edit mode on success.
    pub async fn save(&mut self) -> ControllerResult<&Profile> {
        let _guard = self.in_flight.begin();

        match self.store.replace_profile(&self.profile).await {
            Ok(saved) => {
                info!("Profile saved");
                self.profile = saved;
                self.editing = false;
                self.notices.success("Profile saved successfully!");
                Ok(&self.profile)
            }
            Err(e) => {
                self.notices.error("Error saving profile");
                Err(ControllerError::store(e))
            }
        }
    }

    /// Leave edit mode and reload from the store, discarding local edits.
    pub async fn cancel(&mut self) -> ControllerResult<&Profile> {
        self.editing = false;
        self.load().await
    }

    pub fn copy(&mut self, field: ProfileField, clipboard: &dyn Clipboard) -> ControllerResult<()> {
        copy_to_clipboard(
            clipboard,
            &mut self.notices,
            self.profile.get(field),
            field.label(),
        )
    }
}
