use crate::{
    Clipboard, ControllerError, ControllerResult, InFlight, NoticeBoard, copy_to_clipboard,
};

use std::sync::Arc;

use log::{debug, info};
use ph_client::RecordStore;
use ph_core::{CustomAttribute, CustomAttributeDraft, IdAllocator};

/// Owns the list of free-form key/value attributes and the pending draft.
pub struct CustomAttributesController {
    store: Arc<dyn RecordStore>,
    notices: NoticeBoard,
    in_flight: InFlight,
    ids: IdAllocator,
    attributes: Vec<CustomAttribute>,
    draft: CustomAttributeDraft,
}

impl CustomAttributesController {
    pub fn new(store: Arc<dyn RecordStore>, notices: NoticeBoard) -> Self {
        Self {
            store,
            notices,
            in_flight: InFlight::new(),
            ids: IdAllocator::new(),
            attributes: Vec::new(),
            draft: CustomAttributeDraft::default(),
        }
    }

    pub fn attributes(&self) -> &[CustomAttribute] {
        &self.attributes
    }

    pub fn draft(&self) -> &CustomAttributeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CustomAttributeDraft {
        &mut self.draft
    }

    pub fn set_draft(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.draft = CustomAttributeDraft::new(key, value);
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

    pub async fn load(&mut self) -> ControllerResult<&[CustomAttribute]> {
        let _guard = self.in_flight.begin();

        match self.store.list_custom_attributes().await {
            Ok(attributes) => {
                debug!("Loaded {} custom attributes", attributes.len());
                self.attributes = attributes;
                Ok(&self.attributes)
            }
            Err(e) => {
                self.notices.error("Error loading custom info");
                Err(ControllerError::store(e))
            }
        }
    }

    /// Persist the draft as a new attribute.
    ///
    /// Returns `Ok(None)` without touching the store when either draft field
    /// is blank.
    pub async fn add(&mut self) -> ControllerResult<Option<&CustomAttribute>> {
        if !self.draft.is_complete() {
            debug!("Custom info draft incomplete, nothing to add");
            return Ok(None);
        }

        let _guard = self.in_flight.begin();
        let existing_max = self.attributes.iter().map(|a| a.id).max();
        let attribute = self.draft.to_attribute(self.ids.next(existing_max));

        match self.store.create_custom_attribute(&attribute).await {
            Ok(created) => {
                info!("Added custom info '{}' (id {})", created.key, created.id);
                self.attributes.push(created);
                self.draft.clear();
                self.notices.success("Custom info added successfully!");
                Ok(self.attributes.last())
            }
            Err(e) => {
                self.notices.error("Error adding custom info");
                Err(ControllerError::store(e))
            }
        }
    }

    /// Delete on the store, then drop the id locally. Unknown ids are a no-op.
    pub async fn remove(&mut self, id: u64) -> ControllerResult<bool> {
        if !self.attributes.iter().any(|a| a.id == id) {
            debug!("Custom info {id} not present, nothing to remove");
            return Ok(false);
        }

        let _guard = self.in_flight.begin();

        match self.store.delete_custom_attribute(id).await {
            Ok(()) => {
                self.attributes.retain(|a| a.id != id);
                info!("Removed custom info {id}");
                self.notices.success("Custom info deleted successfully!");
                Ok(true)
            }
            Err(e) => {
                self.notices.error("Error deleting custom info");
                Err(ControllerError::store(e))
            }
        }
    }

    /// Copy an attribute's value, labelled with its key. Unknown ids are a no-op.
    pub fn copy(&mut self, id: u64, clipboard: &dyn Clipboard) -> ControllerResult<bool> {
        let Some(attribute) = self.attributes.iter().find(|a| a.id == id) else {
            return Ok(false);
        };

        copy_to_clipboard(
            clipboard,
            &mut self.notices,
            &attribute.value,
            &attribute.key,
        )?;
        Ok(true)
    }
}
