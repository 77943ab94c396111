use crate::ClientResult;

use async_trait::async_trait;
use ph_core::{CustomAttribute, Profile};

/// Collection-based record store holding the profile and custom attributes.
///
/// Every call is a single round trip with no retry. A failed call leaves the
/// store unchanged from the caller's point of view.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_profile(&self) -> ClientResult<Profile>;

    async fn replace_profile(&self, profile: &Profile) -> ClientResult<Profile>;

    async fn list_custom_attributes(&self) -> ClientResult<Vec<CustomAttribute>>;

    async fn create_custom_attribute(
        &self,
        attribute: &CustomAttribute,
    ) -> ClientResult<CustomAttribute>;

    async fn delete_custom_attribute(&self, id: u64) -> ClientResult<()>;
}
