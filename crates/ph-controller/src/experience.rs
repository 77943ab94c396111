use crate::{Confirmed, ControllerError, ControllerResult, InFlight, NoticeBoard};

use std::sync::Arc;

use log::{debug, info, warn};
use ph_cache::{CacheError, CacheResult, LocalCache};
use ph_client::SeedSource;
use ph_core::{Experience, ExperienceDocument, ExperienceDraft};
use serde_json::Value;

/// Cache key holding the serialized experience list
pub const EXPERIENCES_CACHE_KEY: &str = "experiences";

/// Cache key holding the largest experience id ever assigned
pub const EXPERIENCE_HIGH_WATER_KEY: &str = "experiences_high_water";

const CACHE_WARNING: &str = "Changes could not be saved locally and will be lost on reload.";

/// Where a resolved experience list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceSource {
    Cache,
    Seed,
}

#[derive(Debug)]
pub struct ResolvedExperiences {
    pub experiences: Vec<Experience>,
    pub source: ExperienceSource,
    /// Set when the cache could not be read, or the seed could not be
    /// written to it
    pub cache_error: Option<ControllerError>,
}

/// The cached list, if one is stored.
///
/// A corrupted or wrongly shaped entry is set aside and reported as absent so
/// the seed can replace it. Any other read failure is returned untouched and
/// the entry is left in place.
pub fn try_cache(cache: &dyn LocalCache) -> CacheResult<Option<Vec<Experience>>> {
    let value = match cache.load(EXPERIENCES_CACHE_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => return Ok(None),
        Err(e @ CacheError::Corrupted { .. }) => {
            warn!("Ignoring corrupted experience cache: {e}");
            quarantine(cache);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match serde_json::from_value::<Vec<Experience>>(value) {
        Ok(experiences) => Ok(Some(experiences)),
        Err(e) => {
            warn!("Ignoring experience cache with unexpected shape: {e}");
            quarantine(cache);
            Ok(None)
        }
    }
}

/// Fetch the seed document and write it through to the cache.
///
/// A failed cache write is reported in the result, not as an error; the
/// fetched list is still usable.
pub async fn fetch_seed_and_populate_cache(
    seed: &dyn SeedSource,
    cache: &dyn LocalCache,
) -> ControllerResult<ResolvedExperiences> {
    let experiences = fetch_seed(seed).await?;
    let cache_error = write_cache(cache, &experiences)
        .err()
        .map(ControllerError::cache);

    Ok(ResolvedExperiences {
        experiences,
        source: ExperienceSource::Seed,
        cache_error,
    })
}

/// Cached list wins; the seed is consulted only when nothing usable is cached.
///
/// When the cache cannot be read at all the seed is returned without being
/// written through, so whatever the cache holds survives.
pub async fn resolve_experiences(
    cache: &dyn LocalCache,
    seed: &dyn SeedSource,
) -> ControllerResult<ResolvedExperiences> {
    match try_cache(cache) {
        Ok(Some(experiences)) => {
            debug!("Loaded {} experiences from cache", experiences.len());
            Ok(ResolvedExperiences {
                experiences,
                source: ExperienceSource::Cache,
                cache_error: None,
            })
        }
        Ok(None) => fetch_seed_and_populate_cache(seed, cache).await,
        Err(e) => {
            warn!("Experience cache unreadable, falling back to seed: {e}");
            let experiences = fetch_seed(seed).await?;
            Ok(ResolvedExperiences {
                experiences,
                source: ExperienceSource::Seed,
                cache_error: Some(ControllerError::cache(e)),
            })
        }
    }
}

async fn fetch_seed(seed: &dyn SeedSource) -> ControllerResult<Vec<Experience>> {
    let experiences = seed
        .fetch_seed()
        .await
        .map_err(ControllerError::seed_fetch)?;
    info!("Fetched {} experiences from seed", experiences.len());
    Ok(experiences)
}

fn write_cache(cache: &dyn LocalCache, experiences: &[Experience]) -> Result<(), CacheError> {
    let value = serde_json::to_value(experiences)?;
    cache.save(EXPERIENCES_CACHE_KEY, &value).inspect_err(|e| {
        warn!("Experience cache write failed: {e}");
    })
}

/// Stored high-water mark, 0 when absent or unusable
fn read_high_water(cache: &dyn LocalCache) -> u64 {
    match cache.load(EXPERIENCE_HIGH_WATER_KEY) {
        Ok(Some(value)) => value.as_u64().unwrap_or_else(|| {
            warn!("Ignoring experience id high-water mark with unexpected shape: {value}");
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            warn!("Could not read experience id high-water mark: {e}");
            0
        }
    }
}

fn write_high_water(cache: &dyn LocalCache, high_water: u64) -> Result<(), CacheError> {
    cache
        .save(EXPERIENCE_HIGH_WATER_KEY, &Value::from(high_water))
        .inspect_err(|e| warn!("Experience id high-water mark write failed: {e}"))
}

fn quarantine(cache: &dyn LocalCache) {
    if let Err(e) = cache.quarantine(EXPERIENCES_CACHE_KEY) {
        warn!("Could not set aside experience cache: {e}");
    }
}

/// Owns the experience list, its add/edit modes and their drafts.
///
/// Every committed change is written through to the local cache. A failed
/// write leaves the in-memory list correct and raises a warning notice.
/// While the cached list is unreadable nothing is written, so the entry on
/// disk is never replaced by a list that was not derived from it.
///
/// Ids are never reused: the largest id ever assigned is kept alongside the
/// list and new ids start above it, even after that record is deleted.
pub struct ExperienceController {
    seed: Arc<dyn SeedSource>,
    cache: Arc<dyn LocalCache>,
    notices: NoticeBoard,
    in_flight: InFlight,
    experiences: Vec<Experience>,
    editing_id: Option<u64>,
    is_adding: bool,
    add_draft: ExperienceDraft,
    edit_draft: ExperienceDraft,
    high_water: u64,
    cache_error: Option<ControllerError>,
    loaded: bool,
}

impl ExperienceController {
    pub fn new(
        seed: Arc<dyn SeedSource>,
        cache: Arc<dyn LocalCache>,
        notices: NoticeBoard,
    ) -> Self {
        Self {
            seed,
            cache,
            notices,
            in_flight: InFlight::new(),
            experiences: Vec::new(),
            editing_id: None,
            is_adding: false,
            add_draft: ExperienceDraft::default(),
            edit_draft: ExperienceDraft::default(),
            high_water: 0,
            cache_error: None,
            loaded: false,
        }
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn get(&self, id: u64) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.editing_id
    }

    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    /// Whether the list has been resolved from cache or seed at least once
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Shared view of the busy flag, observable while an operation runs
    pub fn busy_handle(&self) -> InFlight {
        self.in_flight.clone()
    }

    /// The most recent cache failure, cleared by the next successful write
    pub fn last_cache_error(&self) -> Option<&ControllerError> {
        self.cache_error.as_ref()
    }

    pub fn add_draft(&self) -> &ExperienceDraft {
        &self.add_draft
    }

    pub fn add_draft_mut(&mut self) -> &mut ExperienceDraft {
        &mut self.add_draft
    }

    pub fn edit_draft(&self) -> &ExperienceDraft {
        &self.edit_draft
    }

    pub fn edit_draft_mut(&mut self) -> &mut ExperienceDraft {
        &mut self.edit_draft
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Resolve the list from cache, falling back to the seed.
    pub async fn load(&mut self) -> ControllerResult<&[Experience]> {
        let _guard = self.in_flight.begin();

        match resolve_experiences(self.cache.as_ref(), self.seed.as_ref()).await {
            Ok(resolved) => {
                info!(
                    "Loaded {} experiences from {:?}",
                    resolved.experiences.len(),
                    resolved.source
                );
                self.high_water = read_high_water(self.cache.as_ref())
                    .max(Experience::max_id(&resolved.experiences));
                self.experiences = resolved.experiences;
                self.cache_error = resolved.cache_error;
                if let Some(hint) = self
                    .cache_error
                    .as_ref()
                    .and_then(ControllerError::cache_recovery_hint)
                {
                    self.notices.warning(format!("{CACHE_WARNING} {hint}"));
                }
                self.loaded = true;
                Ok(&self.experiences)
            }
            Err(e) => {
                self.notices.error("Error loading experiences");
                Err(e)
            }
        }
    }

    /// Check the required fields, in order, without raising a notice.
    pub fn validate(draft: &ExperienceDraft) -> ControllerResult<()> {
        draft.validate().map_err(ControllerError::from)
    }

    pub fn begin_add(&mut self) {
        self.is_adding = true;
        self.editing_id = None;
    }

    pub fn cancel_add(&mut self) {
        self.is_adding = false;
        self.add_draft.clear();
    }

    /// Validate `draft` and append it with the next id.
    pub fn add(&mut self, draft: &ExperienceDraft) -> ControllerResult<&Experience> {
        self.check(draft)?;

        let id = match Experience::next_id(&self.experiences, self.high_water) {
            Ok(id) => id,
            Err(e) => {
                self.notices.error("No experience ids left to assign");
                return Err(e.into());
            }
        };

        let experience = Experience::from_draft(id, draft);
        info!("Adding experience {} at {}", experience.id, experience.company);
        self.experiences.push(experience);
        self.high_water = id;
        self.persist();

        self.add_draft.clear();
        self.is_adding = false;
        self.notices
            .success("Experience added and saved successfully!");

        self.experiences
            .last()
            .ok_or_else(|| ControllerError::invalid_state("experience list empty after add"))
    }

    /// `add` using the controller's own add-draft.
    pub fn commit_add(&mut self) -> ControllerResult<&Experience> {
        let draft = self.add_draft.clone();
        self.add(&draft)
    }

    /// Load a record into the edit-draft and enter edit mode.
    pub fn start_edit(&mut self, id: u64) -> ControllerResult<&ExperienceDraft> {
        let Some(experience) = self.get(id) else {
            return Err(ControllerError::not_found(id));
        };

        let draft = ExperienceDraft::from(experience);

        self.edit_draft = draft;
        self.editing_id = Some(id);
        self.is_adding = false;
        Ok(&self.edit_draft)
    }

    /// Replace the record in place, keeping its position.
    pub fn save_edit(&mut self, id: u64, draft: &ExperienceDraft) -> ControllerResult<&Experience> {
        let Some(index) = self.experiences.iter().position(|e| e.id == id) else {
            self.notices.error(format!("Experience {id} no longer exists"));
            return Err(ControllerError::not_found(id));
        };
        self.check(draft)?;

        self.experiences[index] = Experience::from_draft(id, draft);
        info!("Updated experience {id}");
        self.persist();

        self.editing_id = None;
        self.edit_draft.clear();
        self.notices
            .success("Experience updated and saved successfully!");
        Ok(&self.experiences[index])
    }

    /// `save_edit` for the record currently in edit mode, using the edit-draft.
    pub fn commit_edit(&mut self) -> ControllerResult<&Experience> {
        let Some(id) = self.editing_id else {
            return Err(ControllerError::invalid_state(
                "no experience is being edited",
            ));
        };
        let draft = self.edit_draft.clone();
        self.save_edit(id, &draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_draft.clear();
    }

    /// Remove a record. Absent ids are a no-op and touch nothing.
    pub fn delete(&mut self, id: u64, _confirmed: Confirmed) -> ControllerResult<bool> {
        let before = self.experiences.len();
        self.experiences.retain(|e| e.id != id);

        if self.experiences.len() == before {
            debug!("Experience {id} not present, nothing to delete");
            return Ok(false);
        }

        if self.editing_id == Some(id) {
            self.cancel_edit();
        }

        info!("Deleted experience {id}");
        self.persist();
        self.notices
            .success("Experience deleted and saved successfully!");
        Ok(true)
    }

    /// Discard every local change and start over from the seed document.
    pub async fn reset_to_seed(&mut self, _confirmed: Confirmed) -> ControllerResult<&[Experience]> {
        let _guard = self.in_flight.begin();

        let experiences = match self.seed.fetch_seed().await {
            Ok(experiences) => experiences,
            Err(e) => {
                self.notices
                    .error("Error resetting experiences. Please try again.");
                return Err(ControllerError::seed_fetch(e));
            }
        };

        info!("Reset to {} seed experiences", experiences.len());
        self.high_water = self.high_water.max(Experience::max_id(&experiences));
        self.experiences = experiences;
        self.loaded = true;
        self.persist();

        self.is_adding = false;
        self.editing_id = None;
        self.add_draft.clear();
        self.edit_draft.clear();
        self.notices
            .success("Experiences reset to original data successfully!");
        Ok(&self.experiences)
    }

    /// Snapshot of the list in its export document shape
    pub fn export(&self) -> ExperienceDocument {
        ExperienceDocument::new(self.experiences.clone())
    }

    fn check(&mut self, draft: &ExperienceDraft) -> ControllerResult<()> {
        Self::validate(draft).inspect_err(|e| {
            if let Some(field) = e.invalid_field() {
                self.notices.error(field.validation_message());
            }
        })
    }

    fn persist(&mut self) {
        if let Some(err @ ControllerError::CacheRead { .. }) = &self.cache_error {
            debug!("Skipping experience cache write, cache unreadable: {err}");
            let hint = err.cache_recovery_hint().unwrap_or_default();
            self.notices.warning(format!("{CACHE_WARNING} {hint}"));
            return;
        }

        let cache = self.cache.as_ref();
        match write_cache(cache, &self.experiences)
            .and_then(|()| write_high_water(cache, self.high_water))
        {
            Ok(()) => self.cache_error = None,
            Err(e) => {
                self.notices
                    .warning(format!("{CACHE_WARNING} {}", e.recovery_hint()));
                self.cache_error = Some(ControllerError::cache(e));
            }
        }
    }
}
