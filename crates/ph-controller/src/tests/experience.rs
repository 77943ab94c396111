use super::fakes::{FakeSeed, experience, seed_experiences};
use crate::{
    Confirmed, ControllerError, EXPERIENCE_HIGH_WATER_KEY, EXPERIENCES_CACHE_KEY,
    ExperienceController, NoticeBoard,
};

use std::sync::Arc;

use ph_cache::{CacheError, FileCache, LocalCache, MemoryCache};
use ph_core::{
    DEFAULT_DESCRIPTION, DEFAULT_LOCATION, Experience, ExperienceDocument, ExperienceDraft,
    ExperienceField, NoticeLevel, PRESENT,
};
use tempfile::TempDir;

fn draft(title: &str, company: &str, from: &str) -> ExperienceDraft {
    ExperienceDraft {
        title: title.to_string(),
        company: company.to_string(),
        from: from.to_string(),
        ..ExperienceDraft::default()
    }
}

fn cached(cache: &MemoryCache) -> Vec<Experience> {
    let value = cache.load(EXPERIENCES_CACHE_KEY).unwrap().unwrap();
    serde_json::from_value(value).unwrap()
}

async fn loaded(seed: &Arc<FakeSeed>, cache: &Arc<MemoryCache>) -> ExperienceController {
    let mut controller =
        ExperienceController::new(seed.clone(), cache.clone(), NoticeBoard::default());
    controller.load().await.unwrap();
    controller
}

#[tokio::test]
async fn test_load_uses_seed_and_populates_cache() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller =
        ExperienceController::new(seed.clone(), cache.clone(), NoticeBoard::default());
    assert!(!controller.is_loaded());

    controller.load().await.unwrap();

    assert!(controller.is_loaded());
    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert_eq!(cached(&cache), seed_experiences());
}

#[tokio::test]
async fn test_load_prefers_cache_over_seed() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let only = vec![experience(9, "Founder", "Initech", "2023-06", PRESENT)];
    let cache = Arc::new(MemoryCache::with_entry(
        EXPERIENCES_CACHE_KEY,
        serde_json::to_value(&only).unwrap(),
    ));

    let controller = loaded(&seed, &cache).await;

    assert_eq!(controller.experiences(), only.as_slice());
    assert_eq!(seed.fetches(), 0);
}

#[tokio::test]
async fn test_load_failure_reports_error_and_stays_unloaded() {
    let seed = Arc::new(FakeSeed::default());
    seed.set_failing(true);
    let cache = Arc::new(MemoryCache::new());
    let mut controller = ExperienceController::new(seed, cache, NoticeBoard::default());

    let err = controller.load().await.unwrap_err();

    assert!(matches!(err, ControllerError::SeedFetch { .. }));
    assert!(!controller.is_loaded());
    assert_eq!(
        controller.notices().latest().unwrap().message,
        "Error loading experiences"
    );
}

#[tokio::test]
async fn test_add_assigns_next_id_and_applies_defaults() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.begin_add();

    let added = controller
        .add(&draft("  Staff Engineer ", "Hooli", "2024-01"))
        .unwrap()
        .clone();

    assert_eq!(added.id, 3);
    assert_eq!(added.title, "Staff Engineer");
    assert_eq!(added.location, DEFAULT_LOCATION);
    assert_eq!(added.to, PRESENT);
    assert_eq!(added.description, DEFAULT_DESCRIPTION);
    assert!(!controller.is_adding());
    assert_eq!(controller.add_draft(), &ExperienceDraft::default());
    assert_eq!(cached(&cache).last(), Some(&added));
    assert_eq!(
        controller.notices().latest().unwrap().message,
        "Experience added and saved successfully!"
    );
}

#[tokio::test]
async fn test_add_to_empty_list_starts_at_one() {
    let seed = Arc::new(FakeSeed::new(Vec::new()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let added = controller.add(&draft("Intern", "Acme", "2018-06")).unwrap();

    assert_eq!(added.id, 1);
}

#[tokio::test]
async fn test_add_skips_ids_below_current_max_after_delete() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.delete(1, Confirmed::assume_yes()).unwrap();
    let added = controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    assert_eq!(added.id, 3);
}

#[tokio::test]
async fn test_add_never_reuses_deleted_max_id() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.delete(2, Confirmed::assume_yes()).unwrap();
    let added = controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    assert_eq!(added.id, 3);
}

#[tokio::test]
async fn test_deleted_max_id_stays_retired_across_reload() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let id = controller.add(&draft("Lead", "Acme", "2022-01")).unwrap().id;
    assert_eq!(id, 3);
    controller.delete(3, Confirmed::assume_yes()).unwrap();
    assert_eq!(
        cache.load(EXPERIENCE_HIGH_WATER_KEY).unwrap(),
        Some(serde_json::json!(3))
    );

    let mut fresh = loaded(&seed, &cache).await;
    let added = fresh.add(&draft("Architect", "Acme", "2023-01")).unwrap();

    assert_eq!(added.id, 4);
}

#[tokio::test]
async fn test_reset_to_seed_keeps_retired_ids_retired() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    controller
        .reset_to_seed(Confirmed::assume_yes())
        .await
        .unwrap();
    let added = controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    assert_eq!(added.id, 4);
}

#[tokio::test]
async fn test_add_fails_cleanly_when_ids_exhausted() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let full = vec![experience(u64::MAX, "Founder", "Initech", "2023-06", PRESENT)];
    let cache = Arc::new(MemoryCache::with_entry(
        EXPERIENCES_CACHE_KEY,
        serde_json::to_value(&full).unwrap(),
    ));
    let mut controller = loaded(&seed, &cache).await;

    let err = controller.add(&draft("Lead", "Acme", "2022-01")).unwrap_err();

    assert!(matches!(err, ControllerError::InvalidState { .. }));
    assert_eq!(controller.experiences(), full.as_slice());
    assert_eq!(cached(&cache), full);
    let notice = controller.notices().latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "No experience ids left to assign");
}

#[tokio::test]
async fn test_add_rejects_missing_fields_in_order() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let cases = [
        (draft("", "", ""), ExperienceField::Title),
        (draft("Lead", "  ", ""), ExperienceField::Company),
        (draft("Lead", "Acme", ""), ExperienceField::From),
    ];

    for (candidate, expected) in cases {
        let err = controller.add(&candidate).unwrap_err();
        assert_eq!(err.invalid_field(), Some(expected));
        let notice = controller.notices().latest().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, expected.validation_message());
    }

    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert_eq!(cached(&cache), seed_experiences());
}

#[tokio::test]
async fn test_begin_add_leaves_edit_mode() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.start_edit(1).unwrap();
    controller.begin_add();

    assert!(controller.is_adding());
    assert_eq!(controller.editing_id(), None);

    controller.add_draft_mut().title = "Draft".to_string();
    controller.cancel_add();
    assert!(!controller.is_adding());
    assert_eq!(controller.add_draft(), &ExperienceDraft::default());
}

#[tokio::test]
async fn test_start_edit_maps_present_to_empty() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.begin_add();

    let edit = controller.start_edit(2).unwrap().clone();

    assert_eq!(edit.title, "Senior Engineer");
    assert_eq!(edit.to, "");
    assert_eq!(controller.editing_id(), Some(2));
    assert!(!controller.is_adding());
}

#[tokio::test]
async fn test_start_edit_unknown_id_not_found() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let err = controller.start_edit(42).unwrap_err();

    assert!(matches!(err, ControllerError::NotFound { id: 42, .. }));
    assert_eq!(controller.editing_id(), None);
}

#[tokio::test]
async fn test_save_edit_replaces_in_place() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.start_edit(1).unwrap();
    controller.edit_draft_mut().title = "Principal Engineer".to_string();
    controller.edit_draft_mut().description = "  ".to_string();
    controller.commit_edit().unwrap();

    let first = &controller.experiences()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.title, "Principal Engineer");
    assert_eq!(first.to, "2021-02");
    assert_eq!(first.description, DEFAULT_DESCRIPTION);
    assert_eq!(controller.experiences()[1], seed_experiences()[1]);
    assert_eq!(controller.editing_id(), None);
    assert_eq!(cached(&cache)[0].title, "Principal Engineer");
    assert_eq!(
        controller.notices().latest().unwrap().message,
        "Experience updated and saved successfully!"
    );
}

#[tokio::test]
async fn test_save_edit_unknown_id_leaves_list_unchanged() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let err = controller
        .save_edit(77, &draft("Ghost", "Nowhere", "2020-01"))
        .unwrap_err();

    assert!(matches!(err, ControllerError::NotFound { id: 77, .. }));
    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert_eq!(cached(&cache), seed_experiences());
}

#[tokio::test]
async fn test_save_edit_rejects_blank_required_field() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.start_edit(2).unwrap();
    controller.edit_draft_mut().company = String::new();
    let err = controller.commit_edit().unwrap_err();

    assert_eq!(err.invalid_field(), Some(ExperienceField::Company));
    assert_eq!(controller.editing_id(), Some(2));
    assert_eq!(controller.experiences(), seed_experiences().as_slice());
}

#[tokio::test]
async fn test_save_edit_rejects_blank_title() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let err = controller
        .save_edit(1, &draft("   ", "Acme", "2019-01"))
        .unwrap_err();

    assert_eq!(err.invalid_field(), Some(ExperienceField::Title));
    let notice = controller.notices().latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, ExperienceField::Title.validation_message());
    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert_eq!(cached(&cache), seed_experiences());
}

#[tokio::test]
async fn test_save_edit_rejects_blank_from() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.start_edit(1).unwrap();
    controller.edit_draft_mut().from = " ".to_string();
    let err = controller.commit_edit().unwrap_err();

    assert_eq!(err.invalid_field(), Some(ExperienceField::From));
    assert_eq!(
        controller.notices().latest().unwrap().message,
        ExperienceField::From.validation_message()
    );
    assert_eq!(controller.editing_id(), Some(1));
    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert_eq!(cached(&cache), seed_experiences());
}

#[tokio::test]
async fn test_commit_edit_without_edit_mode_is_invalid_state() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    let err = controller.commit_edit().unwrap_err();

    assert!(matches!(err, ControllerError::InvalidState { .. }));
}

#[tokio::test]
async fn test_cancel_edit_discards_draft() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.start_edit(1).unwrap();
    controller.edit_draft_mut().title = "Changed".to_string();
    controller.cancel_edit();

    assert_eq!(controller.editing_id(), None);
    assert_eq!(controller.edit_draft(), &ExperienceDraft::default());
    assert_eq!(controller.experiences()[0].title, "Engineer");
}

#[tokio::test]
async fn test_delete_removes_and_writes_through() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.start_edit(2).unwrap();

    assert!(controller.delete(2, Confirmed::assume_yes()).unwrap());

    assert_eq!(controller.experiences(), &seed_experiences()[..1]);
    assert_eq!(cached(&cache), seed_experiences()[..1].to_vec());
    assert_eq!(controller.editing_id(), None);
    assert_eq!(
        controller.notices().latest().unwrap().message,
        "Experience deleted and saved successfully!"
    );
}

#[tokio::test]
async fn test_delete_absent_id_is_noop() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.notices_mut().drain();

    assert!(!controller.delete(5, Confirmed::assume_yes()).unwrap());

    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert!(controller.notices().is_empty());
}

#[test]
fn test_declined_confirmation_yields_no_token() {
    assert_eq!(Confirmed::from_user_answer(false), None);
    assert_eq!(
        Confirmed::from_user_answer(true),
        Some(Confirmed::assume_yes())
    );
}

#[tokio::test]
async fn test_reset_to_seed_replaces_list_and_cache() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.delete(1, Confirmed::assume_yes()).unwrap();
    controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();
    controller.begin_add();

    controller
        .reset_to_seed(Confirmed::assume_yes())
        .await
        .unwrap();

    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert_eq!(cached(&cache), seed_experiences());
    assert!(!controller.is_adding());
    assert_eq!(controller.editing_id(), None);
    assert_eq!(seed.fetches(), 2);
}

#[tokio::test]
async fn test_reset_failure_leaves_list_untouched() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;
    controller.delete(1, Confirmed::assume_yes()).unwrap();
    seed.set_failing(true);

    let err = controller
        .reset_to_seed(Confirmed::assume_yes())
        .await
        .unwrap_err();

    assert!(matches!(err, ControllerError::SeedFetch { .. }));
    assert_eq!(controller.experiences(), &seed_experiences()[1..]);
    assert_eq!(cached(&cache), seed_experiences()[1..].to_vec());
    assert_eq!(
        controller.notices().latest().unwrap().message,
        "Error resetting experiences. Please try again."
    );
}

#[tokio::test]
async fn test_cache_write_failure_is_warning_not_error() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::read_only());
    let mut controller = ExperienceController::new(seed, cache, NoticeBoard::default());

    controller.load().await.unwrap();
    assert_eq!(controller.experiences().len(), 2);
    let notice = controller.notices().latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.contains("Local storage is unavailable"));
    assert!(matches!(
        controller.last_cache_error(),
        Some(ControllerError::CacheWrite {
            source: CacheError::Unavailable { .. },
            ..
        })
    ));

    controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    assert_eq!(controller.experiences().len(), 3);
    let levels: Vec<NoticeLevel> = controller
        .notices_mut()
        .drain()
        .into_iter()
        .map(|n| n.level)
        .collect();
    assert_eq!(
        levels,
        vec![
            NoticeLevel::Warning,
            NoticeLevel::Warning,
            NoticeLevel::Success
        ]
    );
}

#[tokio::test]
async fn test_successful_write_clears_cache_error() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("cache");
    std::fs::write(&blocker, "not a directory").unwrap();
    let cache = Arc::new(FileCache::new(&blocker));
    let mut controller = ExperienceController::new(seed, cache, NoticeBoard::default());

    controller.load().await.unwrap();
    assert!(matches!(
        controller.last_cache_error(),
        Some(ControllerError::CacheWrite { .. })
    ));

    std::fs::remove_file(&blocker).unwrap();
    controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    assert!(controller.last_cache_error().is_none());
    assert!(blocker.join("experiences.json").exists());
}

#[tokio::test]
async fn test_unreadable_cache_is_never_overwritten() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let temp = TempDir::new().unwrap();
    let entry = temp.path().join("experiences.json");
    std::fs::create_dir(&entry).unwrap();
    let cache = Arc::new(FileCache::new(temp.path()));
    let mut controller = ExperienceController::new(seed, cache, NoticeBoard::default());

    controller.load().await.unwrap();

    assert_eq!(controller.experiences(), seed_experiences().as_slice());
    assert!(matches!(
        controller.last_cache_error(),
        Some(ControllerError::CacheRead {
            source: CacheError::FileRead { .. },
            ..
        })
    ));
    let notice = controller.notices().latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.contains("Unable to read the cache file"));

    controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();

    assert_eq!(controller.experiences().len(), 3);
    assert!(entry.is_dir());
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    let levels: Vec<NoticeLevel> = controller
        .notices_mut()
        .drain()
        .into_iter()
        .map(|n| n.level)
        .collect();
    assert_eq!(
        levels,
        vec![
            NoticeLevel::Warning,
            NoticeLevel::Warning,
            NoticeLevel::Success
        ]
    );
}

#[tokio::test]
async fn test_busy_while_seed_fetch_outstanding() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = ExperienceController::new(seed.clone(), cache, NoticeBoard::default());
    seed.busy.watch(controller.busy_handle());

    controller.load().await.unwrap();
    controller
        .reset_to_seed(Confirmed::assume_yes())
        .await
        .unwrap();

    assert_eq!(seed.busy.samples(), vec![true, true]);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_export_round_trips_through_document() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let controller = loaded(&seed, &cache).await;

    let json = controller.export().to_pretty_json().unwrap();
    let parsed = ExperienceDocument::from_json(&json).unwrap();

    assert_eq!(parsed.experiences, controller.experiences());
}

#[tokio::test]
async fn test_reload_returns_post_operation_list() {
    let seed = Arc::new(FakeSeed::new(seed_experiences()));
    let cache = Arc::new(MemoryCache::new());
    let mut controller = loaded(&seed, &cache).await;

    controller.add(&draft("Lead", "Acme", "2022-01")).unwrap();
    controller.start_edit(1).unwrap();
    controller.edit_draft_mut().location = "Berlin".to_string();
    controller.commit_edit().unwrap();
    controller.delete(2, Confirmed::assume_yes()).unwrap();
    let expected = controller.experiences().to_vec();

    let fresh = loaded(&seed, &cache).await;

    assert_eq!(fresh.experiences(), expected.as_slice());
    assert_eq!(seed.fetches(), 1);
}
