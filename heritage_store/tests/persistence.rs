//! Story persistence across store reopenings on a real profile directory.

use heritage_store::{
    load_stories, seed_stories, Category, FileStorage, FixedClock, StoragePort, StoreConfig, StoryDraft,
    StoryStore, DEFAULT_STORAGE_KEY,
};

fn open_profile(dir: &std::path::Path, now: i64) -> StoryStore<FileStorage, FixedClock> {
    let storage = FileStorage::open(dir).expect("profile dir");
    StoryStore::with_clock(storage, StoreConfig::default(), FixedClock::new(now))
}

#[test]
fn fresh_profile_shows_seed_stories() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_profile(dir.path(), 1_000);

    assert_eq!(store.stories(), seed_stories());
    assert_eq!(store.featured().len(), 2);
}

#[test]
fn submitted_story_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let mut store = open_profile(dir.path(), 1_000);
        store
            .submit(
                StoryDraft::new()
                    .with_title("Lohri bonfire")
                    .with_author("Harpreet")
                    .with_tags("Festival, Family")
                    .with_content("We threw sesame and peanuts into the fire and sang until midnight."),
            )
            .id
    };

    let store = open_profile(dir.path(), 2_000);
    assert_eq!(store.len(), 3);

    let story = store.get(id).expect("story persisted");
    assert_eq!(story.author, "Harpreet");
    assert_eq!(store.search("lohri", Category::Festival).len(), 1);
    assert!(store.search("lohri", Category::Cuisine).is_empty());
}

#[test]
fn deleted_story_stays_deleted() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_profile(dir.path(), 1_000);
        assert!(store.delete(seed_stories()[0].id));
    }

    let store = open_profile(dir.path(), 2_000);
    assert_eq!(store.len(), 1);
    assert_eq!(store.stories()[0], seed_stories()[1]);
}

#[test]
fn reopen_after_clock_rewind_keeps_ids_unique() {
    let dir = tempfile::tempdir().unwrap();

    let first = open_profile(dir.path(), 50_000).submit(StoryDraft::new()).id;
    let second = open_profile(dir.path(), 10).submit(StoryDraft::new()).id;

    assert!(second > first);
}

#[test]
fn corrupt_profile_falls_back_to_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();
    storage.write(DEFAULT_STORAGE_KEY, "[{\"id\": \"oops\"").unwrap();

    assert_eq!(load_stories(&storage, DEFAULT_STORAGE_KEY), seed_stories());

    let store = StoryStore::open(storage, StoreConfig::default());
    assert_eq!(store.stories(), seed_stories());
}

#[test]
fn config_file_selects_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("rootprints.toml");
    std::fs::write(&config_path, "storage_key = \"grandma_archive\"\n").unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    let storage = FileStorage::open(dir.path().join("profile")).unwrap();
    let mut store = StoryStore::with_clock(storage, config, FixedClock::new(5));
    store.submit(StoryDraft::new().with_title("Kite day"));

    assert!(dir.path().join("profile/grandma_archive.json").exists());
    assert!(!dir.path().join("profile/rootprints_stories.json").exists());
}
