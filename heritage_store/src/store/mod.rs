//! Story Store - the persisted list of heritage stories.
//!
//! The free functions are pure reducers over a story slice plus the two
//! persistence calls. `StoryStore` bundles them with a storage backend and
//! mirrors the list into storage after every mutation.

use tracing::{debug, warn};

use crate::clock::{Clock, IdGenerator, SystemClock};
use crate::config::StoreConfig;
use crate::storage::StoragePort;
use crate::story::{seed_stories, Category, Story, StoryDraft, StoryId};

/// Read the story list stored under `key`.
///
/// Falls back to the seed stories when the key is missing, the backend
/// fails, the JSON does not parse as a story list, or the list is empty.
pub fn load_stories(storage: &impl StoragePort, key: &str) -> Vec<Story> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no saved stories, using seed data");
            return seed_stories();
        }
        Err(e) => {
            warn!(key, error = %e, "story storage unreadable, using seed data");
            return seed_stories();
        }
    };

    match serde_json::from_str::<Vec<Story>>(&raw) {
        Ok(stories) if stories.is_empty() => {
            debug!(key, "saved story list is empty, using seed data");
            seed_stories()
        }
        Ok(stories) => {
            debug!(key, count = stories.len(), "loaded stories");
            stories
        }
        Err(e) => {
            warn!(key, error = %e, "saved stories are corrupt, using seed data");
            seed_stories()
        }
    }
}

/// Overwrite the story list stored under `key`.
///
/// A failed write is logged and otherwise ignored.
pub fn save_stories(storage: &mut impl StoragePort, key: &str, stories: &[Story]) {
    let raw = match serde_json::to_string(stories) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %e, "could not serialize stories");
            return;
        }
    };

    match storage.write(key, &raw) {
        Ok(()) => debug!(key, count = stories.len(), "saved stories"),
        Err(e) => warn!(key, error = %e, "could not save stories"),
    }
}

/// Return a new list with the story built from `draft` at the front.
pub fn add_story(stories: &[Story], id: StoryId, draft: StoryDraft, config: &StoreConfig) -> Vec<Story> {
    let story = Story::from_draft(id, draft, &config.placeholder_image);

    let mut updated = Vec::with_capacity(stories.len() + 1);
    updated.push(story);
    updated.extend_from_slice(stories);
    updated
}

/// Return a new list without the story with `id`. Unknown ids change nothing.
pub fn remove_story(stories: &[Story], id: StoryId) -> Vec<Story> {
    stories.iter().filter(|s| s.id != id).cloned().collect()
}

/// Stories whose title or excerpt contains `text` (case-insensitive) and
/// that pass the category filter, in list order.
pub fn query_stories<'a>(stories: &'a [Story], text: &str, category: Category) -> Vec<&'a Story> {
    let needle = text.to_lowercase();
    stories
        .iter()
        .filter(|s| s.matches_text(&needle) && category.admits(s))
        .collect()
}

/// The first `count` stories.
pub fn featured_stories(stories: &[Story], count: usize) -> &[Story] {
    &stories[..count.min(stories.len())]
}

/// Look up a story by id.
pub fn find_story(stories: &[Story], id: StoryId) -> Option<&Story> {
    stories.iter().find(|s| s.id == id)
}

/// The story list of one profile, kept in sync with its storage backend.
pub struct StoryStore<S: StoragePort, C: Clock = SystemClock> {
    storage: S,
    config: StoreConfig,
    ids: IdGenerator<C>,
    stories: Vec<Story>,
}

impl<S: StoragePort> StoryStore<S> {
    /// Open the store on `storage` using the system clock for ids.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: StoragePort, C: Clock> StoryStore<S, C> {
    /// Open the store with a specific clock.
    pub fn with_clock(storage: S, config: StoreConfig, clock: C) -> Self {
        let mut store = Self {
            storage,
            config,
            ids: IdGenerator::new(clock),
            stories: Vec::new(),
        };
        store.reload();
        store
    }

    /// Re-read the list from storage.
    pub fn reload(&mut self) {
        self.stories = load_stories(&self.storage, &self.config.storage_key);
        for story in &self.stories {
            self.ids.observe(story.id);
        }
    }

    /// Write the current list to storage.
    pub fn save(&mut self) {
        save_stories(&mut self.storage, &self.config.storage_key, &self.stories);
    }

    /// All stories, newest first.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add a story from a draft and persist the list. Returns the new story.
    pub fn submit(&mut self, draft: StoryDraft) -> &Story {
        let id = self.ids.next_id();
        self.stories = add_story(&self.stories, id, draft, &self.config);
        debug!(%id, "story submitted");
        self.save();
        &self.stories[0]
    }

    /// Delete a story and persist the list. Returns whether it existed.
    pub fn delete(&mut self, id: StoryId) -> bool {
        let updated = remove_story(&self.stories, id);
        if updated.len() == self.stories.len() {
            debug!(%id, "delete of unknown story ignored");
            return false;
        }

        self.stories = updated;
        debug!(%id, "story deleted");
        self.save();
        true
    }

    /// Filter the list by text and category.
    pub fn search(&self, text: &str, category: Category) -> Vec<&Story> {
        query_stories(&self.stories, text, category)
    }

    /// Stories for the home page preview.
    pub fn featured(&self) -> &[Story] {
        featured_stories(&self.stories, self.config.featured_count)
    }

    pub fn get(&self, id: StoryId) -> Option<&Story> {
        find_story(&self.stories, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::DEFAULT_STORAGE_KEY;
    use crate::storage::{MemoryStorage, StorageError};

    /// Backend whose every call fails.
    struct BrokenStorage;

    impl StoragePort for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }
    }

    fn test_store(storage: MemoryStorage) -> StoryStore<MemoryStorage, FixedClock> {
        StoryStore::with_clock(storage, StoreConfig::default(), FixedClock::new(1_700_000_000_000))
    }

    #[test]
    fn test_load_missing_key_gives_seeds() {
        let stories = load_stories(&MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(stories, seed_stories());
    }

    #[test]
    fn test_load_corrupt_data_gives_seeds() {
        for raw in ["{not json", "[]", "{\"id\": 1}", "[{\"title\": \"no id\"}]", "null"] {
            let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, raw);
            assert_eq!(load_stories(&storage, DEFAULT_STORAGE_KEY), seed_stories(), "input: {raw}");
        }
    }

    #[test]
    fn test_load_unreadable_storage_gives_seeds() {
        assert_eq!(load_stories(&BrokenStorage, DEFAULT_STORAGE_KEY), seed_stories());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let config = StoreConfig::default();
        let stories = add_story(
            &seed_stories(),
            StoryId(99),
            StoryDraft::new().with_title("Folk songs").with_tags("Folklore"),
            &config,
        );

        save_stories(&mut storage, DEFAULT_STORAGE_KEY, &stories);
        assert_eq!(load_stories(&storage, DEFAULT_STORAGE_KEY), stories);
    }

    #[test]
    fn test_save_to_broken_storage_is_silent() {
        save_stories(&mut BrokenStorage, DEFAULT_STORAGE_KEY, &seed_stories());
    }

    #[test]
    fn test_add_prepends() {
        let before = seed_stories();
        let after = add_story(&before, StoryId(3), StoryDraft::new(), &StoreConfig::default());

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0].id, StoryId(3));
        assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let before = seed_stories();
        assert_eq!(remove_story(&before, StoryId(12345)), before);
    }

    #[test]
    fn test_remove_known_id() {
        let after = remove_story(&seed_stories(), StoryId(1));
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, StoryId(2));
    }

    #[test]
    fn test_query_empty_all_returns_everything() {
        let stories = seed_stories();
        let found = query_stories(&stories, "", Category::All);

        assert_eq!(found.len(), stories.len());
        assert!(found.iter().zip(&stories).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_query_text_is_case_insensitive() {
        let stories = seed_stories();

        let found = query_stories(&stories, "KHICHDI", Category::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, StoryId(2));

        // matches the excerpt, not the title
        let found = query_stories(&stories, "cardamom", Category::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, StoryId(1));
    }

    #[test]
    fn test_query_ignores_content() {
        let stories = seed_stories();
        assert!(query_stories(&stories, "jaggery", Category::All).is_empty());
    }

    #[test]
    fn test_query_requires_text_and_tag() {
        let stories = seed_stories();

        assert_eq!(query_stories(&stories, "", Category::Family).len(), 2);
        assert_eq!(query_stories(&stories, "", Category::Cuisine).len(), 1);
        assert!(query_stories(&stories, "diwali", Category::Cuisine).is_empty());
        assert!(query_stories(&stories, "", Category::Folklore).is_empty());
    }

    #[test]
    fn test_featured_and_find() {
        let stories = seed_stories();

        assert_eq!(featured_stories(&stories, 1).len(), 1);
        assert_eq!(featured_stories(&stories, 10).len(), 2);
        assert_eq!(find_story(&stories, StoryId(2)).map(|s| s.author.as_str()), Some("Rohit"));
        assert!(find_story(&stories, StoryId(3)).is_none());
    }

    #[test]
    fn test_store_submit_persists() {
        let mut store = test_store(MemoryStorage::new());
        assert_eq!(store.len(), 2);

        let story = store.submit(StoryDraft::new().with_title("Onam boat race"));
        assert_eq!(story.id, StoryId(1_700_000_000_000));
        assert_eq!(story.title, "Onam boat race");

        let storage = store.into_storage();
        let saved = load_stories(&storage, DEFAULT_STORAGE_KEY);
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].title, "Onam boat race");
    }

    #[test]
    fn test_store_rapid_submits_get_unique_ids() {
        let mut store = test_store(MemoryStorage::new());

        let first = store.submit(StoryDraft::new()).id;
        let second = store.submit(StoryDraft::new()).id;

        assert_ne!(first, second);
        assert_eq!(store.stories()[0].id, second);
    }

    #[test]
    fn test_store_delete() {
        let mut store = test_store(MemoryStorage::new());

        assert!(!store.delete(StoryId(404)));
        assert!(store.storage().is_empty());

        assert!(store.delete(StoryId(1)));
        assert_eq!(store.len(), 1);
        assert!(store.get(StoryId(1)).is_none());

        let saved = load_stories(store.storage(), DEFAULT_STORAGE_KEY);
        assert_eq!(saved, store.stories());
    }

    #[test]
    fn test_store_delete_last_story_reloads_seeds() {
        let mut store = test_store(MemoryStorage::new());
        store.delete(StoryId(1));
        store.delete(StoryId(2));
        assert!(store.is_empty());

        store.reload();
        assert_eq!(store.stories(), seed_stories());
    }

    #[test]
    fn test_store_search_and_featured() {
        let mut store = test_store(MemoryStorage::new());
        store.submit(StoryDraft::new().with_title("Bihu dances").with_tags("Festival"));

        let festival = store.search("", Category::Festival);
        assert_eq!(festival.len(), 2);
        assert_eq!(festival[0].title, "Bihu dances");

        assert_eq!(store.featured().len(), 2);
        assert_eq!(store.featured()[0].title, "Bihu dances");
    }

    #[test]
    fn test_store_submit_after_max_id_story() {
        let mut max_story = seed_stories().remove(0);
        max_story.id = StoryId(i64::MAX);
        let raw = serde_json::to_string(&vec![max_story]).unwrap();
        let mut store = test_store(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, raw));

        let first = store.submit(StoryDraft::new()).id;
        let second = store.submit(StoryDraft::new()).id;

        assert_eq!(first, StoryId(i64::MAX - 1));
        assert_eq!(second, StoryId(i64::MAX - 2));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_store_on_broken_storage() {
        let mut store = StoryStore::with_clock(BrokenStorage, StoreConfig::default(), FixedClock::new(1));
        assert_eq!(store.stories(), seed_stories());

        store.submit(StoryDraft::new());
        assert_eq!(store.len(), 3);
    }
}
