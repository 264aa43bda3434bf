//! # Heritage Store
//!
//! The story layer of Rootprints. Holds heritage story records, the seed
//! stories shown on a fresh profile, and the store that mirrors the story
//! list into a key-value persistence backend.
//!
//! ## Core Components
//!
//! - **story**: Story records, drafts, categories and seed data
//! - **storage**: The storage port plus in-memory and file backends
//! - **store**: Load/save/add/remove/query over the persisted story list
//! - **clock**: Time source and collision-free story id generation
//! - **config**: Store configuration loaded from TOML
//!
//! The store never surfaces an error to its caller: unreadable or corrupt
//! data degrades to the seed stories, failed writes are logged.

pub mod clock;
pub mod config;
pub mod storage;
pub mod store;
pub mod story;

pub use clock::*;
pub use config::*;
pub use storage::*;
pub use store::*;
pub use story::*;
