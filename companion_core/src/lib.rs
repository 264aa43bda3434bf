//! # Companion Core
//!
//! Root, the scripted cultural companion of Rootprints. Maps a user's chat
//! line to a canned reply through an ordered keyword rule table, and
//! delivers replies into a chat transcript after a short "typing" pause.
//!
//! ## Core Components
//!
//! - **reply**: Ordered keyword rules, first match wins
//! - **chat**: Messages, the append-only transcript and chat sessions
//! - **typing**: Randomized typing delay before a reply shows up
//! - **config**: Companion configuration loaded from TOML

pub mod chat;
pub mod config;
pub mod reply;
pub mod typing;

pub use chat::*;
pub use config::*;
pub use reply::*;
pub use typing::*;
