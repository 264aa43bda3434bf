//! Story definitions for the heritage archive.

mod category;
mod seed;

pub use category::*;
pub use seed::*;

use serde::{Deserialize, Serialize};

/// Number of content characters kept in an excerpt before the ellipsis.
pub const EXCERPT_LIMIT: usize = 120;

/// Title given to a submission that left the title blank.
pub const DEFAULT_TITLE: &str = "Untitled memory";

/// Author given to a submission that left the name blank.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Tag given to a submission without any tags.
pub const UNCATEGORIZED_TAG: &str = "Uncategorized";

/// Story identifier. Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub i64);

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single heritage memory as it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,

    /// Truncated preview of `content`, at most 123 characters.
    pub excerpt: String,

    /// Data URI or URL of the attached picture.
    pub image: String,
    pub content: String,
}

impl Story {
    /// Build a story from a draft, filling every blank field with its default.
    pub fn from_draft(id: StoryId, draft: StoryDraft, placeholder_image: &str) -> Self {
        let title = non_blank_or(draft.title, DEFAULT_TITLE);
        let author = non_blank_or(draft.author, DEFAULT_AUTHOR);
        let image = draft
            .image
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        Self {
            id,
            title,
            author,
            tags: parse_tags(&draft.tags),
            excerpt: excerpt_of(&draft.content),
            image,
            content: draft.content,
        }
    }

    /// Check if this story carries exactly the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match against the title and excerpt.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.excerpt.to_lowercase().contains(needle_lower)
    }
}

/// Raw story submission, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,

    /// Comma separated tag list as typed by the user.
    pub tags: String,
    pub content: String,
    pub image: Option<String>,
}

impl StoryDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Clear every field, as the share form's reset button does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Derive the preview text for a story body.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn excerpt_of(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Split a comma separated tag string into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if tags.is_empty() {
        vec![UNCATEGORIZED_TAG.to_string()]
    } else {
        tags
    }
}

fn non_blank_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
