//! Category filter used when browsing stories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Story;

/// The closed set of browse filters.
///
/// `All` matches every story; the others match stories carrying the tag
/// with the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    All,
    Festival,
    Cuisine,
    Folklore,
    Family,
}

impl Category {
    /// Every category, in the order the filter menu lists them.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Festival,
        Category::Cuisine,
        Category::Folklore,
        Category::Family,
    ];

    /// Display label, which is also the tag the category matches.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Festival => "Festival",
            Category::Cuisine => "Cuisine",
            Category::Folklore => "Folklore",
            Category::Family => "Family",
        }
    }

    /// Check if a story passes this filter.
    pub fn admits(&self, story: &Story) -> bool {
        match self {
            Category::All => true,
            other => story.has_tag(other.label()),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
