//! Root's scripted responses.

use super::{Matcher, ReplyRule};

pub const SHARE_REPLY: &str = "You can share a story by visiting Share → filling title, description, and uploading an image or audio. Start with a memory that matters to you.";

pub const FESTIVAL_REPLY: &str = "Festivals connect families — tell me which festival you'd like to explore and I can show related stories or suggest questions to ask elders.";

pub const FOOD_REPLY: &str = "Food is a living memory — write down the recipe and who used to cook it. We can store it as a 'monsoon recipe' memory.";

pub const GREETING_REPLY: &str =
    "Hi! Tell me about a tradition from your hometown — I'll help you turn it into a shareable story.";

pub const FALLBACK_REPLY: &str = "That's beautiful — can you tell me a detail or a memory? For example: 'I remember my grandmother's song' or 'We used to...'";

/// The built-in rules, highest priority first.
pub fn scripted_rules() -> Vec<ReplyRule> {
    vec![
        ReplyRule::new("share", Matcher::all_of(["how", "share"]), SHARE_REPLY),
        ReplyRule::new(
            "festival",
            Matcher::any_of(["festival", "diwali", "pongal"]),
            FESTIVAL_REPLY,
        ),
        ReplyRule::new("food", Matcher::any_of(["recipe", "food", "khichdi"]), FOOD_REPLY),
        ReplyRule::new("greeting", Matcher::any_of(["hello", "hi"]), GREETING_REPLY),
    ]
}
