//! Built-in stories shown when a profile has nothing saved yet.

use super::{Story, StoryId};

/// Build the two seed stories.
pub fn seed_stories() -> Vec<Story> {
    vec![
        Story {
            id: StoryId(1),
            title: "Diwali — Lights at Home".to_string(),
            author: "Asha".to_string(),
            tags: vec!["Festival".to_string(), "Family".to_string()],
            excerpt: "Every year our house would be lit with diyas and the smell of cardamom sweets filled the air..."
                .to_string(),
            image: "https://images.unsplash.com/photo-1542736667-069246bdbc53?auto=format&fit=crop&w=800&q=60"
                .to_string(),
            content: "Diwali in our family meant visiting elders, preparing sweets together, and telling stories about how our ancestors used to celebrate in the village..."
                .to_string(),
        },
        Story {
            id: StoryId(2),
            title: "Monsoon Recipes: Grandma's Khichdi".to_string(),
            author: "Rohit".to_string(),
            tags: vec!["Cuisine".to_string(), "Family".to_string()],
            excerpt: "A simple khichdi that chased away the rainy day blues...".to_string(),
            image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&w=800&q=60"
                .to_string(),
            content: "When the first monsoon drops arrive, my grandma would light the clay stove and make khichdi with jaggery and ghee..."
                .to_string(),
        },
    ]
}
