//! Built-in candidate lists and the catalogs assembled from them.

use super::{Category, CategoryTable};
use crate::error::CatalogError;

pub const GENRE: &str = "genre";
pub const WEATHER: &str = "weather";
pub const ITEM: &str = "item";
pub const PLOT_DEVICE: &str = "plotDevice";

/// Poems are always written in this genre; it is never drawn from a list.
pub const POETRY_GENRE: &str = "daily";

/// Story genres.
pub const GENRES: &[&str] = &[
    "romance",
    "fantasy",
    "comedy",
    "drama",
    "historical",
    "healing",
    "mystery",
    "webNovel",
    "classic",
];

/// Weather conditions.
pub const WEATHERS: &[&str] = &[
    "sunny",
    "cloudy",
    "rainy",
    "snowy",
    "windy",
    "foggy",
    "stormy",
];

/// Objects woven into the story or poem.
pub const ITEMS: &[&str] = &[
    "letter",
    "oldPhoto",
    "musicBox",
    "umbrella",
    "book",
    "coffee",
    "pendant",
    "lantern",
    "flower",
    "watch",
    "Guiding lantern",
    "Lucky charm",
    "Healing crystal",
    "Golden key",
    "Treasure chest",
    "Feather of hope",
    "Enchanted harp",
    "Friendship bracelet",
    "Magic ink pen",
    "Love letter",
    "Eternal candle",
    "Blossoming flower",
    "Starlight pendant",
    "Dreamcatcher",
    "Rainbow shell",
    "Angel’s feather",
    "Music box",
    "Sunstone",
    "Healing herb pouch",
    "Storybook",
    "Sapphire ring",
    "Festival mask",
    "Dove feather",
    "Fortune cookie",
    "Secret diary",
    "Warm blanket",
    "Silver locket",
    "Harmony flute",
    "Memory photograph",
    "Garden seed packet",
    "Bright ribbon",
    "Lantern of wishes",
    "Guiding compass",
    "Magical paintbrush",
    "Lucky coin",
    "Celebration crown",
    "Bottle of fireflies",
    "Shooting star charm",
    "Happy balloon",
    "Blooming wreath",
    "Traveler’s map",
    "Peace bell",
    "Rainbow crystal",
    "Dream journal",
    "Songbird cage",
    "Hope scroll",
    "Candle of friendship",
    "Healing potion",
    "Birthday cake",
    "Sunrise painting",
];

/// Events that drive an episode.
pub const PLOT_DEVICES: &[&str] = &[
    "unexpectedMeeting",
    "missedMessage",
    "lostAndFound",
    "coincidence",
    "misunderstanding",
    "promise",
    "secretRevealed",
    "timeConstraint",
    "weatherTurn",
    "helpFromStranger",
    "Reunion with a friend",
    "Discovery of a hidden talent",
    "Receiving a heartfelt gift",
    "A letter of gratitude arrives",
    "Festival lights brighten the night",
    "Sharing a secret smile",
    "A song that brings healing",
    "Forgiveness after conflict",
    "Unexpected kindness from a stranger",
    "A dream that inspires courage",
    "A lucky encounter on the street",
    "Rediscovering an old passion",
    "A child’s laughter changing the mood",
    "Planting seeds of hope",
    "A rainbow after the rain",
    "A pet finding its way home",
    "Writing the first page of a journal",
    "Learning a new skill",
    "A surprise celebration",
    "Meeting a mentor",
    "Receiving a message of encouragement",
    "Helping someone in need",
    "A healing journey begins",
    "New friendship formed",
    "Overcoming fear with courage",
    "A warm meal shared together",
    "A community gathering",
    "Completing a meaningful project",
    "An unexpected reunion",
    "A festival dance",
    "Singing under the stars",
    "Building something with love",
    "Finding beauty in small details",
    "Promise of tomorrow",
    "A secret revealed brings joy",
    "Passing down wisdom",
    "A story told by a grandparent",
    "A journey of self-discovery",
    "A heartfelt confession",
    "First snowfall of the year",
    "Fireworks in celebration",
    "A guiding dream",
    "Someone returns safely",
    "Receiving good news",
    "Laughter shared around a fire",
    "Finding a long-lost letter",
    "Crafting something handmade",
    "Sharing a wish",
    "Hopeful sunrise",
    "Beginning a new chapter",
];

/// Catalog for daily episodes: genre, weather, item and plot device.
pub fn episode_catalog() -> Result<CategoryTable, CatalogError> {
    CategoryTable::from_categories([
        Category::with_tag(GENRE, "g", GENRES.iter().copied())?,
        Category::with_tag(WEATHER, "w", WEATHERS.iter().copied())?,
        Category::with_tag(ITEM, "i", ITEMS.iter().copied())?,
        Category::with_tag(PLOT_DEVICE, "p", PLOT_DEVICES.iter().copied())?,
    ])
}

/// Catalog for daily poems. Only the item varies; it shares the episode
/// item list and tag, so both content kinds feature the same item each day.
pub fn poetry_catalog() -> Result<CategoryTable, CatalogError> {
    CategoryTable::from_categories([Category::with_tag(ITEM, "i", ITEMS.iter().copied())?])
}
