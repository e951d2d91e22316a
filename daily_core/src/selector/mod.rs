//! Daily Selector - picks one label per category per calendar date.
//!
//! The selection works as follows:
//! 1. **Seed**: Prefix the category tag and a separator to the date (`g-2024-01-01`)
//! 2. **Hash**: Run the base-31 polynomial hash over the seed
//! 3. **Index**: Reduce the hash modulo the candidate list length
//! 4. **Assemble**: Collect one label per category into a [`DailySelection`]
//!
//! Every category is hashed on its own, so no state is shared between picks
//! and every server instance resolves the same elements for the same day.

mod seed;

pub use seed::*;

use chrono::{DateTime, NaiveDate};
use daily_catalog::{
    default_tag, CatalogConfig, CatalogError, CategoryTable, GENRE, ITEM, PLOT_DEVICE,
    POETRY_GENRE, WEATHER,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SelectionError;

/// Format used for dates inside seeds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The picks of one day: category name to selected label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySelection {
    pub date: String,
    pub picks: BTreeMap<String, String>,
}

impl DailySelection {
    fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            picks: BTreeMap::new(),
        }
    }

    /// Get the label picked for a category.
    pub fn get(&self, category: &str) -> Option<&str> {
        self.picks.get(category).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    fn require(&self, category: &str) -> Result<String, SelectionError> {
        self.get(category).map(str::to_string).ok_or_else(|| {
            SelectionError::InvalidConfiguration(format!(
                "catalog has no '{}' category",
                category
            ))
        })
    }
}

/// Resolve one label per category for `date`.
///
/// Each entry pairs a category name with its candidates; the seed tag is the
/// first character of the name. Fails if any candidate list is empty.
pub fn resolve_daily_elements<K, L, T>(
    date: &str,
    categories: impl IntoIterator<Item = (K, L)>,
) -> Result<DailySelection, SelectionError>
where
    K: AsRef<str>,
    L: AsRef<[T]>,
    T: AsRef<str>,
{
    let mut selection = DailySelection::new(date);

    for (name, labels) in categories {
        let name = name.as_ref();
        let seed = SeedKey::new(&default_tag(name), date);
        let label = pick_daily(labels.as_ref(), seed.as_str()).map_err(|_| {
            SelectionError::InvalidConfiguration(format!(
                "candidate list for category '{}' is empty",
                name
            ))
        })?;
        selection
            .picks
            .insert(name.to_string(), label.as_ref().to_string());
    }

    Ok(selection)
}

/// Resolve a validated table. Cannot fail since every list is non-empty.
pub fn resolve_table(date: &str, table: &CategoryTable) -> DailySelection {
    let mut selection = DailySelection::new(date);

    for category in table {
        let seed = SeedKey::new(&category.tag, date);
        let label = category.candidates.pick_daily(seed.as_str());
        selection
            .picks
            .insert(category.name.clone(), label.to_string());
    }

    selection
}

/// Format a calendar date the way seeds expect it.
pub fn format_daily_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Best-effort normalisation of a client date to `YYYY-MM-DD`.
///
/// Plain dates and RFC 3339 timestamps are reduced to their calendar date;
/// anything else is only trimmed and used as-is.
pub fn normalize_daily_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return format_daily_date(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return format_daily_date(timestamp.date_naive());
    }
    raw.to_string()
}

/// The elements an episode is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeElements {
    pub genre: String,
    pub weather: String,
    pub item: String,
    pub plot_device: String,
}

impl EpisodeElements {
    pub fn from_selection(selection: &DailySelection) -> Result<Self, SelectionError> {
        Ok(Self {
            genre: selection.require(GENRE)?,
            weather: selection.require(WEATHER)?,
            item: selection.require(ITEM)?,
            plot_device: selection.require(PLOT_DEVICE)?,
        })
    }
}

/// The elements a poem is built from. The genre is always `daily`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoetryElements {
    pub genre: String,
    pub item: String,
}

impl PoetryElements {
    pub fn from_selection(selection: &DailySelection) -> Result<Self, SelectionError> {
        Ok(Self {
            genre: POETRY_GENRE.to_string(),
            item: selection.require(ITEM)?,
        })
    }
}

/// Selector over an injected category table.
#[derive(Debug, Clone)]
pub struct DailySelector {
    table: CategoryTable,
}

impl DailySelector {
    /// Create a selector over the given table.
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    /// Selector over the built-in episode catalog.
    pub fn episode() -> Result<Self, CatalogError> {
        Ok(Self::new(daily_catalog::episode_catalog()?))
    }

    /// Selector over the built-in poetry catalog.
    pub fn poetry() -> Result<Self, CatalogError> {
        Ok(Self::new(daily_catalog::poetry_catalog()?))
    }

    /// Selector over a catalog read from config.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(config.into_table()?))
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Resolve every category for `date`.
    pub fn resolve(&self, date: &str) -> DailySelection {
        let selection = resolve_table(date, &self.table);
        tracing::trace!(date, picks = selection.len(), "Resolved daily elements");
        selection
    }

    /// Resolve every category for a calendar date.
    pub fn resolve_date(&self, date: NaiveDate) -> DailySelection {
        self.resolve(&format_daily_date(date))
    }

    /// Pick a single category for `date`, if the category exists.
    pub fn pick(&self, category: &str, date: &str) -> Option<&str> {
        self.table.get(category).map(|c| {
            let seed = SeedKey::new(&c.tag, date);
            c.candidates.pick_daily(seed.as_str())
        })
    }

    /// Resolve the typed episode elements for `date`.
    pub fn episode_elements(&self, date: &str) -> Result<EpisodeElements, SelectionError> {
        EpisodeElements::from_selection(&self.resolve(date))
    }

    /// Resolve the typed poetry elements for `date`.
    pub fn poetry_elements(&self, date: &str) -> Result<PoetryElements, SelectionError> {
        PoetryElements::from_selection(&self.resolve(date))
    }
}
