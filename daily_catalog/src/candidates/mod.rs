//! Candidate lists and the category tables that group them.

mod defaults;

pub use defaults::*;

use serde::Serialize;
use std::collections::HashSet;

use crate::error::CatalogError;

/// An ordered, immutable, non-empty list of unique labels for one category.
///
/// The list can only be built through [`CandidateList::new`], so every value
/// of this type is already known to be non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateList {
    labels: Vec<String>,
}

impl CandidateList {
    /// Validate and build a candidate list. `category` is only used for error context.
    pub fn new<I, S>(category: &str, labels: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(CatalogError::EmptyCandidateList {
                category: category.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(CatalogError::DuplicateCandidate {
                    category: category.to_string(),
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels })
    }

    /// Number of labels. Never zero.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Check whether a label belongs to this list.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// One selectable category: a name, the short tag used in seeds, and its candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    /// Discriminator prefixed to the date when building a seed (e.g. `g` for genre).
    pub tag: String,
    pub candidates: CandidateList,
}

impl Category {
    /// Create a category whose tag is the first character of its name.
    pub fn new<I, S>(name: impl Into<String>, labels: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let tag = default_tag(&name);
        Self::with_tag(name, tag, labels)
    }

    /// Create a category with an explicit discriminator tag.
    pub fn with_tag<I, S>(
        name: impl Into<String>,
        tag: impl Into<String>,
        labels: I,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let tag = tag.into();
        if name.trim().is_empty() || tag.trim().is_empty() {
            return Err(CatalogError::BlankCategory(name));
        }
        let candidates = CandidateList::new(&name, labels)?;
        Ok(Self {
            name,
            tag,
            candidates,
        })
    }
}

/// Default discriminator: the first character of the category name.
pub fn default_tag(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// An ordered set of categories keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting repeated category names.
    pub fn from_categories(
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, CatalogError> {
        let mut table = Self::new();
        for category in categories {
            table.insert(category)?;
        }
        Ok(table)
    }

    /// Add a category. Fails if the name is already present.
    pub fn insert(&mut self, category: Category) -> Result<(), CatalogError> {
        if self.get(&category.name).is_some() {
            return Err(CatalogError::DuplicateCategory(category.name));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Get a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
