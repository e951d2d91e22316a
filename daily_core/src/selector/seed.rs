//! Seed keys and the polynomial hash that turns them into list indices.

use daily_catalog::CandidateList;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Separator between a category tag and the date in a seed key.
pub const SEED_SEPARATOR: char = '-';

/// Multiplier of the polynomial string hash.
const HASH_BASE: u32 = 31;

/// Hash input for one category on one date, e.g. `g-2024-01-01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedKey(String);

impl SeedKey {
    /// Build the seed for a category tag and a date.
    pub fn new(tag: &str, date: &str) -> Self {
        let mut seed = String::with_capacity(tag.len() + 1 + date.len());
        seed.push_str(tag);
        seed.push(SEED_SEPARATOR);
        seed.push_str(date);
        Self(seed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hash(&self) -> u32 {
        seed_hash(&self.0)
    }
}

impl std::fmt::Display for SeedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base-31 polynomial hash over the code points of `seed`, wrapping at 2^32.
///
/// For seeds made of BMP characters (every date string) this equals the
/// classic `h = h * 31 + charCode` hash computed with unsigned 32-bit overflow.
pub fn seed_hash(seed: &str) -> u32 {
    seed.chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(HASH_BASE).wrapping_add(c as u32))
}

/// Index into a list of `len` elements for the given hash. `len` must be non-zero.
fn index_for(hash: u32, len: usize) -> usize {
    (u64::from(hash) % len as u64) as usize
}

/// Pick one element of `list` for `seed`.
///
/// The same `(list, seed)` pair yields the same element on every call,
/// process and machine. An empty list is a configuration error.
pub fn pick_daily<'a, T: AsRef<str>>(list: &'a [T], seed: &str) -> Result<&'a T, SelectionError> {
    if list.is_empty() {
        return Err(SelectionError::InvalidConfiguration(format!(
            "cannot pick from an empty candidate list (seed '{}')",
            seed
        )));
    }

    Ok(&list[index_for(seed_hash(seed), list.len())])
}

/// Infallible daily pick for lists already validated as non-empty.
pub trait DailyPick {
    fn pick_daily(&self, seed: &str) -> &str;
}

impl DailyPick for CandidateList {
    fn pick_daily(&self, seed: &str) -> &str {
        let labels = self.as_slice();
        &labels[index_for(seed_hash(seed), labels.len())]
    }
}
