//! Category pools - authored word lists that games are sampled from.
//!
//! A `PoolEntry` is a theme with any number (at least four) of candidate
//! words. `CategoryPool::draw` picks a few entries and four words from each,
//! producing the `Category` values a game is built from.

use std::path::Path;

use log::{debug, trace};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::category::{normalize_word, Category, WORDS_PER_CATEGORY};
use crate::core::{GameRng, SetupError};

/// A themed word list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Theme name (becomes the category name).
    pub name: String,

    /// Candidate words. Four are sampled per game.
    pub words: Vec<String>,
}

impl PoolEntry {
    /// Create a new entry.
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Registry of pool entries.
///
/// ## Example
///
/// ```
/// use connections::categories::{CategoryPool, PoolEntry};
/// use connections::core::GameRng;
///
/// let mut pool = CategoryPool::new();
/// pool.register(PoolEntry::new("fruit", ["apple", "banana", "grape", "mango", "plum"]));
/// pool.register(PoolEntry::new("sports", ["tennis", "hockey", "golf", "rugby"]));
///
/// let mut rng = GameRng::new(1);
/// let drawn = pool.draw(&mut rng, 2).unwrap();
/// assert_eq!(drawn.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryPool {
    entries: Vec<PoolEntry>,
}

impl CategoryPool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from entries.
    #[must_use]
    pub fn from_entries(entries: Vec<PoolEntry>) -> Self {
        Self { entries }
    }

    /// Parse a pool from a JSON array of `{ "name": ..., "words": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        let entries: Vec<PoolEntry> = serde_json::from_str(json)?;
        let pool = Self::from_entries(entries);
        pool.validate()?;
        Ok(pool)
    }

    /// Read and parse a JSON pool file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pool = Self::from_json_str(&json)?;
        debug!("loaded {} pool entries from {}", pool.len(), path.display());
        Ok(pool)
    }

    /// Add an entry.
    pub fn register(&mut self, entry: PoolEntry) {
        self.entries.push(entry);
    }

    /// Find an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PoolEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries.
    pub fn iter(&self) -> impl Iterator<Item = &PoolEntry> {
        self.entries.iter()
    }

    /// Check every entry: non-empty name, at least four words, no word
    /// repeated within an entry after normalization.
    pub fn validate(&self) -> Result<(), SetupError> {
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(SetupError::EmptyCategoryName);
            }

            let mut seen = FxHashSet::default();
            for word in &entry.words {
                let word = normalize_word(word);
                if word.is_empty() {
                    continue;
                }
                if !seen.insert(word.clone()) {
                    return Err(SetupError::DuplicateWord { word });
                }
            }

            if seen.len() < WORDS_PER_CATEGORY {
                return Err(SetupError::CategoryTooSmall {
                    name: entry.name.clone(),
                    available: seen.len(),
                });
            }
        }
        Ok(())
    }

    /// Sample `count` distinct entries and four words from each.
    ///
    /// Words already drawn for an earlier category are skipped, so the
    /// result is unique across categories even if themes overlap.
    pub fn draw(&self, rng: &mut GameRng, count: usize) -> Result<Vec<Category>, SetupError> {
        let picked = rng
            .sample_indices(self.entries.len(), count)
            .ok_or(SetupError::PoolTooSmall {
                available: self.entries.len(),
                requested: count,
            })?;

        let mut word_rng = rng.for_context("words");
        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut categories = Vec::with_capacity(count);

        for idx in picked {
            let entry = &self.entries[idx];

            let mut candidates: Vec<String> = Vec::with_capacity(entry.words.len());
            for word in entry.words.iter().map(|w| normalize_word(w)) {
                if !word.is_empty() && !used.contains(&word) && !candidates.contains(&word) {
                    candidates.push(word);
                }
            }

            let chosen = word_rng
                .sample_indices(candidates.len(), WORDS_PER_CATEGORY)
                .ok_or_else(|| SetupError::CategoryTooSmall {
                    name: entry.name.clone(),
                    available: candidates.len(),
                })?;

            let words: Vec<&String> = chosen.iter().map(|&i| &candidates[i]).collect();
            let category = Category::new(entry.name.clone(), words)?;
            trace!("drew {}", category);

            used.extend(category.words().iter().cloned());
            categories.push(category);
        }

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_pool() -> CategoryPool {
        CategoryPool::from_entries(vec![
            PoolEntry::new("fruit", ["apple", "banana", "orange", "grape", "mango"]),
            PoolEntry::new("sports", ["tennis", "hockey", "golf", "rugby"]),
            PoolEntry::new("colors", ["red", "green", "blue", "orange", "pink"]),
        ])
    }

    #[test]
    fn test_register_and_get() {
        let mut pool = CategoryPool::new();
        assert!(pool.is_empty());

        pool.register(PoolEntry::new("fruit", ["apple", "banana", "orange", "grape"]));
        assert_eq!(pool.len(), 1);
        assert!(pool.get("fruit").is_some());
        assert!(pool.get("cars").is_none());
    }

    #[test]
    fn test_draw_produces_unique_words() {
        let pool = small_pool();

        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let drawn = pool.draw(&mut rng, 3).unwrap();
            assert_eq!(drawn.len(), 3);

            let mut all: Vec<&String> = drawn.iter().flat_map(|c| c.words().iter()).collect();
            all.sort();
            all.dedup();
            assert_eq!(all.len(), 12, "seed {seed} produced a repeated word");
        }
    }

    #[test]
    fn test_draw_is_deterministic() {
        let pool = small_pool();
        let a = pool.draw(&mut GameRng::new(9), 2).unwrap();
        let b = pool.draw(&mut GameRng::new(9), 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_too_many() {
        let pool = small_pool();
        let err = pool.draw(&mut GameRng::new(1), 4).unwrap_err();
        assert!(matches!(err, SetupError::PoolTooSmall { available: 3, requested: 4 }));
    }

    #[test]
    fn test_draw_exhausted_by_overlap() {
        // "orange" can be used once only, leaving one entry short.
        let pool = CategoryPool::from_entries(vec![
            PoolEntry::new("a", ["orange", "w", "x", "y"]),
            PoolEntry::new("b", ["orange", "p", "q", "r"]),
        ]);
        let err = pool.draw(&mut GameRng::new(1), 2).unwrap_err();
        assert!(matches!(err, SetupError::CategoryTooSmall { available: 3, .. }));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "fruit", "words": ["apple", "banana", "orange", "grape"]},
            {"name": "pets",  "words": ["cat", "dog", "fish", "bird", "hamster"]}
        ]"#;
        let pool = CategoryPool::from_json_str(json).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get("pets").unwrap().words.len(), 5);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            CategoryPool::from_json_str("not json"),
            Err(SetupError::Json(_))
        ));
        assert!(matches!(
            CategoryPool::from_json_str(r#"[{"name": "tiny", "words": ["a", "b"]}]"#),
            Err(SetupError::CategoryTooSmall { available: 2, .. })
        ));
        assert!(matches!(
            CategoryPool::from_json_str(r#"[{"name": "dup", "words": ["a", "A", "b", "c", "d"]}]"#),
            Err(SetupError::DuplicateWord { .. })
        ));
    }

    #[test]
    fn test_from_missing_path() {
        let err = CategoryPool::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SetupError::Io { .. }));
    }
}
