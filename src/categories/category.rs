//! Categories - the hidden groups a player has to find.
//!
//! A `Category` is immutable once created: a name and exactly
//! `WORDS_PER_CATEGORY` distinct, case-normalized words.

use serde::{Deserialize, Serialize};

use crate::core::SetupError;

/// Number of words in every category, and in every submitted guess.
pub const WORDS_PER_CATEGORY: usize = 4;

/// Normalize a word for comparison: trimmed and lowercased.
///
/// ```
/// use connections::categories::normalize_word;
///
/// assert_eq!(normalize_word("  Van Gogh "), "van gogh");
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// A named group of exactly four words.
///
/// ## Example
///
/// ```
/// use connections::categories::Category;
///
/// let fruit = Category::new("fruit", ["Apple", "banana", "orange", "grape"]).unwrap();
///
/// assert_eq!(fruit.name(), "fruit");
/// assert!(fruit.contains("apple"));
/// assert!(Category::new("fruit", ["apple", "apple", "pear", "plum"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CategoryData")]
pub struct Category {
    name: String,
    words: [String; WORDS_PER_CATEGORY],
}

impl Category {
    /// Create a category, normalizing its words.
    ///
    /// Fails if the name is blank, the word count is not four, or a word
    /// repeats after normalization.
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SetupError::EmptyCategoryName);
        }

        let words: Vec<String> = words.into_iter().map(|w| normalize_word(w.as_ref())).collect();
        let count = words.len();
        let words: [String; WORDS_PER_CATEGORY] =
            words.try_into().map_err(|_| SetupError::WrongWordCount {
                name: name.clone(),
                count,
                expected: WORDS_PER_CATEGORY,
            })?;

        let blank = words.iter().filter(|w| w.is_empty()).count();
        if blank > 0 {
            return Err(SetupError::WrongWordCount {
                name,
                count: count - blank,
                expected: WORDS_PER_CATEGORY,
            });
        }

        for (i, word) in words.iter().enumerate() {
            if words[..i].contains(word) {
                return Err(SetupError::DuplicateWord { word: word.clone() });
            }
        }

        Ok(Self { name, words })
    }

    /// Category name (shown once solved).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The four words, in authoring order.
    #[must_use]
    pub fn words(&self) -> &[String; WORDS_PER_CATEGORY] {
        &self.words
    }

    /// Check if a (normalized) word belongs to this category.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Check if `selection` is exactly this category's word set, in any order.
    ///
    /// Subsets and supersets never match.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, selection: &[S]) -> bool {
        selection.len() == WORDS_PER_CATEGORY
            && selection.iter().all(|w| self.contains(w.as_ref()))
            && self
                .words
                .iter()
                .all(|w| selection.iter().any(|s| s.as_ref() == w))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.words.join(", "))
    }
}

/// Unvalidated wire form; deserialization goes through `Category::new`.
#[derive(Deserialize)]
struct CategoryData {
    name: String,
    words: Vec<String>,
}

impl TryFrom<CategoryData> for Category {
    type Error = SetupError;

    fn try_from(data: CategoryData) -> Result<Self, Self::Error> {
        Category::new(data.name, data.words)
    }
}
