//! Built-in word pools.
//!
//! - `default_pool`: eight themes with 6-16 candidate words each; every game
//!   samples four themes and four words per theme.
//! - `classic_categories`: four fixed categories, always the same words.

use super::category::Category;
use super::pool::{CategoryPool, PoolEntry};
use crate::core::SetupError;

/// The standard sampled pool.
#[must_use]
pub fn default_pool() -> CategoryPool {
    CategoryPool::from_entries(vec![
        PoolEntry::new(
            "fruit",
            [
                "apple", "banana", "orange", "strawberry", "grape", "watermelon", "pineapple",
                "mango", "peach", "cherry", "plum",
            ],
        ),
        PoolEntry::new(
            "programming",
            [
                "c", "c++", "c#", "go", "html", "java", "php", "python", "ruby", "rust",
                "javascript", "css",
            ],
        ),
        PoolEntry::new(
            "sports",
            [
                "soccer", "basketball", "hockey", "tennis", "volleyball", "football", "mma",
                "baseball",
            ],
        ),
        PoolEntry::new(
            "subjects",
            [
                "philosophy", "geography", "psychology", "history", "archaeology",
                "anthropology", "chemistry", "biology", "physics", "economics", "math",
                "linguistics", "architecture", "education", "engineering", "medicine",
            ],
        ),
        PoolEntry::new(
            "technology",
            ["computer", "phone", "clock", "car", "airplane", "television", "camera"],
        ),
        PoolEntry::new(
            "artists",
            ["pollock", "da vinci", "michelangelo", "van gogh", "monet", "picasso"],
        ),
        PoolEntry::new(
            "books",
            [
                "harry potter", "lord of the rings", "percy jackson", "fablehaven",
                "game of thrones", "narnia",
            ],
        ),
        PoolEntry::new(
            "superheroes",
            [
                "batman", "superman", "captain america", "iron man", "wolverine", "thor", "hulk",
                "xavier", "wonder woman", "spider man",
            ],
        ),
    ])
}

/// The fixed four-category board.
pub fn classic_categories() -> Result<Vec<Category>, SetupError> {
    Ok(vec![
        Category::new("fruit", ["apple", "orange", "pineapple", "watermelon"])?,
        Category::new("programming languages", ["python", "java", "c", "assembly"])?,
        Category::new("sports", ["football", "basketball", "baseball", "volleyball"])?,
        Category::new("subjects", ["math", "science", "history", "art"])?,
    ])
}
