//! Category system: categories, authored pools, and built-in data.
//!
//! ## Key Types
//!
//! - `Category`: Immutable named group of exactly four words
//! - `PoolEntry`: Authored theme with any number of candidate words
//! - `CategoryPool`: Entry registry, sampled into categories per game
//!
//! Words are compared after `normalize_word` (trim + lowercase) everywhere.

pub mod builtin;
pub mod category;
pub mod pool;

pub use category::{normalize_word, Category, WORDS_PER_CATEGORY};
pub use pool::{CategoryPool, PoolEntry};
