//! Error types.
//!
//! - `GameError`: rejected engine operations. Always recoverable; the game
//!   state is untouched when one is returned.
//! - `SetupError`: invalid categories, pools or configuration, raised before
//!   a game exists.

use std::path::PathBuf;

use thiserror::Error;

/// A rejected `toggle_selection` / `submit_selection` call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The word is not among the remaining words.
    #[error("\"{0}\" is not a remaining word")]
    InvalidWord(String),

    /// Four words are already selected.
    #[error("selection is full")]
    SelectionFull,

    /// Submission attempted without exactly four selected words.
    #[error("cannot submit with {selected} selected words")]
    NotReady { selected: usize },

    /// The game has already been won or lost.
    #[error("game is over")]
    GameOver,
}

/// Failure while building categories, pools or a game.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("category \"{name}\" has {count} words, expected {expected}")]
    WrongWordCount {
        name: String,
        count: usize,
        expected: usize,
    },

    #[error("word \"{word}\" appears more than once")]
    DuplicateWord { word: String },

    #[error("category name is empty")]
    EmptyCategoryName,

    #[error("a game needs at least one category")]
    NoCategories,

    #[error("pool has {available} categories, {requested} requested")]
    PoolTooSmall { available: usize, requested: usize },

    #[error("category \"{name}\" has only {available} unused words")]
    CategoryTooSmall { name: String, available: usize },

    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed category pool")]
    Json(#[from] serde_json::Error),
}
