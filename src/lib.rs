//! # connections
//!
//! A word-grouping puzzle engine: a shuffled board of words hides a few
//! four-word categories, and the player finds them by selecting and
//! submitting four words at a time before running out of lives.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `GameEngine` owns the `GameState` and changes it
//!    only through `toggle_selection` and `submit_selection`.
//!
//! 2. **Deterministic**: All randomness is drawn from an instance-owned,
//!    seeded `GameRng` at construction. Same seed, same board.
//!
//! 3. **Read-only front ends**: Rendering works from a `GameSnapshot`; the
//!    input adapter only checks membership and forwards words.
//!
//! ## Modules
//!
//! - `core`: State, moves, snapshots, RNG, configuration, errors
//! - `categories`: Categories, word pools, built-in data
//! - `rules`: The game engine
//! - `term`: Board rendering
//! - `adapter`: Line-based input loop

pub mod adapter;
pub mod categories;
pub mod core;
pub mod rules;
pub mod term;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GamePhase, GameResult, GameRng, GameSnapshot, GameState, Move,
    MoveOutcome, MoveRecord, PoolSource, SelectionResult, SetupError, SubmitResult,
};

pub use crate::categories::{normalize_word, Category, CategoryPool, PoolEntry, WORDS_PER_CATEGORY};

pub use crate::rules::GameEngine;

pub use crate::term::BoardRenderer;

pub use crate::adapter::{InputAdapter, PromptSource, ScriptedPrompt, SessionOutcome, StdinPrompt};
