//! Player moves and move history.
//!
//! A game only ever changes through two moves: toggling a word in or out of
//! the selection, and submitting a full selection. Accepted moves are
//! recorded with their outcome so a game can be replayed or inspected.

use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A player move.
///
/// ## Example
///
/// ```
/// use connections::core::Move;
///
/// let pick = Move::toggle("Apple");
/// assert_eq!(pick, Move::Toggle("apple".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Select or deselect a word.
    Toggle(String),
    /// Submit the four selected words.
    Submit,
}

impl Move {
    /// Create a toggle move for a (normalized) word.
    #[must_use]
    pub fn toggle(word: &str) -> Self {
        Move::Toggle(crate::categories::normalize_word(word))
    }
}

/// Result of an accepted `toggle_selection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionResult {
    /// The word was added to the selection.
    Selected,
    /// The word was removed from the selection.
    Deselected,
}

/// Result of an accepted `submit_selection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitResult {
    /// The selection was a category and others remain.
    Correct { category: Category },
    /// The selection was not a category; a life was lost but some remain.
    Incorrect { lives: u8 },
    /// The selection was the last remaining category.
    Won { category: Category },
    /// The selection was wrong and no lives remain.
    Lost,
}

impl SubmitResult {
    /// Check if this result ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmitResult::Won { .. } | SubmitResult::Lost)
    }

    /// Check if the submission matched a category.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, SubmitResult::Correct { .. } | SubmitResult::Won { .. })
    }
}

/// What an accepted move produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Selection(SelectionResult),
    Submission(SubmitResult),
}

/// A recorded move with its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move taken.
    pub mv: Move,

    /// What it produced.
    pub outcome: MoveOutcome,

    /// Position in the game's history (starting at 0).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, outcome: MoveOutcome, sequence: u32) -> Self {
        Self { mv, outcome, sequence }
    }
}
