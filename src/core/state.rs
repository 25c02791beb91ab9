//! Game state.
//!
//! ## GameState
//!
//! Everything a game knows:
//! - Remaining (unsolved) categories and their words, in board order
//! - Current selection (at most four words, insertion ordered)
//! - Solved categories, in solve order
//! - Lives left
//! - Move history
//!
//! The state is owned by `GameEngine` and only changes through its two
//! operations. Everything here is read-only from outside the crate.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::MoveRecord;
use crate::categories::{Category, WORDS_PER_CATEGORY};

/// Where a game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fewer than four words selected.
    Selecting,
    /// Exactly four words selected; a submission is possible.
    ReadyToSubmit,
    /// Every category found.
    Won,
    /// No lives left.
    Lost,
}

impl GamePhase {
    /// Check if no further moves are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

/// Complete game state.
///
/// Uses `im` vectors for the append-only parts so snapshots and clones stay
/// cheap as the history grows.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub(crate) remaining_categories: Vec<Category>,

    /// Board order, fixed at construction; only ever shrinks.
    pub(crate) remaining_words: Vec<String>,

    pub(crate) selected_words: SmallVec<[String; WORDS_PER_CATEGORY]>,

    pub(crate) solved_categories: Vector<Category>,

    pub(crate) lives: u8,

    pub(crate) starting_lives: u8,

    pub(crate) total_words: usize,

    pub(crate) seed: u64,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the initial state: nothing selected or solved, full lives.
    ///
    /// `remaining_words` must already be in board order.
    pub(crate) fn new(
        categories: Vec<Category>,
        remaining_words: Vec<String>,
        lives: u8,
        seed: u64,
    ) -> Self {
        Self {
            total_words: remaining_words.len(),
            remaining_categories: categories,
            remaining_words,
            selected_words: SmallVec::new(),
            solved_categories: Vector::new(),
            lives,
            starting_lives: lives,
            seed,
            history: Vector::new(),
        }
    }

    /// Categories not yet found.
    #[must_use]
    pub fn remaining_categories(&self) -> &[Category] {
        &self.remaining_categories
    }

    /// Unsolved words, in board order.
    #[must_use]
    pub fn remaining_words(&self) -> &[String] {
        &self.remaining_words
    }

    /// Selected words, in selection order.
    #[must_use]
    pub fn selected_words(&self) -> &[String] {
        &self.selected_words
    }

    /// Solved categories, in solve order.
    #[must_use]
    pub fn solved_categories(&self) -> &Vector<Category> {
        &self.solved_categories
    }

    /// Lives left.
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Lives at game start.
    #[must_use]
    pub fn starting_lives(&self) -> u8 {
        self.starting_lives
    }

    /// Number of words on the board at game start.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Seed the board was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Check if a word is on the board.
    #[must_use]
    pub fn is_remaining(&self, word: &str) -> bool {
        self.remaining_words.iter().any(|w| w == word)
    }

    /// Check if a word is selected.
    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selected_words.iter().any(|w| w == word)
    }

    /// Current phase, derived from the fields above.
    ///
    /// A won board is checked first; a correct submission never costs a
    /// life, so `Won` and `Lost` cannot both apply.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.remaining_categories.is_empty() {
            GamePhase::Won
        } else if self.lives == 0 {
            GamePhase::Lost
        } else if self.selected_words.len() == WORDS_PER_CATEGORY {
            GamePhase::ReadyToSubmit
        } else {
            GamePhase::Selecting
        }
    }

    /// Result if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase() {
            GamePhase::Won => Some(GameResult::Won),
            GamePhase::Lost => Some(GameResult::Lost),
            _ => None,
        }
    }

    /// Check the structural invariants:
    /// - the board holds exactly the remaining categories' words
    /// - the selection is a duplicate-free subset of the board, at most four
    /// - solved and remaining words together account for every word
    /// - lives never exceed the starting value
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let board_matches = self.remaining_words.len()
            == WORDS_PER_CATEGORY * self.remaining_categories.len()
            && self
                .remaining_categories
                .iter()
                .flat_map(|c| c.words().iter())
                .all(|w| self.is_remaining(w));

        let selection_ok = self.selected_words.len() <= WORDS_PER_CATEGORY
            && self.selected_words.iter().all(|w| self.is_remaining(w))
            && self
                .selected_words
                .iter()
                .enumerate()
                .all(|(i, w)| !self.selected_words[..i].contains(w));

        let solved_off_board = self
            .solved_categories
            .iter()
            .flat_map(|c| c.words().iter())
            .all(|w| !self.is_remaining(w));

        let conserved = self.solved_categories.len() * WORDS_PER_CATEGORY
            + self.remaining_words.len()
            == self.total_words;

        board_matches
            && selection_ok
            && solved_off_board
            && conserved
            && self.lives <= self.starting_lives
    }
}
