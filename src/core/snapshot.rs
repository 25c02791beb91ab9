//! Read-only snapshot of a game, for rendering and comparison.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::categories::Category;

/// Owned copy of everything a display needs.
///
/// Pure projection of `GameState`: two states with the same board,
/// selection, solved list and lives produce equal snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Unsolved words, in board order.
    pub remaining_words: Vec<String>,
    /// Selected words, in selection order.
    pub selected_words: Vec<String>,
    /// Solved categories, in solve order.
    pub solved: Vec<Category>,
    pub lives: u8,
    pub starting_lives: u8,
    pub phase: GamePhase,
}

impl GameSnapshot {
    /// Check if a word is currently selected.
    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selected_words.iter().any(|w| w == word)
    }

    /// Longest word anywhere on the board, solved or not.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.remaining_words
            .iter()
            .chain(self.solved.iter().flat_map(|c| c.words().iter()))
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            remaining_words: state.remaining_words().to_vec(),
            selected_words: state.selected_words().to_vec(),
            solved: state.solved_categories().iter().cloned().collect(),
            lives: state.lives(),
            starting_lives: state.starting_lives(),
            phase: state.phase(),
        }
    }
}
