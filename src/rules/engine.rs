//! The game engine: selection and submission rules.
//!
//! `GameEngine` owns the `GameState` and is the only thing that changes it.
//! It exposes two operations:
//!
//! - `toggle_selection`: add a word to, or remove it from, the selection
//! - `submit_selection`: check four selected words against the categories
//!
//! Both are deterministic. All randomness is spent in the constructor.
//!
//! Input words are normalized (trim + lowercase) by the engine, so callers
//! may pass raw text.

use log::{debug, info, trace};
use rustc_hash::FxHashSet;

use crate::categories::{normalize_word, Category, WORDS_PER_CATEGORY};
use crate::core::{
    GameConfig, GameError, GamePhase, GameResult, GameRng, GameSnapshot, GameState, Move,
    MoveOutcome, MoveRecord, SelectionResult, SetupError, SubmitResult,
};

/// A single game in progress.
///
/// ## Example
///
/// ```
/// use connections::categories::Category;
/// use connections::core::{GameRng, SubmitResult};
/// use connections::rules::GameEngine;
///
/// let categories = vec![
///     Category::new("fruit", ["apple", "banana", "orange", "grape"]).unwrap(),
///     Category::new("pets", ["cat", "dog", "fish", "bird"]).unwrap(),
/// ];
/// let mut engine = GameEngine::new(categories, &GameRng::new(7), 4).unwrap();
///
/// for word in ["apple", "banana", "orange", "grape"] {
///     engine.toggle_selection(word).unwrap();
/// }
/// let result = engine.submit_selection().unwrap();
/// assert!(matches!(result, SubmitResult::Correct { .. }));
/// assert_eq!(engine.remaining_words().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Start a game from explicit categories.
    ///
    /// Words must be unique across all categories. The board order is drawn
    /// from `rng`'s `"board"` stream, so the same seed gives the same board.
    pub fn new(categories: Vec<Category>, rng: &GameRng, lives: u8) -> Result<Self, SetupError> {
        if categories.is_empty() {
            return Err(SetupError::NoCategories);
        }
        if lives == 0 {
            return Err(SetupError::InvalidSetting {
                key: "lives",
                value: lives.to_string(),
            });
        }

        let mut seen = FxHashSet::default();
        for word in categories.iter().flat_map(|c| c.words().iter()) {
            if !seen.insert(word.as_str()) {
                return Err(SetupError::DuplicateWord { word: word.clone() });
            }
        }

        let mut words: Vec<String> = categories
            .iter()
            .flat_map(|c| c.words().iter().cloned())
            .collect();
        rng.for_context("board").shuffle(&mut words);

        debug!(
            "new game: seed={} categories={} lives={}",
            rng.seed(),
            categories.len(),
            lives
        );
        for category in &categories {
            trace!("hidden category {}", category);
        }

        Ok(Self {
            state: GameState::new(categories, words, lives, rng.seed()),
        })
    }

    /// Start a game as described by a configuration.
    ///
    /// Uses `config.seed`, or a freshly drawn seed when none is set.
    pub fn from_config(config: &GameConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = GameRng::new(seed);
        let categories = config
            .pool
            .categories(&mut rng.for_context("categories"), config.categories_per_game)?;

        Self::new(categories, &rng, config.lives)
    }

    // === Operations ===

    /// Select a word, or deselect it if already selected.
    ///
    /// ## Errors
    ///
    /// - `GameOver`: the game has ended
    /// - `InvalidWord`: the word is not on the board
    /// - `SelectionFull`: four other words are already selected
    ///
    /// The state is unchanged on error.
    pub fn toggle_selection(&mut self, word: &str) -> Result<SelectionResult, GameError> {
        self.ensure_running()?;

        let word = normalize_word(word);
        if !self.state.is_remaining(&word) {
            return Err(GameError::InvalidWord(word));
        }

        let result = if let Some(pos) = self.state.selected_words.iter().position(|w| *w == word) {
            self.state.selected_words.remove(pos);
            SelectionResult::Deselected
        } else if self.state.selected_words.len() == WORDS_PER_CATEGORY {
            return Err(GameError::SelectionFull);
        } else {
            self.state.selected_words.push(word.clone());
            SelectionResult::Selected
        };

        debug!("{:?} {:?}", result, word);
        self.record(Move::Toggle(word), MoveOutcome::Selection(result));
        Ok(result)
    }

    /// Submit the four selected words as a guess.
    ///
    /// A guess is correct only if the selection is exactly the word set of a
    /// remaining category. A correct guess never costs a life. The selection
    /// is cleared after every accepted submission.
    ///
    /// ## Errors
    ///
    /// - `GameOver`: the game has ended
    /// - `NotReady`: fewer than four words are selected
    pub fn submit_selection(&mut self) -> Result<SubmitResult, GameError> {
        self.ensure_running()?;

        let selected = self.state.selected_words.len();
        if selected != WORDS_PER_CATEGORY {
            return Err(GameError::NotReady { selected });
        }

        let result = match self.find_matching_category() {
            Some(idx) => {
                let category = self.state.remaining_categories.remove(idx);
                self.state.remaining_words.retain(|w| !category.contains(w));
                self.state.solved_categories.push_back(category.clone());
                self.state.selected_words.clear();

                if self.state.remaining_categories.is_empty() {
                    SubmitResult::Won { category }
                } else {
                    SubmitResult::Correct { category }
                }
            }
            None => {
                self.state.lives = self.state.lives.saturating_sub(1);
                self.state.selected_words.clear();

                if self.state.lives == 0 {
                    SubmitResult::Lost
                } else {
                    SubmitResult::Incorrect {
                        lives: self.state.lives,
                    }
                }
            }
        };

        match &result {
            SubmitResult::Won { .. } => info!("game won with {} lives left", self.state.lives),
            SubmitResult::Lost => info!("game lost"),
            other => debug!("submission: {:?}", other),
        }

        self.record(Move::Submit, MoveOutcome::Submission(result.clone()));
        Ok(result)
    }

    /// Apply a recorded move.
    pub fn apply(&mut self, mv: &Move) -> Result<MoveOutcome, GameError> {
        match mv {
            Move::Toggle(word) => self.toggle_selection(word).map(MoveOutcome::Selection),
            Move::Submit => self.submit_selection().map(MoveOutcome::Submission),
        }
    }

    // === Queries ===

    /// Full game state (read-only).
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot for display.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Unsolved words, in board order.
    #[must_use]
    pub fn remaining_words(&self) -> &[String] {
        self.state.remaining_words()
    }

    /// Selected words, in selection order.
    #[must_use]
    pub fn selected_words(&self) -> &[String] {
        self.state.selected_words()
    }

    /// Categories not yet found.
    #[must_use]
    pub fn remaining_categories(&self) -> &[Category] {
        self.state.remaining_categories()
    }

    /// Solved categories, in solve order.
    #[must_use]
    pub fn solved_categories(&self) -> &im::Vector<Category> {
        self.state.solved_categories()
    }

    /// Lives left.
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.state.lives()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        self.state.history()
    }

    // === Internals ===

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.state.phase().is_terminal() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Index of the remaining category whose words are exactly the selection.
    ///
    /// Words are unique across categories, so at most one can match.
    fn find_matching_category(&self) -> Option<usize> {
        self.state
            .remaining_categories
            .iter()
            .position(|c| c.matches(self.state.selected_words.as_slice()))
    }

    fn record(&mut self, mv: Move, outcome: MoveOutcome) {
        let sequence = self.state.history.len() as u32;
        self.state
            .history
            .push_back(MoveRecord::new(mv, outcome, sequence));
        debug_assert!(self.state.invariants_hold());
    }
}
