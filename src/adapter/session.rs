//! The interactive game loop.
//!
//! `InputAdapter` asks a `PromptSource` for lines, checks them against the
//! engine's read-only view (membership only, no game rules), and forwards
//! them to `toggle_selection` / `submit_selection`. It keeps no game state
//! of its own and never reinterprets an engine result.

use std::io::{self, Write};

use log::debug;
use thiserror::Error;

use super::prompt::{Prompt, PromptSource};
use crate::categories::{normalize_word, WORDS_PER_CATEGORY};
use crate::core::{GameError, GameResult, SubmitResult};
use crate::rules::GameEngine;
use crate::term::BoardRenderer;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The game reached a terminal state.
    Finished(GameResult),
    /// Input ran out before the game ended.
    Abandoned,
}

/// Failure inside the game loop.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),

    /// The engine rejected a command the adapter had already checked.
    #[error("engine rejected input")]
    Engine(#[from] GameError),
}

/// A syntactically valid line, ready for the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Select or deselect this word.
    Toggle(String),
    /// Submit the four selected words.
    Submit,
}

/// Classify an input line against the current selection and board.
///
/// - four selected: empty line submits, a selected word deselects
/// - otherwise: a selected word deselects, a remaining word selects
///
/// Returns `None` for anything else.
#[must_use]
pub fn classify(line: &str, remaining: &[String], selected: &[String]) -> Option<Command> {
    let word = normalize_word(line);
    let is_selected = selected.iter().any(|w| *w == word);

    if selected.len() == WORDS_PER_CATEGORY {
        if word.is_empty() {
            Some(Command::Submit)
        } else if is_selected {
            Some(Command::Toggle(word))
        } else {
            None
        }
    } else if is_selected || remaining.iter().any(|w| *w == word) {
        Some(Command::Toggle(word))
    } else {
        None
    }
}

/// Message printed after a submission.
#[must_use]
pub fn submission_note(result: &SubmitResult) -> String {
    match result {
        SubmitResult::Correct { category } => format!("correct! you found \"{}\"", category.name()),
        SubmitResult::Incorrect { .. } => "words do not align as a group (1 life lost) :(".to_string(),
        SubmitResult::Won { .. } => "you have won the game, congratulations :)".to_string(),
        SubmitResult::Lost => "you have lost the game, better luck next time :(".to_string(),
    }
}

/// Line-based game loop.
///
/// ## Example
///
/// ```
/// use connections::adapter::{InputAdapter, ScriptedPrompt, SessionOutcome};
/// use connections::categories::Category;
/// use connections::core::{GameResult, GameRng};
/// use connections::rules::GameEngine;
/// use connections::term::BoardRenderer;
///
/// let fruit = Category::new("fruit", ["apple", "banana", "orange", "grape"]).unwrap();
/// let mut engine = GameEngine::new(vec![fruit], &GameRng::new(1), 4).unwrap();
///
/// let script = ScriptedPrompt::new(["apple", "banana", "orange", "grape", ""]);
/// let mut adapter = InputAdapter::new(script, Vec::new(), BoardRenderer::plain());
///
/// let outcome = adapter.run(&mut engine).unwrap();
/// assert_eq!(outcome, SessionOutcome::Finished(GameResult::Won));
/// ```
pub struct InputAdapter<P, W> {
    source: P,
    out: W,
    renderer: BoardRenderer,
}

impl<P: PromptSource, W: Write> InputAdapter<P, W> {
    /// Create an adapter reading from `source` and drawing to `out`.
    pub fn new(source: P, out: W, renderer: BoardRenderer) -> Self {
        Self {
            source,
            out,
            renderer,
        }
    }

    /// Take the adapter apart.
    pub fn into_parts(self) -> (P, W) {
        (self.source, self.out)
    }

    /// Play until the game ends or input runs out.
    pub fn run(&mut self, engine: &mut GameEngine) -> Result<SessionOutcome, AdapterError> {
        self.draw(engine, None)?;

        loop {
            if let Some(result) = engine.is_terminal() {
                return Ok(SessionOutcome::Finished(result));
            }

            let Some(command) = self.read_command(engine)? else {
                debug!("input exhausted, abandoning game");
                return Ok(SessionOutcome::Abandoned);
            };
            writeln!(self.out)?;

            let note = match command {
                Command::Toggle(word) => {
                    engine.toggle_selection(&word)?;
                    None
                }
                Command::Submit => Some(submission_note(&engine.submit_selection()?)),
            };

            self.draw(engine, note.as_deref())?;
        }
    }

    /// Prompt until a line classifies, or input ends.
    fn read_command(&mut self, engine: &GameEngine) -> Result<Option<Command>, AdapterError> {
        let prompt = Prompt::for_selection(engine.selected_words().len());

        loop {
            let Some(line) = self.source.next_line(prompt)? else {
                return Ok(None);
            };

            if let Some(command) = classify(&line, engine.remaining_words(), engine.selected_words()) {
                return Ok(Some(command));
            }

            debug!("rejected input {:?} at {:?}", line, prompt);
            writeln!(self.out, "{}", prompt.invalid_message())?;
        }
    }

    fn draw(&mut self, engine: &GameEngine, note: Option<&str>) -> io::Result<()> {
        writeln!(self.out, "{}", self.renderer.render(&engine.snapshot()))?;
        if let Some(note) = note {
            writeln!(self.out, "{note}")?;
        }
        self.out.flush()
    }
}
