//! Prompt sources: where player input lines come from.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::categories::WORDS_PER_CATEGORY;

/// What the player is being asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prompt {
    /// Nothing selected yet: name a word.
    SelectFirst,
    /// Some words selected: name a word to select or deselect.
    SelectOrDeselect,
    /// Four selected: deselect one, or submit with an empty line.
    DeselectOrSubmit,
}

impl Prompt {
    /// The prompt matching a selection size.
    #[must_use]
    pub fn for_selection(selected: usize) -> Self {
        match selected {
            0 => Prompt::SelectFirst,
            n if n < WORDS_PER_CATEGORY => Prompt::SelectOrDeselect,
            _ => Prompt::DeselectOrSubmit,
        }
    }

    /// Text shown before reading a line.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Prompt::SelectFirst => "select a remaining word: ",
            Prompt::SelectOrDeselect => "select or deselect a remaining word: ",
            Prompt::DeselectOrSubmit => {
                "deselect a selected word or press enter to submit your selection: "
            }
        }
    }

    /// Message shown when a line is rejected.
    #[must_use]
    pub fn invalid_message(self) -> &'static str {
        match self {
            Prompt::SelectFirst | Prompt::SelectOrDeselect => {
                "invalid word (not in list of remaining words), try again"
            }
            Prompt::DeselectOrSubmit => "invalid input, try again",
        }
    }
}

/// A source of player input lines.
///
/// Returns `Ok(None)` when input is exhausted (end of file).
pub trait PromptSource {
    fn next_line(&mut self, prompt: Prompt) -> io::Result<Option<String>>;
}

/// Reads lines from a buffered reader, writing prompts to a writer.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt source over any reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the source, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Prompt source over the process's stdin and stdout.
pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stdout>;

impl StdinPrompt {
    /// Prompt on stdout, read from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSource for LinePrompt<R, W> {
    fn next_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt.text())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines; records every prompt it was shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    prompts: Vec<Prompt>,
}

impl ScriptedPrompt {
    /// Create a script from input lines, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PromptSource for ScriptedPrompt {
    fn next_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.prompts.push(prompt);
        Ok(self.lines.pop_front())
    }
}
