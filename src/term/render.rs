//! Board rendering.
//!
//! Turns a `GameSnapshot` into text: solved categories first, as labeled
//! colored rows in solve order, then the remaining words as a four-column
//! grid with selected cells highlighted, then the lives indicator.
//!
//! With colors off, selected cells are bracketed instead of highlighted.

use crossterm::style::{Color, Stylize};

use crate::categories::WORDS_PER_CATEGORY;
use crate::core::GameSnapshot;

/// Background colors for solved rows, in solve order.
const SOLVED_COLORS: [Color; 6] = [
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
];

/// Background for selected cells.
const SELECTED_COLOR: Color = Color::AnsiValue(242);

const HEART: &str = "\u{2661} ";

/// Renders snapshots to strings.
#[derive(Clone, Copy, Debug)]
pub struct BoardRenderer {
    color: bool,
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl BoardRenderer {
    /// Create a renderer; `color` enables ANSI styling.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renderer without any escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Render the whole board.
    #[must_use]
    pub fn render(&self, snap: &GameSnapshot) -> String {
        let width = snap.max_word_len();
        let cell = width + 2;
        let row_len = cell * WORDS_PER_CATEGORY + (WORDS_PER_CATEGORY - 1);
        let mut lines = Vec::new();

        lines.push(format!("_{}_", "_".repeat(row_len)));

        for (i, category) in snap.solved.iter().enumerate() {
            let bg = SOLVED_COLORS[i % SOLVED_COLORS.len()];
            let label = format!(" {} ", pad(category.name(), row_len - 2));

            lines.push(format!("|{}|", self.paint("-".repeat(row_len), Some(bg), false)));
            lines.push(format!("|{}|", self.paint(label, Some(bg), true)));
            lines.push(format!("|{}|", self.paint("-".repeat(row_len), Some(bg), false)));
            lines.push(self.row(category.words().iter().map(|w| (w.as_str(), Some(bg))), width, None));
            lines.push(self.row(
                category.words().iter().map(|_| ("", Some(bg))),
                width,
                Some('_'),
            ));
        }

        for chunk in snap.remaining_words.chunks(WORDS_PER_CATEGORY) {
            let cells: Vec<(&str, Option<Color>)> = chunk
                .iter()
                .map(|w| {
                    let bg = snap.is_selected(w).then_some(SELECTED_COLOR);
                    (w.as_str(), bg)
                })
                .collect();

            lines.push(self.row(cells.iter().map(|&(_, bg)| ("", bg)), width, None));
            lines.push(self.row(cells.iter().copied(), width, None));
            lines.push(self.row(cells.iter().map(|&(_, bg)| ("", bg)), width, Some('_')));
        }

        lines.push(self.lives_line(snap.lives));
        lines.join("\n")
    }

    /// `remaining lives: ♡ ♡ ♡`
    #[must_use]
    pub fn lives_line(&self, lives: u8) -> String {
        let hearts = HEART.repeat(lives as usize);
        if self.color {
            format!("remaining lives: {}", hearts.red())
        } else {
            format!("remaining lives: {hearts}")
        }
    }

    /// One grid line of `|`-separated cells.
    ///
    /// `fill` draws a border line instead of the cell text.
    fn row<'a, I>(&self, cells: I, width: usize, fill: Option<char>) -> String
    where
        I: Iterator<Item = (&'a str, Option<Color>)>,
    {
        let parts: Vec<String> = cells
            .map(|(word, bg)| {
                let text = match fill {
                    Some(c) => c.to_string().repeat(width + 2),
                    None if !self.color && bg == Some(SELECTED_COLOR) => {
                        format!("[{}]", pad(word, width))
                    }
                    None => format!(" {} ", pad(word, width)),
                };
                self.paint(text, bg, false)
            })
            .collect();
        format!("|{}|", parts.join("|"))
    }

    fn paint(&self, text: String, bg: Option<Color>, bold: bool) -> String {
        match bg {
            Some(bg) if self.color && bold => text.on(bg).bold().to_string(),
            Some(bg) if self.color => text.on(bg).to_string(),
            _ => text,
        }
    }
}

/// Left-align `text` in `width` columns.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
