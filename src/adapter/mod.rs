//! Input adapter: the line-based loop between a player and the engine.
//!
//! - `PromptSource`: where lines come from (stdin, or a script in tests)
//! - `InputAdapter`: validates lines syntactically and forwards them
//!
//! The adapter holds no game state; it reads the engine's view before every
//! prompt.

pub mod prompt;
pub mod session;

pub use prompt::{LinePrompt, Prompt, PromptSource, ScriptedPrompt, StdinPrompt};
pub use session::{classify, submission_note, AdapterError, Command, InputAdapter, SessionOutcome};
