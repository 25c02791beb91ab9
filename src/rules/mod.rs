//! Game rules.
//!
//! `GameEngine` enforces selection and grouping:
//! - Which words can be selected or deselected
//! - Whether four selected words form a category
//! - Lives, win and loss
//!
//! Front ends only ever talk to the engine; they never touch `GameState`.

pub mod engine;

pub use engine::GameEngine;
