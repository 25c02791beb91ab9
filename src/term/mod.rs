//! Terminal rendering of game snapshots.

pub mod render;

pub use render::BoardRenderer;
