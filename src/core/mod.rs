//! Core engine types: state, moves, snapshots, RNG, configuration, errors.
//!
//! This module holds the data the rules operate on. The rules themselves
//! live in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{Move, MoveOutcome, MoveRecord, SelectionResult, SubmitResult};
pub use config::{GameConfig, PoolSource, DEFAULT_CATEGORIES, DEFAULT_LIVES};
pub use error::{GameError, SetupError};
pub use rng::GameRng;
pub use snapshot::GameSnapshot;
pub use state::{GamePhase, GameResult, GameState};
