//! Core error type.
//!
//! Level-data errors are fatal to the surrounding session: there is no retry
//! path, only a distinct terminal outcome.  Per-tick logical conditions
//! (player death, level completion) are statuses, not errors, and never
//! appear here.

use thiserror::Error;

/// Rejection reasons for level data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level grid has {got} cells, expected {expected}")]
    WrongCellCount { expected: usize, got: usize },

    #[error("level has no player start cell")]
    MissingPlayer,

    #[error("level has more than one player start cell")]
    DuplicatePlayer,
}
