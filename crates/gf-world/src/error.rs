//! World construction errors.

use gf_core::error::LevelError;
use thiserror::Error;

/// Failure to build a world.  Tick processing itself never errors; player
/// death and level completion are statuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("level rejected: {0}")]
    Level(#[from] LevelError),
}
