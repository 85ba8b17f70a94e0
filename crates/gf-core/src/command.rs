//! Player input commands.
//!
//! Keyboard polling is an external collaborator's job; the core receives the
//! result as at most one discrete command per tick.

use crate::geom::Direction;

/// The single optional command honored during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Fire the flamethrower in the facing direction (costs one flame charge).
    Fire,
    /// Deploy a timed mine at the player's position (costs one mine).
    PlaceMine,
    /// Consume a vaccine, clearing any infection (costs one vaccine).
    Vaccine,
    /// Face the given direction and step if the destination is unblocked.
    /// Facing updates even when the step itself is blocked.
    Move(Direction),
}
