//! `gf-session` — score, lives, and level progression around the world
//! engine.
//!
//! The world simulates one level at a time and reports score deltas and
//! terminal statuses; this crate owns everything that outlives a level:
//! the running score, the remaining lives, the current level number, and
//! the decision of which layout to load next.  Levels come from a
//! [`LevelSource`] implementation so drivers can serve them from memory,
//! files, or anything else.

pub mod session;


pub use session::{LevelSource, Outcome, STARTING_LIVES, Session};
