//! `gf-world` — the world engine and tick protocol.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`world`]    | `World` — roster, player, the ordered tick protocol       |
//! | [`observer`] | `WorldObserver` trait + `NoopObserver`                    |
//! | [`status`]   | Fixed-column status line rendering                        |
//! | [`error`]    | `WorldError`                                              |
//!
//! # The tick protocol
//!
//! One call to [`World::tick`] runs, in order:
//!
//! 1. player update (skipped if already dead),
//! 2. every roster actor in registration order (dead actors no-op),
//! 3. dead-actor sweep (one `retain` pass; removal never happens mid-update),
//! 4. pending-spawn merge (mid-tick spawns first act next tick),
//! 5. terminal evaluation (`PlayerDied` / `LevelFinished` / `Continue`).
//!
//! Events accumulated during the tick drain to the observer at the end.
//! The loop is single-threaded and synchronous; the driver calls `tick`
//! until a terminal status comes back.

pub mod error;
pub mod observer;
pub mod status;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::WorldError;
pub use observer::{NoopObserver, WorldObserver};
pub use status::StatusValues;
pub use world::{TickStatus, World};
