//! `gf-core` — foundational types for the `gridfall` simulation core.
//!
//! This crate is a dependency of every other `gf-*` crate.  It intentionally
//! has no `gf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`geom`]    | `Point`, `Direction`, tile-box containment        |
//! | [`level`]   | `Tile` codes, validated `LevelLayout` grid        |
//! | [`command`] | `Command` — the per-tick player input             |
//! | [`events`]  | `WorldEvent`, `SoundCue` side-channel             |
//! | [`rng`]     | `WorldRng` (deterministic, seed-driven)           |
//! | [`config`]  | `WorldConfig`                                     |
//! | [`error`]   | `LevelError`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod command;
pub mod config;
pub mod error;
pub mod events;
pub mod geom;
pub mod level;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::Command;
pub use config::WorldConfig;
pub use error::LevelError;
pub use events::{SoundCue, WorldEvent};
pub use geom::{Direction, Point, TILE};
pub use level::{LEVEL_HEIGHT, LEVEL_WIDTH, LevelLayout, Tile};
pub use rng::WorldRng;
