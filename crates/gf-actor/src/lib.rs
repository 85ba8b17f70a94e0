//! `gf-actor` — the actor model, spatial queries, and activation protocol.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`actor`]    | `Actor`, `Kind`, capability predicates, per-tick behavior     |
//! | [`player`]   | `Player` — the input-driven singleton, held outside the roster|
//! | [`ctx`]      | `TickCtx<'a>` — the mutable view one acting actor sees        |
//! | [`query`]    | Box-overlap spatial scans (movement / flame blocking)         |
//! | [`activate`] | Radius-based activation effects and their per-target outcomes |
//! | [`citizen`]  | Citizen infection countdown and transformation                |
//! | [`prowler`]  | Prowler parity gate, reaction, and movement plan              |
//!
//! # Design notes
//!
//! Each tick the world calls `Actor::act` once per live actor, in roster
//! order, with a `TickCtx` built around the actor's own roster slot.  Effects
//! on neighbors are applied directly through the context; everything that
//! would change the roster itself (spawns, removals) is staged and merged at
//! the tick boundary, so iteration order and indices stay stable mid-tick.
//!
//! The `Kind` enum is the closed set of actor variants.  There is no behavior
//! trait: the roster is homogeneous, dispatch is a `match`, and capability
//! checks are predicate methods rather than downcasts.

pub mod activate;
pub mod actor;
pub mod citizen;
pub mod ctx;
pub mod player;
pub mod prowler;
pub mod query;


pub use activate::{ACTIVATION_RADIUS_SQ, Activation};
pub use actor::{Actor, Infection, Kind, PickupKind, ProwlerKind};
pub use ctx::TickCtx;
pub use player::Player;
