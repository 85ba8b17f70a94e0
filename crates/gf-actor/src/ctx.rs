//! The mutable world view one acting actor sees.
//!
//! # Design
//!
//! The world update loop walks the roster by index and builds a `TickCtx`
//! around the current slot: `left` and `right` are the roster segments on
//! either side, so the acting actor can mutate any neighbor without aliasing
//! its own `&mut self`.  Spawns go through [`TickCtx::spawn`] into a staging
//! vector merged at the tick boundary, which keeps roster indices stable
//! while the loop is running.

use gf_core::events::{SoundCue, WorldEvent};
use gf_core::geom::{Direction, Point, TILE};
use gf_core::rng::WorldRng;

use crate::actor::Actor;
use crate::player::Player;
use crate::query;

/// The eight blast offsets around a detonation center, in tile units.
const BLAST_DIRS: [(i32, i32); 8] = [
    (0, 1), (0, -1), (-1, 0), (1, 0),
    (-1, 1), (1, 1), (-1, -1), (1, -1),
];

/// Mutable tick context handed to [`Actor::act`].
///
/// Fields are public because the world crate assembles this directly from
/// split roster borrows.
pub struct TickCtx<'a> {
    pub player:         &'a mut Player,
    pub left:           &'a mut [Actor],
    pub right:          &'a mut [Actor],
    pub spawned:        &'a mut Vec<Actor>,
    pub events:         &'a mut Vec<WorldEvent>,
    pub citizens:       &'a mut u32,
    pub level_finished: &'a mut bool,
    pub rng:            &'a mut WorldRng,
}

impl TickCtx<'_> {
    /// Every roster actor except the acting one.
    fn others(&self) -> impl Iterator<Item = &Actor> {
        self.left.iter().chain(self.right.iter())
    }

    /// Citizens still in the level (alive and not yet escaped).
    #[inline]
    pub fn citizens_alive(&self) -> u32 {
        *self.citizens
    }

    /// Record that one citizen left the level (escaped or died).
    #[inline]
    pub fn citizen_gone(&mut self) {
        *self.citizens = self.citizens.saturating_sub(1);
    }

    /// Stage a new actor; it joins the roster at the tick boundary and first
    /// acts next tick.
    #[inline]
    pub fn spawn(&mut self, actor: Actor) {
        self.spawned.push(actor);
    }

    #[inline]
    pub fn sound(&mut self, cue: SoundCue) {
        self.events.push(WorldEvent::Sound(cue));
    }

    #[inline]
    pub fn score(&mut self, delta: i32) {
        self.events.push(WorldEvent::Score(delta));
    }

    /// Would a step of `step` units from `pos` in `dir` land on a blocker?
    ///
    /// The player is not consulted: roster agents walk through (and onto) the
    /// player, and contact damage is the activation protocol's job.
    pub fn move_blocked(&self, pos: Point, dir: Direction, step: i32) -> bool {
        query::move_blocked(self.others(), pos, dir, step)
    }

    /// Is the tile box anchored at `cell` overlapped by any flame blocker?
    pub fn flame_blocked_box(&self, cell: Point) -> bool {
        query::flame_blocked_box(self.others(), cell)
    }

    /// Is there a reaction trigger (the player, or a citizen) exactly at `p`?
    pub fn reaction_trigger_at(&self, p: Point) -> bool {
        query::reaction_trigger_at(self.player, self.others(), p)
    }

    /// Detonate: place a flame on each of the eight tiles surrounding
    /// `center`, skipping any tile whose box overlaps a flame blocker.  Each
    /// direction is gated independently.
    pub fn blast(&mut self, center: Point) {
        for (dx, dy) in BLAST_DIRS {
            let cell = Point::new(center.x + dx * TILE, center.y + dy * TILE);
            if !self.flame_blocked_box(cell) {
                self.spawn(Actor::flame(cell, Direction::Up));
            }
        }
    }
}
