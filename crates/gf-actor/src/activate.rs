//! The proximity activation protocol.
//!
//! # Design
//!
//! Sources (exits, pits, flames, residue, mines, pickups) do not know what
//! they touch; each tick they announce an [`Activation`] effect at their
//! position and every entity whose center lies within the activation radius
//! reacts per the `(effect, target kind)` match table below.  Targets with
//! no applicable row are silent no-ops.
//!
//! The player is checked first and separately, since it lives outside the
//! roster.  Mine detonations discovered mid-scan (a mine caught in a flame)
//! are staged and their blasts resolved after the scan, so the scan never
//! mutates the roster it is iterating.

use gf_core::events::{SoundCue, WorldEvent};
use gf_core::geom::Point;
use gf_core::rng::WorldRng;

use crate::actor::{Actor, Kind, PickupKind, ProwlerKind};
use crate::ctx::TickCtx;

/// Squared center distance at or under which a source activates a target.
pub const ACTIVATION_RADIUS_SQ: i64 = 100;

/// Score delta for collecting any pickup.
pub const SCORE_PICKUP: i32 = 50;
/// Score delta when a citizen dies or transforms.
pub const SCORE_CITIZEN_LOST: i32 = -1000;
/// Score delta for destroying a roamer prowler.
pub const SCORE_ROAMER_KILLED: i32 = 1000;
/// Score delta for destroying a cautious prowler.
pub const SCORE_CAUTIOUS_KILLED: i32 = 2000;

/// What a proximity source does to entities near it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Activation {
    /// Escape the level (exit, once no citizens remain).
    Exit,
    /// Lethal hazard contact (pits and flames).
    FallOrBurn,
    /// Infectious contact (residue).
    Infect,
    /// Trip an armed mine.  Applies no effect itself; the mine blasts on a
    /// `true` return.
    MineTrip,
    /// Offer a collectible to the player.
    Pickup(PickupKind),
}

impl TickCtx<'_> {
    /// Run `effect` against the player and every alive roster actor within
    /// the activation radius of `src`.  Returns whether the source's purpose
    /// fired (pickup collected, mine tripped).
    pub fn activate_nearby(&mut self, src: Point, effect: Activation) -> bool {
        let mut fired = false;
        let mut detonated: Vec<Point> = Vec::new();

        if !self.player.dead && src.dist_sq(self.player.pos) <= ACTIVATION_RADIUS_SQ {
            fired |= apply_to_player(effect, self);
        }

        for target in self.left.iter_mut().chain(self.right.iter_mut()) {
            if target.dead || src.dist_sq(target.pos) > ACTIVATION_RADIUS_SQ {
                continue;
            }
            fired |= apply_to_actor(
                effect,
                target,
                self.events,
                self.spawned,
                self.citizens,
                self.rng,
                &mut detonated,
            );
        }

        for center in detonated {
            self.blast(center);
        }
        fired
    }
}

/// Player row of the match table.
fn apply_to_player(effect: Activation, ctx: &mut TickCtx<'_>) -> bool {
    match effect {
        Activation::Exit => {
            if ctx.citizens_alive() == 0 {
                *ctx.level_finished = true;
            }
            false
        }
        Activation::FallOrBurn => {
            ctx.player.dead = true;
            ctx.sound(SoundCue::PlayerDied);
            false
        }
        Activation::Infect => {
            ctx.player.infection.active = true;
            false
        }
        // The player always trips armed mines.
        Activation::MineTrip => true,
        Activation::Pickup(kind) => {
            ctx.score(SCORE_PICKUP);
            ctx.sound(SoundCue::PickupCollected);
            ctx.player.collect(kind);
            true
        }
    }
}

/// Roster rows of the match table.  Unlisted pairings are silent no-ops.
fn apply_to_actor(
    effect: Activation,
    target: &mut Actor,
    events: &mut Vec<WorldEvent>,
    spawned: &mut Vec<Actor>,
    citizens: &mut u32,
    rng: &mut WorldRng,
    detonated: &mut Vec<Point>,
) -> bool {
    match (effect, target.kind) {
        // A citizen reaching the exit escapes silently; the reward cue is
        // the session's concern, the count is the world's.
        (Activation::Exit, Kind::Citizen(_)) => {
            target.dead = true;
            *citizens = citizens.saturating_sub(1);
            false
        }

        (Activation::FallOrBurn, Kind::Citizen(_)) => {
            target.dead = true;
            events.push(WorldEvent::Sound(SoundCue::CitizenDied));
            events.push(WorldEvent::Score(SCORE_CITIZEN_LOST));
            *citizens = citizens.saturating_sub(1);
            false
        }

        (Activation::FallOrBurn, Kind::Prowler { kind, .. }) => {
            target.dead = true;
            events.push(WorldEvent::Sound(SoundCue::ProwlerDied));
            match kind {
                ProwlerKind::Cautious => {
                    events.push(WorldEvent::Score(SCORE_CAUTIOUS_KILLED));
                }
                ProwlerKind::Roamer => {
                    events.push(WorldEvent::Score(SCORE_ROAMER_KILLED));
                    if rng.gen_range(1..=10u32) == 1 {
                        spawned.push(Actor::pickup(target.pos, PickupKind::Vaccine));
                    }
                }
            }
            false
        }

        // A burning mine detonates, but its blast cannot run while the scan
        // holds the roster; stage the center for afterwards.
        (Activation::FallOrBurn, Kind::Mine { .. }) => {
            target.dead = true;
            events.push(WorldEvent::Sound(SoundCue::MineExploded));
            detonated.push(target.pos);
            false
        }

        (Activation::FallOrBurn, Kind::Pickup(_)) => {
            target.dead = true;
            false
        }

        (Activation::Infect, Kind::Citizen(mut infection)) => {
            infection.active = true;
            target.kind = Kind::Citizen(infection);
            false
        }

        (Activation::MineTrip, Kind::Citizen(_) | Kind::Prowler { .. }) => true,

        _ => false,
    }
}
