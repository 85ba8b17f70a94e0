//! The world: player singleton, actor roster, and the ordered tick protocol.

use gf_actor::actor::{Actor, PickupKind, ProwlerKind};
use gf_actor::ctx::TickCtx;
use gf_actor::player::Player;
use gf_core::command::Command;
use gf_core::config::WorldConfig;
use gf_core::events::{SoundCue, WorldEvent};
use gf_core::geom::{Point, TILE};
use gf_core::level::{LevelLayout, Tile};
use gf_core::rng::WorldRng;

use crate::error::WorldError;
use crate::observer::WorldObserver;

/// Outcome of one world tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickStatus {
    Continue,
    PlayerDied,
    LevelFinished,
}

/// One level's worth of simulation state.
///
/// # Design
///
/// The player is held outside the roster: it is the one entity driven by
/// commands instead of the tick protocol, and it is deliberately invisible
/// to the roster's blocking scans.  Roster order is registration order is
/// update order, fixed at construction from the layout's row-major walk.
#[derive(Debug)]
pub struct World {
    player:         Player,
    actors:         Vec<Actor>,
    spawned:        Vec<Actor>,
    events:         Vec<WorldEvent>,
    citizens:       u32,
    level_finished: bool,
    rng:            WorldRng,
}

impl World {
    /// Populate a world from a validated layout: one actor (or the player
    /// singleton) per non-empty cell, in row-major order.
    pub fn from_layout(layout: &LevelLayout, config: &WorldConfig) -> Result<World, WorldError> {
        let mut player: Option<Player> = None;
        let mut actors = Vec::new();
        let mut citizens = 0u32;

        for (x, y, tile) in layout.cells() {
            let pos = Point::new(x as i32 * TILE, y as i32 * TILE);
            match tile {
                Tile::Empty => {}
                Tile::Wall => actors.push(Actor::wall(pos)),
                Tile::PlayerStart => {
                    if player.is_some() {
                        return Err(gf_core::LevelError::DuplicatePlayer.into());
                    }
                    player = Some(Player::new(pos));
                }
                Tile::Citizen => {
                    citizens += 1;
                    actors.push(Actor::citizen(pos));
                }
                Tile::Pit => actors.push(Actor::pit(pos)),
                Tile::VaccinePickup => actors.push(Actor::pickup(pos, PickupKind::Vaccine)),
                Tile::FuelPickup => actors.push(Actor::pickup(pos, PickupKind::Fuel)),
                Tile::MinePickup => actors.push(Actor::pickup(pos, PickupKind::MineKit)),
                Tile::Exit => actors.push(Actor::exit(pos)),
                Tile::CautiousProwler => actors.push(Actor::prowler(pos, ProwlerKind::Cautious)),
                Tile::RoamerProwler => actors.push(Actor::prowler(pos, ProwlerKind::Roamer)),
            }
        }

        let player = player.ok_or(gf_core::LevelError::MissingPlayer)?;
        Ok(World {
            player,
            actors,
            spawned: Vec::new(),
            events: Vec::new(),
            citizens,
            level_finished: false,
            rng: WorldRng::new(config.seed),
        })
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Citizens still in the level (alive and not yet escaped).
    #[inline]
    pub fn citizens_alive(&self) -> u32 {
        self.citizens
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn actors_mut(&mut self) -> &mut Vec<Actor> {
        &mut self.actors
    }

    /// Run one tick of the ordered protocol.  See the crate docs for the
    /// step order.
    pub fn tick<O: WorldObserver>(&mut self, cmd: Option<Command>, observer: &mut O) -> TickStatus {
        if !self.player.dead {
            self.player
                .act(cmd, &self.actors, &mut self.spawned, &mut self.events);
            // The pass always completes: a mid-pass player death or level
            // finish never cuts the remaining actors' updates short.
            for i in 0..self.actors.len() {
                self.step_actor(i);
            }
        }

        // Removal and insertion happen only here, at the tick boundary.
        self.actors.retain(|a| !a.dead);
        self.actors.append(&mut self.spawned);

        let status = if self.player.dead {
            TickStatus::PlayerDied
        } else if self.level_finished {
            self.events.push(WorldEvent::Sound(SoundCue::LevelFinished));
            TickStatus::LevelFinished
        } else {
            TickStatus::Continue
        };

        for event in self.events.drain(..) {
            match event {
                WorldEvent::Score(delta) => observer.on_score_delta(delta),
                WorldEvent::Sound(cue) => observer.on_sound(cue),
            }
        }
        observer.on_tick_end(status);
        status
    }

    /// Update actor `i` with a context built from the roster split around
    /// its slot, so the actor can mutate any neighbor but not itself.
    fn step_actor(&mut self, i: usize) {
        let (left, rest) = self.actors.split_at_mut(i);
        let Some((actor, right)) = rest.split_first_mut() else {
            return;
        };
        if actor.dead {
            return;
        }
        let mut ctx = TickCtx {
            player:         &mut self.player,
            left,
            right,
            spawned:        &mut self.spawned,
            events:         &mut self.events,
            citizens:       &mut self.citizens,
            level_finished: &mut self.level_finished,
            rng:            &mut self.rng,
        };
        actor.act(&mut ctx);
    }
}
