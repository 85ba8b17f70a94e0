//! The input-driven player singleton.
//!
//! The player lives outside the actor roster (it is the one entity whose
//! behavior comes from commands rather than the tick protocol) but shares the
//! same position/facing/infection model as roster agents.

use gf_core::command::Command;
use gf_core::events::{SoundCue, WorldEvent};
use gf_core::geom::{Direction, Point, TILE};

use crate::actor::{Actor, Infection, PickupKind};
use crate::query;

/// Player step length per `Move` command, in world units.
pub const PLAYER_STEP: i32 = 4;
/// Maximum flame reach of one `Fire` command, in tiles.
pub const FLAME_RANGE: i32 = 3;

/// Charges granted per collected vaccine pickup.
pub const VACCINE_GRANT: u32 = 1;
/// Flame charges granted per collected fuel pickup.
pub const FUEL_GRANT: u32 = 5;
/// Mines granted per collected mine kit.
pub const MINE_GRANT: u32 = 2;

/// The player singleton.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub pos:           Point,
    pub facing:        Direction,
    pub dead:          bool,
    pub infection:     Infection,
    pub vaccines:      u32,
    pub flame_charges: u32,
    pub mines:         u32,
}

impl Player {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            facing: Direction::Right,
            dead: false,
            infection: Infection::default(),
            vaccines: 0,
            flame_charges: 0,
            mines: 0,
        }
    }

    /// Apply a collected pickup's grant.
    pub fn collect(&mut self, kind: PickupKind) {
        match kind {
            PickupKind::Vaccine => self.vaccines += VACCINE_GRANT,
            PickupKind::Fuel    => self.flame_charges += FUEL_GRANT,
            PickupKind::MineKit => self.mines += MINE_GRANT,
        }
    }

    /// Run one player tick: infection advance, then at most one command.
    ///
    /// A command whose resource counter is zero is a silent no-op; counters
    /// never go negative.
    pub fn act(
        &mut self,
        cmd: Option<Command>,
        actors: &[Actor],
        spawned: &mut Vec<Actor>,
        events: &mut Vec<WorldEvent>,
    ) {
        if self.dead {
            return;
        }
        if self.infection.advance() {
            self.dead = true;
            events.push(WorldEvent::Sound(SoundCue::PlayerDied));
            return;
        }

        match cmd {
            Some(Command::Fire) if self.flame_charges > 0 => {
                self.flame_charges -= 1;
                events.push(WorldEvent::Sound(SoundCue::PlayerFired));
                for i in 1..=FLAME_RANGE {
                    let cell = self.pos.step(self.facing, i * TILE);
                    if query::flame_blocked_box(actors.iter(), cell) {
                        break;
                    }
                    spawned.push(Actor::flame(cell, self.facing));
                }
            }

            Some(Command::PlaceMine) if self.mines > 0 => {
                self.mines -= 1;
                spawned.push(Actor::mine(self.pos));
            }

            Some(Command::Vaccine) if self.vaccines > 0 => {
                self.vaccines -= 1;
                self.infection.clear();
            }

            Some(Command::Move(dir)) => {
                // Facing updates even when the step is blocked.
                self.facing = dir;
                if !query::move_blocked(actors.iter(), self.pos, dir, PLAYER_STEP) {
                    self.pos = self.pos.step(dir, PLAYER_STEP);
                }
            }

            _ => {}
        }
    }
}
