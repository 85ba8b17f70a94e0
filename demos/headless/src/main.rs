//! headless — smallest driver for the gridfall simulation core.
//!
//! Plays two tiny built-in levels with a trivial scripted bot (walk east,
//! torch any prowler in the way), printing the status line and every sound
//! cue.  Swap the maps and the bot for a real input/render layer to turn
//! this into a playable game.

mod maps;

use anyhow::{Result, bail};

use gf_actor::actor::Kind;
use gf_core::{Command, Direction, TILE, WorldConfig};
use gf_session::{Outcome, Session};
use gf_world::{World, WorldObserver};

use maps::BuiltinLevels;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const MAX_TICKS:         u64 = 10_000;
const STATUS_EVERY:      u64 = 25;
const FIRE_RANGE_UNITS:  i32 = 3 * TILE;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every sound cue as it drains.
struct CuePrinter {
    tick: u64,
}

impl WorldObserver for CuePrinter {
    fn on_sound(&mut self, cue: gf_core::SoundCue) {
        println!("  [tick {:>5}] cue: {cue}", self.tick);
    }
}

// ── Bot ───────────────────────────────────────────────────────────────────────

/// Walk east; fire when a prowler stands in the flame path.
fn decide(world: &World) -> Option<Command> {
    let player = world.player();
    if player.flame_charges > 0 {
        let in_the_way = world.actors().iter().any(|a| {
            !a.dead
                && matches!(a.kind, Kind::Prowler { .. })
                && (a.pos.y - player.pos.y).abs() < TILE
                && a.pos.x > player.pos.x
                && a.pos.x - player.pos.x <= FIRE_RANGE_UNITS
        });
        if in_the_way && player.facing == Direction::Right {
            return Some(Command::Fire);
        }
    }
    Some(Command::Move(Direction::Right))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut session = Session::new(BuiltinLevels::new()?, WorldConfig { seed: SEED });
    println!("{}", session.status_line());

    for tick in 0..MAX_TICKS {
        let cmd = session.world().and_then(decide);
        let mut printer = CuePrinter { tick };
        let outcome = session.tick(cmd, &mut printer);

        match outcome {
            Outcome::Continue => {
                if tick % STATUS_EVERY == 0 {
                    println!("{}", session.status_line());
                }
            }
            Outcome::PlayerDied => {
                println!("{}", session.status_line());
                if session.lives() == 0 {
                    println!("out of lives after {tick} ticks");
                    return Ok(());
                }
                println!("died; restarting level {} ({} lives left)", session.level(), session.lives());
            }
            Outcome::LevelFinished => {
                println!("{}", session.status_line());
                println!("level cleared; advancing to level {}", session.level());
            }
            Outcome::NoSuchLevel => {
                println!("all levels cleared in {tick} ticks; final score {}", session.score());
                return Ok(());
            }
            Outcome::LevelMalformed => bail!("built-in level {} is malformed", session.level()),
        }
    }

    bail!("bot made no progress within {MAX_TICKS} ticks");
}
