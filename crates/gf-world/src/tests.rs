//! Unit tests for gf-world.

use gf_actor::actor::{Actor, Kind};
use gf_core::command::Command;
use gf_core::config::WorldConfig;
use gf_core::events::SoundCue;
use gf_core::geom::{Direction, Point};
use gf_core::level::{LEVEL_HEIGHT, LEVEL_WIDTH, LevelLayout, Tile};
use gf_core::{LevelError, TILE};

use crate::error::WorldError;
use crate::observer::{NoopObserver, WorldObserver};
use crate::status::{StatusValues, pad_spaces, pad_zeros};
use crate::world::{TickStatus, World};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn layout_with(cells: &[(usize, usize, Tile)]) -> LevelLayout {
    let mut tiles = vec![Tile::Empty; LEVEL_WIDTH * LEVEL_HEIGHT];
    for &(x, y, tile) in cells {
        tiles[y * LEVEL_WIDTH + x] = tile;
    }
    LevelLayout::new(tiles).unwrap()
}

fn world_with(cells: &[(usize, usize, Tile)]) -> World {
    World::from_layout(&layout_with(cells), &WorldConfig::default()).unwrap()
}

/// Records everything the world reports.
#[derive(Default)]
struct Recorder {
    score:    i32,
    sounds:   Vec<SoundCue>,
    statuses: Vec<TickStatus>,
}

impl WorldObserver for Recorder {
    fn on_score_delta(&mut self, delta: i32) {
        self.score += delta;
    }
    fn on_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }
    fn on_tick_end(&mut self, status: TickStatus) {
        self.statuses.push(status);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

mod construction {
    use super::*;

    #[test]
    fn requires_exactly_one_player() {
        let err = World::from_layout(&layout_with(&[]), &WorldConfig::default()).unwrap_err();
        assert_eq!(err, WorldError::Level(LevelError::MissingPlayer));

        let layout = layout_with(&[(0, 0, Tile::PlayerStart), (5, 5, Tile::PlayerStart)]);
        let err = World::from_layout(&layout, &WorldConfig::default()).unwrap_err();
        assert_eq!(err, WorldError::Level(LevelError::DuplicatePlayer));
    }

    #[test]
    fn registers_row_major_at_tile_scaled_positions() {
        let world = world_with(&[
            (3, 0, Tile::Wall),
            (0, 1, Tile::Citizen),
            (2, 1, Tile::Exit),
            (1, 2, Tile::PlayerStart),
        ]);

        let kinds: Vec<Kind> = world.actors().iter().map(|a| a.kind).collect();
        assert!(matches!(kinds[0], Kind::Wall));
        assert!(matches!(kinds[1], Kind::Citizen(_)));
        assert!(matches!(kinds[2], Kind::Exit));
        assert_eq!(world.actors()[0].pos, Point::new(3 * TILE, 0));
        assert_eq!(world.actors()[1].pos, Point::new(0, TILE));
        assert_eq!(world.player().pos, Point::new(TILE, 2 * TILE));
    }

    #[test]
    fn counts_citizens() {
        let world = world_with(&[
            (0, 0, Tile::PlayerStart),
            (4, 4, Tile::Citizen),
            (5, 4, Tile::Citizen),
            (9, 9, Tile::RoamerProwler),
        ]);
        assert_eq!(world.citizens_alive(), 2);
    }
}

// ── Tick protocol ─────────────────────────────────────────────────────────────

mod tick {
    use super::*;

    #[test]
    fn empty_world_just_continues() {
        let mut world = world_with(&[(0, 0, Tile::PlayerStart)]);
        let mut rec = Recorder::default();
        for _ in 0..10 {
            assert_eq!(world.tick(None, &mut rec), TickStatus::Continue);
        }
        assert_eq!(rec.statuses, vec![TickStatus::Continue; 10]);
        assert_eq!(rec.score, 0);
        assert!(rec.sounds.is_empty());
    }

    #[test]
    fn spawns_join_the_roster_but_act_next_tick() {
        // Player fires at a prowler two tiles away; the flames appear this
        // tick but only burn on their own first acting tick.
        let mut world = world_with(&[(0, 0, Tile::PlayerStart), (2, 0, Tile::RoamerProwler)]);
        world.player_mut().flame_charges = 1;
        let mut rec = Recorder::default();

        world.tick(Some(Command::Fire), &mut rec);
        assert_eq!(rec.sounds, vec![SoundCue::PlayerFired]);
        assert!(world.actors().iter().any(|a| matches!(a.kind, Kind::Flame { .. })));
        assert!(world.actors().iter().any(|a| matches!(a.kind, Kind::Prowler { .. })));

        world.tick(None, &mut rec);
        assert!(rec.sounds.contains(&SoundCue::ProwlerDied));
        assert!(!world.actors().iter().any(|a| matches!(a.kind, Kind::Prowler { .. })));
    }

    #[test]
    fn dead_actors_are_swept_at_the_boundary() {
        // The pickup sits one tile right of the start; two 4-unit steps
        // bring the player inside its activation radius.
        let mut world = world_with(&[(0, 0, Tile::PlayerStart), (1, 0, Tile::VaccinePickup)]);
        let mut rec = Recorder::default();

        world.tick(Some(Command::Move(Direction::Right)), &mut rec);
        assert_eq!(world.player().vaccines, 0);

        world.tick(Some(Command::Move(Direction::Right)), &mut rec);
        assert_eq!(world.player().vaccines, 1);
        assert_eq!(rec.score, 50);
        assert_eq!(rec.sounds, vec![SoundCue::PickupCollected]);
        assert!(world.actors().iter().all(|a| !a.dead));
        assert!(!world.actors().iter().any(|a| matches!(a.kind, Kind::Pickup(_))));
    }

    #[test]
    fn infected_player_dies_at_the_limit() {
        let mut world = world_with(&[(0, 0, Tile::PlayerStart)]);
        world.player_mut().infection.active = true;
        world.player_mut().infection.ticks = 499;
        let mut rec = Recorder::default();

        let status = world.tick(None, &mut rec);
        assert_eq!(status, TickStatus::PlayerDied);
        assert_eq!(rec.sounds, vec![SoundCue::PlayerDied]);
        assert_eq!(rec.statuses, vec![TickStatus::PlayerDied]);
    }

    #[test]
    fn terminal_tick_still_runs_the_full_actor_pass() {
        // The player succumbs to infection at the top of the tick; a flame
        // sitting on a prowler must still burn it in the same pass, reward
        // included.
        let mut world = world_with(&[(0, 0, Tile::PlayerStart), (8, 8, Tile::CautiousProwler)]);
        world
            .actors_mut()
            .push(Actor::flame(Point::new(8 * TILE, 8 * TILE), Direction::Up));
        world.player_mut().infection.active = true;
        world.player_mut().infection.ticks = 499;
        let mut rec = Recorder::default();

        let status = world.tick(None, &mut rec);
        assert_eq!(status, TickStatus::PlayerDied);
        assert!(rec.sounds.contains(&SoundCue::PlayerDied));
        assert!(rec.sounds.contains(&SoundCue::ProwlerDied));
        assert_eq!(rec.score, 2000);
    }

    #[test]
    fn dead_player_makes_ticks_inert() {
        let mut world = world_with(&[(0, 0, Tile::PlayerStart), (1, 0, Tile::FuelPickup)]);
        world.player_mut().dead = true;

        let status = world.tick(Some(Command::Move(Direction::Right)), &mut NoopObserver);
        assert_eq!(status, TickStatus::PlayerDied);
        assert_eq!(world.player().pos, Point::new(0, 0));
        // The nearby pickup never activates.
        assert_eq!(world.player().flame_charges, 0);
    }

    #[test]
    fn exit_finishes_the_level_once_in_range() {
        // Exit one tile right of the player start: 16 units away.  Two
        // 4-unit steps bring the squared distance to 64, inside the radius.
        let mut world = world_with(&[(0, 0, Tile::PlayerStart), (1, 0, Tile::Exit)]);
        let mut rec = Recorder::default();

        assert_eq!(world.tick(Some(Command::Move(Direction::Right)), &mut rec), TickStatus::Continue);
        let status = world.tick(Some(Command::Move(Direction::Right)), &mut rec);
        assert_eq!(status, TickStatus::LevelFinished);
        assert_eq!(rec.sounds, vec![SoundCue::LevelFinished]);
    }

    #[test]
    fn exit_waits_for_citizens() {
        // A citizen far away keeps the level open even with the player
        // standing on the exit.
        let mut world = world_with(&[
            (0, 0, Tile::PlayerStart),
            (1, 0, Tile::Exit),
            (15, 15, Tile::Citizen),
        ]);
        let mut rec = Recorder::default();

        for _ in 0..5 {
            assert_eq!(world.tick(Some(Command::Move(Direction::Right)), &mut rec), TickStatus::Continue);
        }
        assert_eq!(world.citizens_alive(), 1);
    }

    #[test]
    fn citizen_escape_opens_the_exit() {
        // Citizen adjacent to the exit escapes on tick one; the player then
        // walks in.
        let mut world = world_with(&[
            (4, 0, Tile::PlayerStart),
            (1, 0, Tile::Exit),
            (2, 0, Tile::Citizen),
        ]);
        // Put the citizen inside the activation radius of the exit.
        for a in world.actors_mut().iter_mut() {
            if matches!(a.kind, Kind::Citizen(_)) {
                a.pos = Point::new(TILE + 8, 0);
            }
        }
        let mut rec = Recorder::default();

        world.tick(None, &mut rec);
        assert_eq!(world.citizens_alive(), 0);
        assert!(!world.actors().iter().any(|a| matches!(a.kind, Kind::Citizen(_))));

        // Walk left until the exit takes the player.
        let mut status = TickStatus::Continue;
        for _ in 0..20 {
            status = world.tick(Some(Command::Move(Direction::Left)), &mut rec);
            if status != TickStatus::Continue {
                break;
            }
        }
        assert_eq!(status, TickStatus::LevelFinished);
    }

    #[test]
    fn same_seed_same_run() {
        let cells = [
            (0, 0, Tile::PlayerStart),
            (8, 8, Tile::RoamerProwler),
            (12, 3, Tile::CautiousProwler),
        ];
        let mut a = world_with(&cells);
        let mut b = world_with(&cells);
        for _ in 0..200 {
            a.tick(None, &mut NoopObserver);
            b.tick(None, &mut NoopObserver);
        }
        assert_eq!(a.actors(), b.actors());
    }
}

// ── Status line ───────────────────────────────────────────────────────────────

mod status_line {
    use super::*;

    #[test]
    fn pads_each_column_to_its_width() {
        let values = StatusValues {
            score:           4500,
            level:           3,
            lives:           3,
            vaccines:        0,
            flame_charges:   12,
            mines:           2,
            infection_ticks: 0,
        };
        assert_eq!(
            values.render(),
            "Score: 004500  Level:  3  Lives: 3  Vaccines:  0  Flames: 12  Mines:  2  Infected: 0"
        );
    }

    #[test]
    fn negative_score_keeps_its_sign_inside_the_padding() {
        assert_eq!(pad_zeros(-50, 6), "000-50");
    }

    #[test]
    fn padding_helpers() {
        assert_eq!(pad_zeros(0, 2), "00");
        assert_eq!(pad_spaces(0, 2), " 0");
        assert_eq!(pad_spaces(123, 2), "123");
    }
}
