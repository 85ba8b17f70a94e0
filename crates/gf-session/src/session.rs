//! The session: level loading, score and lives bookkeeping.

use gf_core::command::Command;
use gf_core::config::WorldConfig;
use gf_core::error::LevelError;
use gf_core::events::SoundCue;
use gf_core::level::LevelLayout;
use gf_world::observer::WorldObserver;
use gf_world::status::StatusValues;
use gf_world::world::{TickStatus, World};

/// Lives a fresh session starts with.
pub const STARTING_LIVES: u32 = 3;

/// Supplies level layouts by level number (starting at 1).
///
/// `None` means the level does not exist — the player has cleared every
/// level there is.  `Some(Err(_))` means the level exists but its data is
/// bad, which ends the session.
pub trait LevelSource {
    fn load(&self, level: u32) -> Option<Result<LevelLayout, LevelError>>;
}

/// Outcome of one session tick.
///
/// `Continue` is the only non-boundary outcome.  `PlayerDied` and
/// `LevelFinished` mark level boundaries (the next tick loads a layout);
/// `NoSuchLevel` and `LevelMalformed` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Continue,
    PlayerDied,
    LevelFinished,
    NoSuchLevel,
    LevelMalformed,
}

/// A running game session.
///
/// # Design
///
/// The session holds `Option<World>`: `None` between levels (and before the
/// first tick), so level loading is lazy and a failed load is observed on
/// the tick that needed it.  Score deltas are tallied here while still
/// forwarding every event to the caller's observer.
pub struct Session<S> {
    source: S,
    config: WorldConfig,
    score:  i32,
    lives:  u32,
    level:  u32,
    world:  Option<World>,
}

impl<S: LevelSource> Session<S> {
    pub fn new(source: S, config: WorldConfig) -> Self {
        Self {
            source,
            config,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            world: None,
        }
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current level number, starting at 1.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The world currently being simulated, if a level is in progress.
    #[inline]
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Run one tick, loading the current level first if none is in
    /// progress.  Out of lives, every further tick reports `PlayerDied`.
    pub fn tick<O: WorldObserver>(&mut self, cmd: Option<Command>, observer: &mut O) -> Outcome {
        if self.lives == 0 {
            return Outcome::PlayerDied;
        }

        let mut world = match self.world.take() {
            Some(world) => world,
            None => match self.source.load(self.level) {
                None => return Outcome::NoSuchLevel,
                Some(Err(_)) => return Outcome::LevelMalformed,
                Some(Ok(layout)) => match World::from_layout(&layout, &self.config) {
                    Err(_) => return Outcome::LevelMalformed,
                    Ok(world) => world,
                },
            },
        };

        let mut tally = Tally { inner: observer, delta: 0 };
        let status = world.tick(cmd, &mut tally);
        self.score += tally.delta;

        match status {
            TickStatus::Continue => {
                self.world = Some(world);
                Outcome::Continue
            }
            TickStatus::PlayerDied => {
                // The level restarts from its layout on the next tick.
                self.lives = self.lives.saturating_sub(1);
                Outcome::PlayerDied
            }
            TickStatus::LevelFinished => {
                self.level += 1;
                Outcome::LevelFinished
            }
        }
    }

    /// Render the fixed-column status readout from session counters and the
    /// in-progress world's player resources (all zeros between levels).
    pub fn status_line(&self) -> String {
        let (vaccines, flame_charges, mines, infection_ticks) = match &self.world {
            Some(world) => {
                let p = world.player();
                (p.vaccines, p.flame_charges, p.mines, p.infection.ticks)
            }
            None => (0, 0, 0, 0),
        };
        StatusValues {
            score: self.score,
            level: self.level,
            lives: self.lives,
            vaccines,
            flame_charges,
            mines,
            infection_ticks,
        }
        .render()
    }
}

/// Accumulates score deltas while forwarding everything to the caller's
/// observer.
struct Tally<'a, O> {
    inner: &'a mut O,
    delta: i32,
}

impl<O: WorldObserver> WorldObserver for Tally<'_, O> {
    fn on_score_delta(&mut self, delta: i32) {
        self.delta += delta;
        self.inner.on_score_delta(delta);
    }
    fn on_sound(&mut self, cue: SoundCue) {
        self.inner.on_sound(cue);
    }
    fn on_tick_end(&mut self, status: TickStatus) {
        self.inner.on_tick_end(status);
    }
}
