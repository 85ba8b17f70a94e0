//! The actor roster element: one tagged variant per world object.
//!
//! # Design
//!
//! All roster members share one struct with a `Kind` tag rather than a trait
//! object per variant.  The variant set is closed, per-variant state is a few
//! integers, and behavior dispatch is a single `match` in [`Actor::act`].
//! `Kind` is `Copy`, so `act` matches the tag by value and is free to mutate
//! `self` and rewrite the tag inside an arm.

use gf_core::events::SoundCue;
use gf_core::geom::{Direction, Point};

use crate::activate::Activation;
use crate::citizen;
use crate::ctx::TickCtx;
use crate::prowler;

/// Infection ticks after which an infected agent succumbs.
pub const INFECTION_LIMIT: u32 = 500;
/// Lifetime of flames and residue, in ticks.
pub const BURN_TICKS: u32 = 2;
/// Ticks between mine placement and arming.
pub const MINE_ARM_TICKS: u32 = 30;

// ── Variant state ─────────────────────────────────────────────────────────────

/// Infection countdown shared by the player and citizens.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infection {
    pub active: bool,
    pub ticks:  u32,
}

impl Infection {
    /// Advance one tick.  Returns `true` when the carrier succumbs this tick.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.active {
            self.ticks += 1;
        }
        self.ticks >= INFECTION_LIMIT
    }

    /// Cure: stops and resets the countdown.
    #[inline]
    pub fn clear(&mut self) {
        self.active = false;
        self.ticks = 0;
    }
}

/// What a pickup grants on collection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupKind {
    Vaccine,
    Fuel,
    MineKit,
}

/// Prowler flavors.  `Cautious` is worth more when destroyed; `Roamer` may
/// drop a vaccine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProwlerKind {
    Cautious,
    Roamer,
}

/// The closed set of actor variants, with per-variant state inline.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Wall,
    Exit,
    Pit,
    /// `age` counts ticks lived; the flame expires when it reaches
    /// [`BURN_TICKS`].
    Flame { age: u32 },
    /// Infectious trail left by prowlers.  Same lifetime rule as `Flame`.
    Residue { age: u32 },
    /// `countdown` runs while unarmed; an armed mine trips on proximity.
    Mine { countdown: u32, armed: bool },
    Pickup(PickupKind),
    Citizen(Infection),
    Prowler { kind: ProwlerKind, plan: u32, phase: u32 },
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// One member of the world roster.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub pos:    Point,
    pub facing: Direction,
    pub dead:   bool,
    pub kind:   Kind,
}

impl Actor {
    fn new(pos: Point, facing: Direction, kind: Kind) -> Self {
        Self { pos, facing, dead: false, kind }
    }

    pub fn wall(pos: Point) -> Self {
        Self::new(pos, Direction::Right, Kind::Wall)
    }

    pub fn exit(pos: Point) -> Self {
        Self::new(pos, Direction::Right, Kind::Exit)
    }

    pub fn pit(pos: Point) -> Self {
        Self::new(pos, Direction::Right, Kind::Pit)
    }

    pub fn flame(pos: Point, facing: Direction) -> Self {
        Self::new(pos, facing, Kind::Flame { age: 0 })
    }

    pub fn residue(pos: Point, facing: Direction) -> Self {
        Self::new(pos, facing, Kind::Residue { age: 0 })
    }

    pub fn mine(pos: Point) -> Self {
        Self::new(pos, Direction::Right, Kind::Mine { countdown: MINE_ARM_TICKS, armed: false })
    }

    pub fn pickup(pos: Point, kind: PickupKind) -> Self {
        Self::new(pos, Direction::Right, Kind::Pickup(kind))
    }

    pub fn citizen(pos: Point) -> Self {
        Self::new(pos, Direction::Right, Kind::Citizen(Infection::default()))
    }

    /// A fresh prowler starts with a full movement plan and an odd phase, so
    /// it acts on its first tick and is paralyzed on its second.
    pub fn prowler(pos: Point, kind: ProwlerKind) -> Self {
        Self::new(pos, Direction::Right, Kind::Prowler { kind, plan: 10, phase: 1 })
    }

    // ── Capability predicates ─────────────────────────────────────────────────

    /// Does this actor's box block movement destinations?
    #[inline]
    pub fn blocks_movement(&self) -> bool {
        matches!(self.kind, Kind::Wall | Kind::Citizen(_) | Kind::Prowler { .. })
    }

    /// Does this actor's box block flame placement?
    #[inline]
    pub fn blocks_flame(&self) -> bool {
        matches!(self.kind, Kind::Wall | Kind::Exit)
    }

    /// Can this actor trip an armed mine?
    #[inline]
    pub fn triggers_mines(&self) -> bool {
        matches!(self.kind, Kind::Citizen(_) | Kind::Prowler { .. })
    }

    /// Does this actor provoke a prowler's spit reaction?
    #[inline]
    pub fn triggers_reaction(&self) -> bool {
        matches!(self.kind, Kind::Citizen(_))
    }

    /// Is this actor a threat citizens would flee from?
    #[inline]
    pub fn threatens_citizens(&self) -> bool {
        matches!(self.kind, Kind::Prowler { .. })
    }

    /// Would a citizen follow or flee this actor?  The player (follow) is
    /// held outside the roster; on roster actors this marks prowlers (flee).
    #[inline]
    pub fn triggers_citizen_follow_flee(&self) -> bool {
        matches!(self.kind, Kind::Prowler { .. })
    }

    // ── Per-tick behavior ─────────────────────────────────────────────────────

    /// Run one tick of behavior.  Dead actors never reach here; the world
    /// skips them.
    pub fn act(&mut self, ctx: &mut TickCtx<'_>) {
        match self.kind {
            Kind::Wall => {}

            // Citizens escape through the exit at any time; the player only
            // completes the level once every citizen is gone.
            Kind::Exit => {
                ctx.activate_nearby(self.pos, Activation::Exit);
            }

            Kind::Pit => {
                ctx.activate_nearby(self.pos, Activation::FallOrBurn);
            }

            Kind::Flame { age } => {
                if age == BURN_TICKS {
                    self.dead = true;
                    return;
                }
                self.kind = Kind::Flame { age: age + 1 };
                ctx.activate_nearby(self.pos, Activation::FallOrBurn);
            }

            Kind::Residue { age } => {
                if age == BURN_TICKS {
                    self.dead = true;
                    return;
                }
                self.kind = Kind::Residue { age: age + 1 };
                ctx.activate_nearby(self.pos, Activation::Infect);
            }

            Kind::Mine { countdown, armed } => {
                if !armed {
                    let countdown = countdown - 1;
                    self.kind = Kind::Mine { countdown, armed: countdown == 0 };
                    if countdown > 0 {
                        return;
                    }
                    // Armed on this very tick; the trip check runs immediately.
                }
                if ctx.activate_nearby(self.pos, Activation::MineTrip) {
                    self.dead = true;
                    ctx.sound(SoundCue::MineExploded);
                    ctx.blast(self.pos);
                }
            }

            Kind::Pickup(kind) => {
                if ctx.activate_nearby(self.pos, Activation::Pickup(kind)) {
                    self.dead = true;
                }
            }

            Kind::Citizen(_) => citizen::act(self, ctx),

            Kind::Prowler { .. } => prowler::act(self, ctx),
        }
    }
}
