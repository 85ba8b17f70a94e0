//! Prowler behavior: parity paralysis, reaction spit, movement plan.
//!
//! A prowler acts on odd phases only; an even phase is a paralyzed tick that
//! resets the phase to 1, so prowlers move at half the tick rate.  On an
//! acting tick it first checks the adjacent tile in its facing direction for
//! a reaction trigger (the player or a citizen at exactly that coordinate)
//! and spits residue there instead of moving; otherwise it follows a random
//! movement plan, replanning whenever the plan runs out or a step is blocked.

use gf_core::geom::{Direction, TILE};

use crate::actor::{Actor, Kind};
use crate::ctx::TickCtx;

/// Prowler step length per acting tick, in world units.
pub const PROWLER_STEP: i32 = 1;
/// Movement plan length bounds (inclusive).
const PLAN_MIN: u32 = 3;
const PLAN_MAX: u32 = 10;

pub(crate) fn act(actor: &mut Actor, ctx: &mut TickCtx<'_>) {
    let Kind::Prowler { kind, mut plan, phase } = actor.kind else {
        return;
    };

    // Parity gate: even phase is a paralyzed tick.
    if phase % 2 == 0 {
        actor.kind = Kind::Prowler { kind, plan, phase: 1 };
        return;
    }
    let phase = phase + 1;

    let ahead = actor.pos.step(actor.facing, TILE);
    if ctx.reaction_trigger_at(ahead) {
        ctx.spawn(Actor::residue(ahead, actor.facing));
        actor.kind = Kind::Prowler { kind, plan, phase };
        return;
    }

    if plan == 0 {
        plan = ctx.rng.gen_range(PLAN_MIN..=PLAN_MAX);
        actor.facing = Direction::ALL[ctx.rng.gen_range(0..Direction::ALL.len())];
    }

    if ctx.move_blocked(actor.pos, actor.facing, PROWLER_STEP) {
        plan = 0;
    } else {
        actor.pos = actor.pos.step(actor.facing, PROWLER_STEP);
        plan -= 1;
    }

    actor.kind = Kind::Prowler { kind, plan, phase };
}
