//! Citizen behavior: advance infection, transform at the limit.
//!
//! Citizens in this core are otherwise passive; rescue and flight happen
//! through the activation protocol and the queries other agents run against
//! them.

use gf_core::events::SoundCue;

use crate::activate::SCORE_CITIZEN_LOST;
use crate::actor::{Actor, Kind, ProwlerKind};
use crate::ctx::TickCtx;

/// Chance in ten that a transformed citizen becomes a cautious prowler.
const CAUTIOUS_IN_TEN: u32 = 3;

pub(crate) fn act(actor: &mut Actor, ctx: &mut TickCtx<'_>) {
    let Kind::Citizen(mut infection) = actor.kind else {
        return;
    };

    if infection.advance() {
        actor.dead = true;
        ctx.sound(SoundCue::CitizenTransformed);
        ctx.score(SCORE_CITIZEN_LOST);
        ctx.citizen_gone();
        let kind = if ctx.rng.gen_range(1..=10u32) <= CAUTIOUS_IN_TEN {
            ProwlerKind::Cautious
        } else {
            ProwlerKind::Roamer
        };
        ctx.spawn(Actor::prowler(actor.pos, kind));
        return;
    }

    actor.kind = Kind::Citizen(infection);
}
