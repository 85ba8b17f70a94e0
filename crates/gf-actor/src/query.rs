//! Box-overlap spatial scans.
//!
//! Free functions over an actor iterator, O(actors) per probed point.  The
//! roster is small (one actor per non-empty level cell) so a linear scan per
//! probe beats maintaining an index that would need rebuilding every tick.
//!
//! The player is held outside the roster and is deliberately absent from the
//! blocking scans: agents walk onto the player, and contact consequences are
//! the activation protocol's job.  Only [`reaction_trigger_at`] consults the
//! player, explicitly.

use gf_core::geom::{Direction, Point, TILE};

use crate::actor::Actor;
use crate::player::Player;

/// Is `p` inside the tile box of any alive movement blocker?
pub fn movement_blocked_at<'a>(actors: impl IntoIterator<Item = &'a Actor>, p: Point) -> bool {
    actors
        .into_iter()
        .any(|a| !a.dead && a.blocks_movement() && a.pos.box_contains(p))
}

/// Is `p` inside the tile box of any alive flame blocker?
pub fn flame_blocked_at<'a>(actors: impl IntoIterator<Item = &'a Actor>, p: Point) -> bool {
    actors
        .into_iter()
        .any(|a| !a.dead && a.blocks_flame() && a.pos.box_contains(p))
}

/// Is any corner of the tile box anchored at `cell` inside an alive flame
/// blocker's box?
pub fn flame_blocked_box<'a>(actors: impl IntoIterator<Item = &'a Actor>, cell: Point) -> bool {
    let corners = box_corners(cell);
    actors.into_iter().any(|a| {
        !a.dead && a.blocks_flame() && corners.iter().any(|&c| a.pos.box_contains(c))
    })
}

/// Would a step of `step` units from `pos` in `dir` land on a movement
/// blocker?  Probes the two leading corners of the destination footprint.
pub fn move_blocked<'a>(
    actors: impl IntoIterator<Item = &'a Actor>,
    pos: Point,
    dir: Direction,
    step: i32,
) -> bool {
    let corners = leading_corners(pos, dir, step);
    actors.into_iter().any(|a| {
        !a.dead && a.blocks_movement() && corners.iter().any(|&c| a.pos.box_contains(c))
    })
}

/// Is there a reaction trigger exactly at `p`?  Exact coordinate equality on
/// both axes, against the player first and then every alive roster trigger.
pub fn reaction_trigger_at<'a>(
    player: &Player,
    actors: impl IntoIterator<Item = &'a Actor>,
    p: Point,
) -> bool {
    if !player.dead && player.pos == p {
        return true;
    }
    actors
        .into_iter()
        .any(|a| !a.dead && a.triggers_reaction() && a.pos == p)
}

/// The four corners of the tile box anchored at `cell`.
fn box_corners(cell: Point) -> [Point; 4] {
    let far = TILE - 1;
    [
        cell,
        Point::new(cell.x + far, cell.y),
        Point::new(cell.x, cell.y + far),
        Point::new(cell.x + far, cell.y + far),
    ]
}

/// The two leading corners of the destination footprint for a step of `step`
/// units from `pos` in `dir`.  The destination box is anchored at
/// `pos.step(dir, step)`; the leading edge is the side facing `dir`.
pub fn leading_corners(pos: Point, dir: Direction, step: i32) -> [Point; 2] {
    let dest = pos.step(dir, step);
    let far = TILE - 1;
    match dir {
        Direction::Up => [
            Point::new(dest.x, dest.y + far),
            Point::new(dest.x + far, dest.y + far),
        ],
        Direction::Down => [
            Point::new(dest.x, dest.y),
            Point::new(dest.x + far, dest.y),
        ],
        Direction::Left => [
            Point::new(dest.x, dest.y),
            Point::new(dest.x, dest.y + far),
        ],
        Direction::Right => [
            Point::new(dest.x + far, dest.y),
            Point::new(dest.x + far, dest.y + far),
        ],
    }
}
