//! Level cell codes and the validated level grid.
//!
//! Level-file discovery and parsing belong to an external collaborator; the
//! core consumes the result as a fixed-size two-dimensional `Tile` lookup.
//! `LevelLayout::new` is the only constructor and rejects grids with the
//! wrong cell count, so a held `LevelLayout` is always well-formed.

use crate::error::LevelError;

/// Grid width in tiles.
pub const LEVEL_WIDTH: usize = 16;
/// Grid height in tiles.
pub const LEVEL_HEIGHT: usize = 16;

// ── Tile ──────────────────────────────────────────────────────────────────────

/// The closed enumeration of level cell contents.
///
/// Each non-`Empty` cell produces exactly one actor (or the player singleton)
/// when a world is populated from the layout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    PlayerStart,
    Citizen,
    Pit,
    VaccinePickup,
    FuelPickup,
    MinePickup,
    Exit,
    CautiousProwler,
    RoamerProwler,
}

// ── LevelLayout ───────────────────────────────────────────────────────────────

/// A validated `LEVEL_WIDTH × LEVEL_HEIGHT` tile grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelLayout {
    tiles: Vec<Tile>,
}

impl LevelLayout {
    /// Wrap a row-major tile vector; `tiles[y * LEVEL_WIDTH + x]` is cell
    /// `(x, y)`.  Fails if the cell count is not exactly
    /// `LEVEL_WIDTH * LEVEL_HEIGHT`.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, LevelError> {
        let expected = LEVEL_WIDTH * LEVEL_HEIGHT;
        if tiles.len() != expected {
            return Err(LevelError::WrongCellCount { expected, got: tiles.len() });
        }
        Ok(Self { tiles })
    }

    /// The tile at grid cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x >= LEVEL_WIDTH` or `y >= LEVEL_HEIGHT`.
    #[inline]
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        assert!(x < LEVEL_WIDTH && y < LEVEL_HEIGHT, "cell ({x}, {y}) out of range");
        self.tiles[y * LEVEL_WIDTH + x]
    }

    /// Iterate all cells as `(x, y, tile)` in row-major order (y outer,
    /// x inner).  This order defines actor registration order when a world
    /// is populated, which in turn fixes update order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        (0..LEVEL_HEIGHT).flat_map(move |y| {
            (0..LEVEL_WIDTH).map(move |x| (x, y, self.tile(x, y)))
        })
    }
}
