//! Built-in ASCII levels and the parser that turns them into layouts.
//!
//! Map legend: `#` wall, `@` player start, `c` citizen, `o` pit, `v` vaccine
//! pickup, `f` fuel pickup, `m` mine kit, `X` exit, `C` cautious prowler,
//! `r` roamer prowler, `.` empty.  The first text row is the top of the
//! level (highest y).

use anyhow::{Context, Result, bail};

use gf_core::error::LevelError;
use gf_core::level::{LEVEL_HEIGHT, LEVEL_WIDTH, LevelLayout, Tile};
use gf_session::LevelSource;

const LEVEL_1: &str = "\
################
################
################
################
################
################
################
################
################
################
################
################
################
################
#@..f.....r...X#
################";

const LEVEL_2: &str = "\
################
################
################
################
################
################
################
################
################
################
################
################
################
################
#@.m.f.f.C.r..X#
################";

/// The demo's two levels, parsed up front.
pub struct BuiltinLevels {
    levels: Vec<LevelLayout>,
}

impl BuiltinLevels {
    pub fn new() -> Result<Self> {
        let levels = [LEVEL_1, LEVEL_2]
            .iter()
            .enumerate()
            .map(|(i, map)| parse_map(map).with_context(|| format!("built-in level {}", i + 1)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { levels })
    }
}

impl LevelSource for BuiltinLevels {
    fn load(&self, level: u32) -> Option<Result<LevelLayout, LevelError>> {
        self.levels.get(level as usize - 1).cloned().map(Ok)
    }
}

fn parse_map(map: &str) -> Result<LevelLayout> {
    let rows: Vec<&str> = map.lines().collect();
    if rows.len() != LEVEL_HEIGHT {
        bail!("expected {LEVEL_HEIGHT} rows, got {}", rows.len());
    }

    let mut tiles = vec![Tile::Empty; LEVEL_WIDTH * LEVEL_HEIGHT];
    for (row, line) in rows.iter().enumerate() {
        if line.len() != LEVEL_WIDTH {
            bail!("row {row}: expected {LEVEL_WIDTH} columns, got {}", line.len());
        }
        let y = LEVEL_HEIGHT - 1 - row;
        for (x, ch) in line.chars().enumerate() {
            let tile = match ch {
                '.' => Tile::Empty,
                '#' => Tile::Wall,
                '@' => Tile::PlayerStart,
                'c' => Tile::Citizen,
                'o' => Tile::Pit,
                'v' => Tile::VaccinePickup,
                'f' => Tile::FuelPickup,
                'm' => Tile::MinePickup,
                'X' => Tile::Exit,
                'C' => Tile::CautiousProwler,
                'r' => Tile::RoamerProwler,
                other => bail!("row {row}, column {x}: unknown tile {other:?}"),
            };
            tiles[y * LEVEL_WIDTH + x] = tile;
        }
    }
    Ok(LevelLayout::new(tiles)?)
}
