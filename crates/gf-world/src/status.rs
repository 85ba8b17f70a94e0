//! Fixed-column status line rendering.
//!
//! Column widths and padding styles follow the classic arcade readout: the
//! score is zero-padded to six columns, counters are space-padded to their
//! historical widths.  A negative score keeps its sign inside the padding
//! (`-1000` renders as `0-1000`).

use std::fmt::Display;

/// Everything the status line shows, gathered by the caller.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StatusValues {
    pub score:           i32,
    pub level:           u32,
    pub lives:           u32,
    pub vaccines:        u32,
    pub flame_charges:   u32,
    pub mines:           u32,
    pub infection_ticks: u32,
}

impl StatusValues {
    /// Render the one-line readout.
    pub fn render(&self) -> String {
        format!(
            "Score: {}  Level: {}  Lives: {}  Vaccines: {}  Flames: {}  Mines: {}  Infected: {}",
            pad_zeros(self.score, 6),
            pad_spaces(self.level, 2),
            pad_zeros(self.lives, 1),
            pad_spaces(self.vaccines, 2),
            pad_spaces(self.flame_charges, 2),
            pad_spaces(self.mines, 2),
            pad_spaces(self.infection_ticks, 1),
        )
    }
}

/// Left-pad with zeros to `width` columns.
pub fn pad_zeros(value: impl Display, width: usize) -> String {
    format!("{value:0>width$}")
}

/// Left-pad with spaces to `width` columns.
pub fn pad_spaces(value: impl Display, width: usize) -> String {
    format!("{value: >width$}")
}
