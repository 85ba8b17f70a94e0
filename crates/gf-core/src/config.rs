//! World configuration.
//!
//! Typically constructed by the application (or deserialized from a
//! TOML/JSON file with the `serde` feature) and passed to world
//! construction once per level.

/// Per-world tunables.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Master RNG seed.  The same seed always produces identical runs for
    /// identical inputs.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { seed: 0 }
    }
}
