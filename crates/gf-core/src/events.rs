//! Per-tick side-channel events for the session and presentation
//! collaborators.
//!
//! The core neither plays sounds nor owns the score; it reports cues and
//! deltas and lets the surrounding collaborators decide what to do with them.

use std::fmt;

// ── SoundCue ──────────────────────────────────────────────────────────────────

/// A sound effect the presentation layer should play.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundCue {
    PlayerDied,
    PlayerFired,
    CitizenDied,
    CitizenTransformed,
    ProwlerDied,
    MineExploded,
    PickupCollected,
    LevelFinished,
}

impl SoundCue {
    /// Human-readable label, useful for logs and demo output.
    pub fn as_str(self) -> &'static str {
        match self {
            SoundCue::PlayerDied         => "player-died",
            SoundCue::PlayerFired        => "player-fired",
            SoundCue::CitizenDied        => "citizen-died",
            SoundCue::CitizenTransformed => "citizen-transformed",
            SoundCue::ProwlerDied        => "prowler-died",
            SoundCue::MineExploded       => "mine-exploded",
            SoundCue::PickupCollected    => "pickup-collected",
            SoundCue::LevelFinished      => "level-finished",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WorldEvent ────────────────────────────────────────────────────────────────

/// An event emitted during a tick, drained to the observer at the tick
/// boundary.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldEvent {
    /// Score delta for the session collaborator (may be negative).
    Score(i32),
    /// Sound cue for the presentation collaborator.
    Sound(SoundCue),
}
