//! World observer trait for score, sound, and tick-boundary reporting.

use gf_core::events::SoundCue;

use crate::world::TickStatus;

/// Callbacks invoked by [`World::tick`][crate::World::tick] as the tick's
/// accumulated events drain at the tick boundary.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — sound logger
///
/// ```rust,ignore
/// struct SoundLogger;
///
/// impl WorldObserver for SoundLogger {
///     fn on_sound(&mut self, cue: SoundCue) {
///         println!("cue: {cue}");
///     }
/// }
/// ```
pub trait WorldObserver {
    /// A score delta earned this tick (may be negative).
    fn on_score_delta(&mut self, _delta: i32) {}

    /// A sound cue emitted this tick, in emission order.
    fn on_sound(&mut self, _cue: SoundCue) {}

    /// Called once per tick after all events have drained.
    fn on_tick_end(&mut self, _status: TickStatus) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call `tick`
/// but don't care about its events.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
