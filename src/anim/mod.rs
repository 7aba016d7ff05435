/// Animation module
///
/// This module provides the building blocks for the gallery's motion:
/// - Easing curves (ease.rs)
/// - Keyframe tweens (tween.rs)
/// - The staggered grid entrance (stagger.rs)
/// - The lightbox navigation sequencer (transition.rs)

pub mod ease;
pub mod stagger;
pub mod transition;
pub mod tween;

/// Shared timing and distance constants for the gallery animations.
/// Tuning happens here so the grid and the lightbox stay consistent.
pub mod timing {
    /// Interval between animation ticks (~60 FPS).
    pub const TICK_MS: u64 = 16;
    /// Lead-in before the first thumbnail starts its entrance.
    pub const REVEAL_DELAY: f32 = 0.2;
    /// Extra delay per thumbnail in the entrance stagger.
    pub const REVEAL_STAGGER: f32 = 0.12;
    /// Duration of one thumbnail entrance.
    pub const REVEAL_DURATION: f32 = 0.6;
    /// Vertical drop the thumbnails rise from, in logical pixels.
    pub const REVEAL_RISE: f32 = 50.0;
    /// Duration of the lightbox appearance pop.
    pub const APPEAR_DURATION: f32 = 0.4;
    /// Duration of the slide-out before the photo swaps.
    pub const EXIT_DURATION: f32 = 0.2;
    /// Duration of the slide-in after the photo swaps.
    pub const ENTER_DURATION: f32 = 0.3;
    /// Horizontal travel of the lightbox slide, in logical pixels.
    pub const SLIDE_DISTANCE: f32 = 100.0;
    /// Start scale for elements that pop into place.
    pub const SMALL_SCALE: f32 = 0.8;
}
