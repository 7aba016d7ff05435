/// Keyframe tweens
///
/// A tween interpolates the visual properties of one element from a start
/// keyframe to an end keyframe over a fixed duration, optionally after a
/// delay, under an easing curve. Time advances in discrete ticks driven by
/// the update loop; nothing here blocks.

use cgmath::{Vector2, VectorSpace};

use super::ease::Ease;

/// A snapshot of the animatable properties of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// 0.0 (invisible) to 1.0 (fully opaque).
    pub opacity: f32,
    /// Translation away from the resting position, in logical pixels.
    pub offset: Vector2<f32>,
    /// Uniform size multiplier, 1.0 at rest.
    pub scale: f32,
}

impl Keyframe {
    /// The resting pose: fully opaque, unmoved, unscaled.
    pub const REST: Self = Self {
        opacity: 1.0,
        offset: Vector2 { x: 0.0, y: 0.0 },
        scale: 1.0,
    };

    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            offset: a.offset.lerp(b.offset, t),
            scale: a.scale + (b.scale - a.scale) * t,
        }
    }
}

/// A single in-flight interpolation between two keyframes.
#[derive(Debug, Clone)]
pub struct Tween {
    from: Keyframe,
    to: Keyframe,
    delay: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: Keyframe, to: Keyframe, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    /// Delay the start; the element holds the start keyframe until then.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Advance by `dt` seconds. Returns whether the tween has finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// The interpolated keyframe at the current time.
    pub fn sample(&self) -> Keyframe {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        Keyframe::lerp(self.from, self.to, self.ease.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> Keyframe {
        Keyframe {
            opacity: 0.0,
            offset: Vector2::new(0.0, 50.0),
            scale: 0.8,
        }
    }

    #[test]
    fn sampling_starts_at_the_start_keyframe() {
        let tween = Tween::new(hidden(), Keyframe::REST, 0.5, Ease::Linear);
        assert_eq!(tween.sample(), hidden());
        assert!(!tween.is_finished());
    }

    #[test]
    fn sampling_clamps_at_the_end_keyframe() {
        let mut tween = Tween::new(hidden(), Keyframe::REST, 0.5, Ease::Linear);
        assert!(tween.advance(2.0));
        assert_eq!(tween.sample(), Keyframe::REST);
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let mut tween = Tween::new(hidden(), Keyframe::REST, 0.5, Ease::Linear);
        tween.advance(0.25);
        let frame = tween.sample();
        assert!((frame.opacity - 0.5).abs() < 1e-6);
        assert!((frame.offset.y - 25.0).abs() < 1e-4);
        assert!((frame.scale - 0.9).abs() < 1e-6);
    }

    #[test]
    fn delay_holds_the_start_keyframe() {
        let mut tween = Tween::new(hidden(), Keyframe::REST, 0.5, Ease::Linear).with_delay(0.3);
        tween.advance(0.2);
        assert_eq!(tween.sample(), hidden());
        assert!(!tween.is_finished());
        assert!(tween.advance(0.7));
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let tween = Tween::new(hidden(), Keyframe::REST, 0.0, Ease::OutQuad);
        assert_eq!(tween.sample(), Keyframe::REST);
        assert!(tween.is_finished());
    }
}
