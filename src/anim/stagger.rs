/// One-shot staggered entrance for the thumbnail grid: every thumbnail
/// rises and fades into place, each starting a fixed delay after the one
/// before it.

use cgmath::Vector2;

use super::ease::Ease;
use super::timing;
use super::tween::{Keyframe, Tween};

/// Start pose for every thumbnail: transparent, dropped down, shrunk.
pub const START: Keyframe = Keyframe {
    opacity: 0.0,
    offset: Vector2 {
        x: 0.0,
        y: timing::REVEAL_RISE,
    },
    scale: timing::SMALL_SCALE,
};

#[derive(Debug)]
pub struct StaggerReveal {
    tweens: Vec<Tween>,
}

impl StaggerReveal {
    /// Build the entrance schedule for `count` thumbnails.
    pub fn new(count: usize) -> Self {
        let tweens = (0..count)
            .map(|i| {
                Tween::new(START, Keyframe::REST, timing::REVEAL_DURATION, Ease::OutBack)
                    .with_delay(timing::REVEAL_DELAY + i as f32 * timing::REVEAL_STAGGER)
            })
            .collect();
        Self { tweens }
    }

    pub fn tick(&mut self, dt: f32) {
        for tween in &mut self.tweens {
            tween.advance(dt);
        }
    }

    /// Current pose of thumbnail `index`; the rest pose once its tween is
    /// over (or for indexes beyond the schedule).
    pub fn keyframe(&self, index: usize) -> Keyframe {
        self.tweens.get(index).map_or(Keyframe::REST, Tween::sample)
    }

    pub fn is_running(&self) -> bool {
        self.tweens.iter().any(|tween| !tween.is_finished())
    }
}
