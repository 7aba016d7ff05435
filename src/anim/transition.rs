/// Lightbox transition sequencer
///
/// Navigation is a small temporal state machine: the outgoing photo slides
/// away, the index swap is committed only when that slide finishes, and
/// the incoming photo slides in one tick later so a render pass always
/// sits between the swap and the slide-in. The image stays transparent
/// between the two phases, so the new photo never flashes early and a
/// stale photo is never visible mid-transition.

use cgmath::Vector2;

use super::ease::Ease;
use super::timing;
use super::tween::{Keyframe, Tween};
use crate::state::gallery::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// The appearance pop right after the lightbox opens.
    Appearing,
    /// Sliding the current photo out; the index has not changed yet.
    Exiting(Direction),
    /// Exit finished and the index swap committed; the enter tween is
    /// armed on the next tick, after the new photo has rendered once.
    AwaitingFrame(Direction),
    /// Sliding the new photo in from the opposite side.
    Entering(Direction),
}

/// Emitted by [`LightboxTransition::tick`] when the update loop must act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The exit slide finished: advance the photo index now.
    CommitNavigation(Direction),
}

#[derive(Debug)]
pub struct LightboxTransition {
    phase: Phase,
    tween: Option<Tween>,
}

impl LightboxTransition {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            tween: None,
        }
    }

    /// Start the appearance pop: fade and scale in from slightly shrunk.
    pub fn appear(&mut self) {
        let start = Keyframe {
            opacity: 0.0,
            offset: Vector2::new(0.0, 0.0),
            scale: timing::SMALL_SCALE,
        };
        self.tween = Some(Tween::new(
            start,
            Keyframe::REST,
            timing::APPEAR_DURATION,
            Ease::OutBack,
        ));
        self.phase = Phase::Appearing;
    }

    /// Start the exit slide. A navigation that arrives while a tween is
    /// already in flight restarts the slide from the current interpolated
    /// values and supersedes the pending completion.
    pub fn navigate(&mut self, direction: Direction) {
        let from = self.keyframe();
        let to = Keyframe {
            opacity: 0.0,
            offset: Vector2::new(exit_dx(direction), 0.0),
            scale: 1.0,
        };
        self.tween = Some(Tween::new(from, to, timing::EXIT_DURATION, Ease::InQuad));
        self.phase = Phase::Exiting(direction);
    }

    /// Drop any in-flight animation (the lightbox closed).
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.tween = None;
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Option<TransitionEvent> {
        match self.phase {
            Phase::Idle => None,
            Phase::Appearing => {
                if self.advance_tween(dt) {
                    self.reset();
                }
                None
            }
            Phase::Exiting(direction) => {
                if self.advance_tween(dt) {
                    // Hold the exit end pose (transparent) until the enter
                    // tween is armed on a later tick.
                    self.phase = Phase::AwaitingFrame(direction);
                    Some(TransitionEvent::CommitNavigation(direction))
                } else {
                    None
                }
            }
            Phase::AwaitingFrame(direction) => {
                let start = Keyframe {
                    opacity: 0.0,
                    offset: Vector2::new(-exit_dx(direction), 0.0),
                    scale: 1.0,
                };
                self.tween = Some(Tween::new(
                    start,
                    Keyframe::REST,
                    timing::ENTER_DURATION,
                    Ease::OutQuad,
                ));
                self.phase = Phase::Entering(direction);
                None
            }
            Phase::Entering(_) => {
                if self.advance_tween(dt) {
                    self.reset();
                }
                None
            }
        }
    }

    fn advance_tween(&mut self, dt: f32) -> bool {
        match &mut self.tween {
            Some(tween) => tween.advance(dt),
            None => true,
        }
    }

    /// Pose of the lightbox image right now.
    pub fn keyframe(&self) -> Keyframe {
        self.tween.as_ref().map_or(Keyframe::REST, Tween::sample)
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }
}

impl Default for LightboxTransition {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal travel of the outgoing photo: it leaves in the direction of
/// navigation, so "next" slides it out to the left.
fn exit_dx(direction: Direction) -> f32 {
    match direction {
        Direction::Next => -timing::SLIDE_DISTANCE,
        Direction::Previous => timing::SLIDE_DISTANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appear_pops_in_and_settles() {
        let mut transition = LightboxTransition::new();
        transition.appear();
        assert!(transition.is_animating());
        assert_eq!(transition.keyframe().opacity, 0.0);
        assert_eq!(transition.keyframe().scale, timing::SMALL_SCALE);

        assert_eq!(transition.tick(timing::APPEAR_DURATION + 0.01), None);
        assert!(!transition.is_animating());
        assert_eq!(transition.keyframe(), Keyframe::REST);
    }

    #[test]
    fn commit_fires_exactly_when_the_exit_completes() {
        let mut transition = LightboxTransition::new();
        transition.navigate(Direction::Next);

        // Mid-exit: sliding left, no commit yet.
        assert_eq!(transition.tick(0.1), None);
        assert!(transition.keyframe().offset.x < 0.0);

        let event = transition.tick(timing::EXIT_DURATION);
        assert_eq!(
            event,
            Some(TransitionEvent::CommitNavigation(Direction::Next))
        );
        // Between commit and enter, the image stays transparent.
        assert_eq!(transition.keyframe().opacity, 0.0);
        assert!(transition.is_animating());
    }

    #[test]
    fn enter_is_armed_one_tick_after_the_commit() {
        let mut transition = LightboxTransition::new();
        transition.navigate(Direction::Next);
        let _ = transition.tick(timing::EXIT_DURATION + 0.01);

        // The tick after the commit arms the slide-in from the far side.
        assert_eq!(transition.tick(0.0), None);
        let frame = transition.keyframe();
        assert_eq!(frame.opacity, 0.0);
        assert!(frame.offset.x > 0.0);

        assert_eq!(transition.tick(timing::ENTER_DURATION + 0.01), None);
        assert!(!transition.is_animating());
        assert_eq!(transition.keyframe(), Keyframe::REST);
    }

    #[test]
    fn previous_slides_the_opposite_way() {
        let mut transition = LightboxTransition::new();
        transition.navigate(Direction::Previous);
        let _ = transition.tick(0.1);
        assert!(transition.keyframe().offset.x > 0.0);

        let _ = transition.tick(timing::EXIT_DURATION);
        let _ = transition.tick(0.0);
        assert!(transition.keyframe().offset.x < 0.0);
    }

    #[test]
    fn navigation_mid_exit_restarts_from_current_values() {
        let mut transition = LightboxTransition::new();
        transition.navigate(Direction::Next);
        assert_eq!(transition.tick(0.1), None);
        let mid = transition.keyframe();

        transition.navigate(Direction::Next);
        assert_eq!(transition.keyframe(), mid);

        // The restarted slide runs its full duration before committing.
        assert_eq!(transition.tick(0.1), None);
        assert_eq!(
            transition.tick(timing::EXIT_DURATION),
            Some(TransitionEvent::CommitNavigation(Direction::Next))
        );
    }

    #[test]
    fn reset_drops_everything() {
        let mut transition = LightboxTransition::new();
        transition.navigate(Direction::Previous);
        let _ = transition.tick(0.05);
        transition.reset();
        assert!(!transition.is_animating());
        assert_eq!(transition.keyframe(), Keyframe::REST);
        assert_eq!(transition.tick(1.0), None);
    }
}
