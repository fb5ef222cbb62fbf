//! Scroll-triggered entrance reveals
//!
//! A [`RevealDirective`] describes how one element enters: the axis it slides in
//! from, how far, and the tween timing. A [`RevealTracker`] owns the lifecycle of
//! one bound element and turns viewport measurements into play/reverse commands:
//!
//! ```text
//! Pending --enter--> Playing --finish--> Shown
//!    ^                  |                  |
//!    |                  +------exit--------+
//!    |                          v
//!    +-------enter-------- Reversed
//! ```
//!
//! The element "enters" when its top edge reaches the trigger line at 85% of the
//! viewport height and "exits" when it falls back below that line.

use serde::{Deserialize, Serialize};

use super::motion::{Easing, Pose, Transition, pose_style};

/// Trigger line as a fraction of the viewport height, measured from the top
pub const TRIGGER_LINE: f64 = 0.85;

/// Default reveal duration in seconds
pub const DEFAULT_DURATION_SECONDS: f64 = 1.0;

/// Default slide distance in pixels
pub const DEFAULT_DISTANCE_PIXELS: f64 = 60.0;

/// Axis and side an element slides in from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    #[default]
    #[display("up")]
    Up,
    #[display("down")]
    Down,
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl RevealDirection {
    pub const ALL: [RevealDirection; 4] = [
        RevealDirection::Up,
        RevealDirection::Down,
        RevealDirection::Left,
        RevealDirection::Right,
    ];

    /// Starting offset `(x, y)` for a slide of `distance` pixels
    pub fn offset(&self, distance: f64) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, distance),
            RevealDirection::Down => (0.0, -distance),
            RevealDirection::Left => (distance, 0.0),
            RevealDirection::Right => (-distance, 0.0),
        }
    }
}

/// Lifecycle of a bound element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum TriggerState {
    #[default]
    Pending,
    Playing,
    Shown,
    Reversed,
}

/// What the bound element should do after a viewport update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCommand {
    /// Tween from the initial pose to identity
    PlayForward,
    /// Tween back to the initial pose
    PlayReverse,
}

/// Configuration for one entrance animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealDirective {
    pub direction: RevealDirection,
    pub delay_seconds: f64,
    pub duration_seconds: f64,
    pub distance_pixels: f64,
    /// Reverse when the element scrolls back out; otherwise play only once
    pub replay: bool,
}

impl Default for RevealDirective {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            delay_seconds: 0.0,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            distance_pixels: DEFAULT_DISTANCE_PIXELS,
            replay: true,
        }
    }
}

impl RevealDirective {
    pub fn new(direction: RevealDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.delay_seconds = seconds;
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    pub fn with_distance(mut self, pixels: f64) -> Self {
        self.distance_pixels = pixels;
        self
    }

    /// Play once and stay shown
    pub fn once(mut self) -> Self {
        self.replay = false;
        self
    }

    pub fn initial_pose(&self) -> Pose {
        let (x, y) = self.direction.offset(self.distance_pixels);
        Pose::hidden_at(x, y)
    }

    pub fn final_pose(&self) -> Pose {
        Pose::IDENTITY
    }

    /// Tween used when entering
    pub fn forward_transition(&self) -> Transition {
        Transition::new(self.duration_seconds, self.delay_seconds, Easing::Power2Out)
    }

    /// Tween used when scrolling back out (no delay)
    pub fn reverse_transition(&self) -> Transition {
        Transition::new(self.duration_seconds, 0.0, Easing::Power2Out)
    }
}

/// Whether an element whose top is at `element_top` (relative to the viewport)
/// has reached the trigger line
pub fn is_past_trigger_line(element_top: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height * TRIGGER_LINE
}

/// Per-element reveal state machine
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    directive: RevealDirective,
    state: TriggerState,
}

impl RevealTracker {
    pub fn new(directive: RevealDirective) -> Self {
        Self {
            directive,
            state: TriggerState::Pending,
        }
    }

    pub fn directive(&self) -> &RevealDirective {
        &self.directive
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Feed a fresh measurement of the element's top edge
    ///
    /// Returns the command to apply, if the measurement changed anything.
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> Option<RevealCommand> {
        let past = is_past_trigger_line(element_top, viewport_height);
        match (self.state, past) {
            (TriggerState::Pending | TriggerState::Reversed, true) => {
                self.state = TriggerState::Playing;
                Some(RevealCommand::PlayForward)
            }
            (TriggerState::Playing | TriggerState::Shown, false) if self.directive.replay => {
                self.state = TriggerState::Reversed;
                Some(RevealCommand::PlayReverse)
            }
            _ => None,
        }
    }

    /// Forward tween completed
    pub fn finish(&mut self) {
        if self.state == TriggerState::Playing {
            self.state = TriggerState::Shown;
        }
    }

    /// Pose the element is at, or tweening towards
    pub fn target_pose(&self) -> Pose {
        match self.state {
            TriggerState::Pending | TriggerState::Reversed => self.directive.initial_pose(),
            TriggerState::Playing | TriggerState::Shown => self.directive.final_pose(),
        }
    }

    /// Inline style for the current state
    pub fn style(&self) -> String {
        let transition = match self.state {
            TriggerState::Pending => None,
            TriggerState::Playing | TriggerState::Shown => Some(self.directive.forward_transition()),
            TriggerState::Reversed => Some(self.directive.reverse_transition()),
        };
        pose_style(&self.target_pose(), transition.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn test_initial_pose_moves_only_along_declared_axis() {
        for direction in RevealDirection::ALL {
            let pose = RevealDirective::new(direction).initial_pose();
            match direction {
                RevealDirection::Up | RevealDirection::Down => {
                    assert_eq!(pose.x, 0.0, "{direction} must not offset X");
                    assert_ne!(pose.y, 0.0);
                }
                RevealDirection::Left | RevealDirection::Right => {
                    assert_eq!(pose.y, 0.0, "{direction} must not offset Y");
                    assert_ne!(pose.x, 0.0);
                }
            }
            assert_eq!(pose.rotate_x, 0.0);
            assert_eq!(pose.opacity, 0.0);
            assert_eq!(RevealDirective::new(direction).final_pose().opacity, 1.0);
        }
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(RevealDirection::Up.offset(60.0), (0.0, 60.0));
        assert_eq!(RevealDirection::Down.offset(60.0), (0.0, -60.0));
        assert_eq!(RevealDirection::Left.offset(60.0), (60.0, 0.0));
        assert_eq!(RevealDirection::Right.offset(60.0), (-60.0, 0.0));
    }

    #[test]
    fn test_defaults() {
        let directive = RevealDirective::default();
        assert_eq!(directive.direction, RevealDirection::Up);
        assert_eq!(directive.delay_seconds, 0.0);
        assert_eq!(directive.duration_seconds, 1.0);
        assert_eq!(directive.distance_pixels, 60.0);
        assert!(directive.replay);
    }

    #[test]
    fn test_trigger_line() {
        assert!(!is_past_trigger_line(900.0, VIEWPORT));
        assert!(is_past_trigger_line(850.0, VIEWPORT));
        assert!(is_past_trigger_line(-200.0, VIEWPORT));
    }

    #[test]
    fn test_plays_once_on_entry() {
        let mut tracker = RevealTracker::new(RevealDirective::default());
        assert_eq!(tracker.observe(1200.0, VIEWPORT), None);
        assert_eq!(tracker.state(), TriggerState::Pending);

        assert_eq!(
            tracker.observe(800.0, VIEWPORT),
            Some(RevealCommand::PlayForward)
        );
        assert_eq!(tracker.state(), TriggerState::Playing);

        // Scrolling further down does not restart it
        assert_eq!(tracker.observe(300.0, VIEWPORT), None);
        tracker.finish();
        assert_eq!(tracker.state(), TriggerState::Shown);
        assert_eq!(tracker.target_pose(), Pose::IDENTITY);
    }

    #[test]
    fn test_toggle_reverses_and_replays() {
        let mut tracker = RevealTracker::new(RevealDirective::new(RevealDirection::Left));
        tracker.observe(500.0, VIEWPORT);
        tracker.finish();

        assert_eq!(
            tracker.observe(950.0, VIEWPORT),
            Some(RevealCommand::PlayReverse)
        );
        assert_eq!(tracker.state(), TriggerState::Reversed);
        assert_eq!(tracker.target_pose(), tracker.directive().initial_pose());

        assert_eq!(
            tracker.observe(500.0, VIEWPORT),
            Some(RevealCommand::PlayForward)
        );
        tracker.finish();
        assert_eq!(tracker.state(), TriggerState::Shown);
    }

    #[test]
    fn test_repeated_passes_are_idempotent() {
        let mut tracker = RevealTracker::new(RevealDirective::default().with_delay(0.3));
        let mut styles = Vec::new();
        for _ in 0..3 {
            tracker.observe(100.0, VIEWPORT);
            tracker.finish();
            styles.push(tracker.style());
            tracker.observe(990.0, VIEWPORT);
        }
        assert!(styles.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_once_never_reverses() {
        let mut tracker = RevealTracker::new(RevealDirective::default().once());
        tracker.observe(100.0, VIEWPORT);
        tracker.finish();
        assert_eq!(tracker.observe(2000.0, VIEWPORT), None);
        assert_eq!(tracker.state(), TriggerState::Shown);
    }

    #[test]
    fn test_finish_ignored_outside_playing() {
        let mut tracker = RevealTracker::new(RevealDirective::default());
        tracker.finish();
        assert_eq!(tracker.state(), TriggerState::Pending);
    }

    #[test]
    fn test_pending_style_has_no_transition() {
        let tracker = RevealTracker::new(RevealDirective::default());
        let style = tracker.style();
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("transition: none;"));
    }

    #[test]
    fn test_reverse_transition_skips_delay() {
        let directive = RevealDirective::default().with_delay(0.8).with_duration(0.6);
        assert_eq!(directive.forward_transition().delay_seconds, 0.8);
        assert_eq!(directive.reverse_transition().delay_seconds, 0.0);
        assert_eq!(directive.reverse_transition().duration_seconds, 0.6);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&RevealDirection::Right).unwrap();
        assert_eq!(json, "\"right\"");
        assert_eq!(RevealDirection::Down.to_string(), "down");
    }
}
