//! Poses, easing curves and transitions shared by every entrance animation
//!
//! A [`Pose`] is the visual state of an animated element (translation, rotation
//! around the X axis and opacity). Animations move an element from an initial
//! pose to [`Pose::IDENTITY`]; the browser interpolates between the two using the
//! CSS rendering of an [`Easing`] curve, while [`Easing::apply`] gives the same
//! curve numerically so poses can be sampled outside the browser.

/// Visual state of an animated element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset in pixels
    pub x: f64,
    /// Vertical offset in pixels
    pub y: f64,
    /// Rotation around the X axis in degrees
    pub rotate_x: f64,
    /// Opacity in `0.0..=1.0`
    pub opacity: f64,
}

impl Pose {
    /// Fully visible, untransformed
    pub const IDENTITY: Pose = Pose {
        x: 0.0,
        y: 0.0,
        rotate_x: 0.0,
        opacity: 1.0,
    };

    /// Transparent pose offset by `(x, y)`
    pub fn hidden_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            rotate_x: 0.0,
            opacity: 0.0,
        }
    }

    /// Set the X-axis rotation
    pub fn with_rotation_x(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    /// Whether the transform part of the pose is the identity
    pub fn is_untransformed(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.rotate_x == 0.0
    }

    /// Linear interpolation towards `target` at `t` (unclamped)
    pub fn lerp(&self, target: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            x: mix(self.x, target.x),
            y: mix(self.y, target.y),
            rotate_x: mix(self.rotate_x, target.rotate_x),
            opacity: mix(self.opacity, target.opacity),
        }
    }

    /// CSS `transform` value for this pose
    pub fn css_transform(&self) -> String {
        if self.rotate_x == 0.0 {
            format!("translate3d({}px, {}px, 0px)", self.x, self.y)
        } else {
            format!(
                "translate3d({}px, {}px, 0px) rotateX({}deg)",
                self.x, self.y, self.rotate_x
            )
        }
    }
}

/// Easing curves used by the animator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing, used for scroll-scrubbed animations
    Linear,
    /// Cubic deceleration
    Power2Out,
    /// Deceleration with a slight overshoot, parameterised by the overshoot amount
    BackOut(f64),
}

impl Easing {
    /// Sample the curve at `t` (clamped to `0.0..=1.0`)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }

    /// CSS timing function approximating the curve
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::BackOut(_) => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Timed tween between two poses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_seconds: f64,
    pub delay_seconds: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration_seconds: f64, delay_seconds: f64, easing: Easing) -> Self {
        Self {
            duration_seconds,
            delay_seconds,
            easing,
        }
    }

    /// Eased progress `elapsed_seconds` after the tween was started
    pub fn progress_at(&self, elapsed_seconds: f64) -> f64 {
        let active = elapsed_seconds - self.delay_seconds;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_seconds <= 0.0 {
            return 1.0;
        }
        self.easing.apply(active / self.duration_seconds)
    }

    /// Pose `elapsed_seconds` after starting a tween from `from` to `to`
    pub fn sample(&self, from: &Pose, to: &Pose, elapsed_seconds: f64) -> Pose {
        from.lerp(to, self.progress_at(elapsed_seconds))
    }

    /// CSS `transition` value animating transform and opacity
    pub fn css(&self) -> String {
        let timing = format!(
            "{}s {} {}s",
            self.duration_seconds,
            self.easing.css(),
            self.delay_seconds
        );
        format!("transform {timing}, opacity {timing}")
    }
}

/// Inline style for an element at `pose`, optionally tweening towards it
pub fn pose_style(pose: &Pose, transition: Option<&Transition>) -> String {
    let mut style = format!(
        "transform: {}; opacity: {};",
        pose.css_transform(),
        pose.opacity
    );
    match transition {
        Some(transition) => {
            style.push_str(&format!(" transition: {};", transition.css()));
        }
        None => style.push_str(" transition: none;"),
    }
    style
}
