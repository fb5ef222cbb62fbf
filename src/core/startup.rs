//! Startup gate and splash screen progress
//!
//! The landing page stays behind the splash screen until every critical image
//! has either loaded or failed plus a short grace period, or until the splash
//! has finished its own count, hold and exit, whichever happens first.

use std::collections::BTreeSet;
use std::time::Duration;

/// Images that must resolve before the landing page is shown
pub const CRITICAL_IMAGES: [&str; 2] = ["/img/1.jpeg", "/img/2.jpeg"];

/// Wait after the last critical image resolves
pub const GRACE_DELAY: Duration = Duration::from_secs(1);

/// Period of the simulated progress ticks
pub const PROGRESS_TICK: Duration = Duration::from_millis(100);

/// Maximum progress added per tick
pub const PROGRESS_STEP_MAX: f64 = 15.0;

/// Pause at 100% before the splash starts leaving
pub const COMPLETE_HOLD: Duration = Duration::from_millis(500);

/// Splash exit animation length
pub const EXIT_DURATION: Duration = Duration::from_millis(800);

/// Tracks critical image resolution and the grace period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupGate {
    critical: BTreeSet<String>,
    resolved: BTreeSet<String>,
    grace_elapsed: bool,
    splash_finished: bool,
}

impl Default for StartupGate {
    fn default() -> Self {
        Self::new(CRITICAL_IMAGES)
    }
}

impl StartupGate {
    pub fn new<I, S>(critical: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            critical: critical.into_iter().map(Into::into).collect(),
            resolved: BTreeSet::new(),
            grace_elapsed: false,
            splash_finished: false,
        }
    }

    pub fn critical_images(&self) -> impl Iterator<Item = &str> {
        self.critical.iter().map(String::as_str)
    }

    /// Record that `src` loaded or failed
    ///
    /// Returns `true` exactly once: on the call that resolves the last image.
    /// Failures count as resolved; unknown sources are ignored.
    pub fn resolve(&mut self, src: &str) -> bool {
        if !self.critical.contains(src) || self.all_resolved() {
            return false;
        }
        self.resolved.insert(src.to_string());
        self.all_resolved()
    }

    pub fn all_resolved(&self) -> bool {
        self.resolved.len() == self.critical.len()
    }

    /// Called when the grace timer fires
    pub fn finish_grace(&mut self) {
        if self.all_resolved() {
            self.grace_elapsed = true;
        }
    }

    /// Called when the splash exit animation has completed
    pub fn finish_splash(&mut self) {
        self.splash_finished = true;
    }

    pub fn is_ready(&self) -> bool {
        (self.all_resolved() && self.grace_elapsed) || self.splash_finished
    }
}

/// Splash screen phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Counting,
    Holding,
    Exiting,
}

/// Simulated loading percentage
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    value: f64,
    phase: SplashPhase,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Advance one tick using `random` in `0.0..1.0`
    ///
    /// The tick that finds the value at or above 100 clamps it and moves to
    /// [`SplashPhase::Holding`]; that call returns `true`.
    pub fn tick(&mut self, random: f64) -> bool {
        if self.phase != SplashPhase::Counting {
            return false;
        }
        if self.value >= 100.0 {
            self.value = 100.0;
            self.phase = SplashPhase::Holding;
            return true;
        }
        self.value += random.clamp(0.0, 1.0) * PROGRESS_STEP_MAX;
        false
    }

    /// Hold elapsed; start the exit animation
    pub fn begin_exit(&mut self) {
        if self.phase == SplashPhase::Holding {
            self.phase = SplashPhase::Exiting;
        }
    }

    /// Bar width in percent
    pub fn bar_percent(&self) -> f64 {
        self.value.min(100.0)
    }

    /// Rounded label value
    pub fn label(&self) -> String {
        format!("{}%", self.bar_percent().round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_waits_for_both_images_and_grace() {
        let mut gate = StartupGate::default();
        assert!(!gate.resolve("/img/1.jpeg"));
        assert!(!gate.is_ready());

        gate.finish_grace();
        assert!(!gate.is_ready(), "grace before images must not open the gate");

        assert!(gate.resolve("/img/2.jpeg"));
        assert!(gate.all_resolved());
        assert!(!gate.is_ready());

        gate.finish_grace();
        assert!(gate.is_ready());
    }

    #[test]
    fn test_finished_splash_opens_gate_before_images() {
        let mut gate = StartupGate::default();
        assert!(!gate.resolve("/img/1.jpeg"));
        assert!(!gate.is_ready());

        gate.finish_splash();
        assert!(gate.is_ready());
        assert!(!gate.all_resolved());

        // Late image events leave it open
        assert!(gate.resolve("/img/2.jpeg"));
        assert!(gate.is_ready());
    }

    #[test]
    fn test_duplicate_and_unknown_resolutions() {
        let mut gate = StartupGate::default();
        assert!(!gate.resolve("/img/1.jpeg"));
        assert!(!gate.resolve("/img/1.jpeg"));
        assert!(!gate.resolve("/img/3.jpeg"));
        assert!(!gate.all_resolved());
        assert!(gate.resolve("/img/2.jpeg"));
        // Completion is reported once
        assert!(!gate.resolve("/img/2.jpeg"));
    }

    #[test]
    fn test_empty_gate_is_resolved() {
        let mut gate = StartupGate::new(Vec::<String>::new());
        assert!(gate.all_resolved());
        gate.finish_grace();
        assert!(gate.is_ready());
    }

    #[test]
    fn test_progress_counts_to_hold() {
        let mut progress = LoadingProgress::new();
        let mut ticks = 0;
        while !progress.tick(0.5) {
            ticks += 1;
            assert!(ticks < 100);
        }
        // 14 ticks of 7.5 reach 105, the next tick clamps
        assert_eq!(ticks, 14);
        assert_eq!(progress.phase(), SplashPhase::Holding);
        assert_eq!(progress.bar_percent(), 100.0);
        assert_eq!(progress.label(), "100%");

        assert!(!progress.tick(1.0));
        progress.begin_exit();
        assert_eq!(progress.phase(), SplashPhase::Exiting);
    }

    #[test]
    fn test_label_clamps_overshoot() {
        let mut progress = LoadingProgress::new();
        for _ in 0..7 {
            progress.tick(1.0);
        }
        // 7 * 15 = 105 before the clamping tick
        assert_eq!(progress.bar_percent(), 100.0);
        assert_eq!(progress.label(), "100%");
        assert_eq!(progress.phase(), SplashPhase::Counting);
    }

    #[test]
    fn test_begin_exit_requires_hold() {
        let mut progress = LoadingProgress::new();
        progress.begin_exit();
        assert_eq!(progress.phase(), SplashPhase::Counting);
    }
}
