//! Viewport visibility tracking.
//!
//! [`VisibilityTracker`] is the host-independent half of the "is this region on
//! screen yet" hook. The browser side owns the actual `IntersectionObserver` and
//! feeds every entry it receives into [`VisibilityTracker::on_intersection`]; the
//! tracker decides whether the sample counts and latches the answer.
//!
//! Lifecycle:
//!
//! ```text
//! Detached --attach()--> Observing --release()--> Released
//!     \____________________release()_____________/
//! ```
//!
//! Samples are only honoured while `Observing`. A tracker whose region never
//! attaches simply never reports visibility.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};

/// Fraction of a region that must be inside the viewport, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// 10% of the region visible.
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f64) -> Result<Self, ContentError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Threshold(value))
        } else {
            Err(ContentError::InvalidThreshold(value))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ContentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// One intersection report for the tracked region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the region, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    /// A sample where `ratio` of the region is visible.
    pub fn at(ratio: f64) -> Self {
        Self::new(ratio > 0.0, ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservationState {
    /// Region not attached yet; nothing is being observed.
    #[default]
    Detached,
    Observing,
    /// Observation torn down. Terminal.
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTracker {
    threshold: Threshold,
    state: ObservationState,
    visible: bool,
}

impl VisibilityTracker {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: ObservationState::Detached,
            visible: false,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn state(&self) -> ObservationState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start observing. Returns `true` if this call moved the tracker into
    /// `Observing`; a released tracker stays released.
    pub fn attach(&mut self) -> bool {
        if self.state == ObservationState::Detached {
            self.state = ObservationState::Observing;
            return true;
        }
        false
    }

    /// Feed one sample. Returns `true` only on the sample that flips the signal to
    /// visible.
    pub fn on_intersection(&mut self, sample: IntersectionSample) -> bool {
        if self.state != ObservationState::Observing || self.visible {
            return false;
        }
        if self.crosses(sample) {
            self.visible = true;
            tracing::debug!(
                ratio = sample.ratio,
                threshold = self.threshold.get(),
                "region became visible"
            );
            return true;
        }
        false
    }

    /// Stop observing. Later samples are ignored.
    pub fn release(&mut self) {
        self.state = ObservationState::Released;
    }

    fn crosses(&self, sample: IntersectionSample) -> bool {
        // NaN ratios compare false and are dropped
        sample.is_intersecting && sample.ratio >= self.threshold.get()
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observing() -> VisibilityTracker {
        let mut tracker = VisibilityTracker::default();
        assert!(tracker.attach());
        tracker
    }

    #[test]
    fn default_threshold_is_ten_percent() {
        assert_eq!(VisibilityTracker::default().threshold().get(), 0.1);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        assert!(Threshold::new(-0.01).is_err());
        assert!(Threshold::new(1.5).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
    }

    #[test]
    fn fifteen_percent_crosses_ten_percent_threshold() {
        let mut tracker = observing();
        assert!(!tracker.on_intersection(IntersectionSample::at(0.0)));
        assert!(!tracker.on_intersection(IntersectionSample::at(0.05)));
        assert!(!tracker.is_visible());
        assert!(tracker.on_intersection(IntersectionSample::at(0.15)));
        assert!(tracker.is_visible());
    }

    #[test]
    fn exact_threshold_counts() {
        let mut tracker = observing();
        assert!(tracker.on_intersection(IntersectionSample::at(0.1)));
    }

    #[test]
    fn non_intersecting_sample_never_counts() {
        let mut tracker = observing();
        assert!(!tracker.on_intersection(IntersectionSample::new(false, 0.9)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn nan_ratio_is_ignored() {
        let mut tracker = observing();
        assert!(!tracker.on_intersection(IntersectionSample::new(true, f64::NAN)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn stays_visible_after_scrolling_away() {
        let mut tracker = observing();
        tracker.on_intersection(IntersectionSample::at(0.5));
        assert!(!tracker.on_intersection(IntersectionSample::at(0.0)));
        assert!(!tracker.on_intersection(IntersectionSample::at(0.5)));
        assert!(tracker.is_visible());
    }

    #[test]
    fn detached_region_never_reports() {
        let mut tracker = VisibilityTracker::default();
        assert!(!tracker.on_intersection(IntersectionSample::at(1.0)));
        assert!(!tracker.is_visible());
        assert_eq!(tracker.state(), ObservationState::Detached);
    }

    #[test]
    fn released_before_visibility_never_reports() {
        let mut tracker = observing();
        tracker.release();
        assert!(!tracker.on_intersection(IntersectionSample::at(1.0)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn released_tracker_cannot_reattach() {
        let mut tracker = VisibilityTracker::default();
        tracker.release();
        assert!(!tracker.attach());
        assert_eq!(tracker.state(), ObservationState::Released);
    }

    #[test]
    fn attach_is_idempotent() {
        let mut tracker = observing();
        assert!(!tracker.attach());
        assert_eq!(tracker.state(), ObservationState::Observing);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut tracker = VisibilityTracker::new(Threshold::new(0.5).expect("valid"));
        tracker.attach();
        assert!(!tracker.on_intersection(IntersectionSample::at(0.3)));
        assert!(tracker.on_intersection(IntersectionSample::at(0.6)));
    }
}
