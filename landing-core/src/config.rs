//! Site-wide tunables. Every field has a default so partial documents load.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::nav::{DEFAULT_SCROLL_THRESHOLD_PX, NavState};
use crate::reveal::Transition;
use crate::tracker::Threshold;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub copyright_year: u16,
    /// `tracing_subscriber::EnvFilter` directives for the console logger.
    pub log_filter: String,
    pub reveal: RevealSettings,
    pub nav: NavSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "AutoStore".into(),
            tagline: "Automating Amazon success, one store at a time.".into(),
            copyright_year: 2024,
            log_filter: "info".into(),
            reveal: RevealSettings::default(),
            nav: NavSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: Threshold,
    pub duration_ms: u64,
    pub easing: String,
}

impl RevealSettings {
    pub fn transition(&self) -> Transition {
        Transition {
            duration: Duration::from_millis(self.duration_ms),
            easing: self.easing.clone(),
        }
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            duration_ms: Transition::DEFAULT_DURATION.as_millis() as u64,
            easing: Transition::DEFAULT_EASING.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    pub scroll_threshold_px: f64,
}

impl NavSettings {
    pub fn initial_state(&self) -> NavState {
        NavState::new(self.scroll_threshold_px)
    }
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}
