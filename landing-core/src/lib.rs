//! # landing-core
//!
//! Host-independent core of the AutoStore landing page.
//!
//! The browser crate (`autostore-landing`) owns the DOM: it creates the
//! `IntersectionObserver`s, listens to window scroll, and renders views. Everything
//! that decides *what* those views look like lives here so it can be tested on a
//! native target without a browser:
//!
//! - [`tracker`] - visibility tracking with a one-way latch and explicit
//!   attach/release lifecycle
//! - [`latch`] - the `Unrevealed -> Revealed` latch
//! - [`variant`] - animation variants and their class pairs
//! - [`reveal`] - per-instance reveal state producing `class`/`style` values
//! - [`nav`] - navigation bar state (menu, scroll flag, mount entrance)
//! - [`config`] / [`content`] - the embedded site document
//!
//! ```rust
//! use landing_core::{AnimationVariant, IntersectionSample, Reveal, RevealConfig, Transition, VisibilityTracker};
//! use std::time::Duration;
//!
//! let mut tracker = VisibilityTracker::default();
//! let mut reveal = Reveal::new(
//!     RevealConfig::new(AnimationVariant::ScaleIn).with_delay(Duration::from_millis(150)),
//!     Transition::default(),
//! );
//!
//! tracker.attach();
//! tracker.on_intersection(IntersectionSample::at(0.05));
//! reveal.observe(tracker.is_visible());
//! assert!(!reveal.is_revealed());
//!
//! tracker.on_intersection(IntersectionSample::at(0.15));
//! reveal.observe(tracker.is_visible());
//! assert_eq!(reveal.animation_classes(), "opacity-100 scale-100");
//! ```
//!
//! ---
//!
//! Developed by The AutoStore Team (c)2024

pub mod config;
pub mod content;
pub mod error;
pub mod latch;
pub mod nav;
pub mod reveal;
pub mod tracker;
pub mod variant;

pub use config::{NavSettings, RevealSettings, SiteConfig};
pub use content::{
    Cta, FeatureItem, FooterColumn, Hero, IconName, NavLink, Price, PricingPlan, SectionId,
    SiteContent, Stat, Step, Testimonial,
};
pub use error::ContentError;
pub use latch::{RevealLatch, RevealPhase};
pub use nav::NavState;
pub use reveal::{Reveal, RevealConfig, Transition};
pub use tracker::{IntersectionSample, ObservationState, Threshold, VisibilityTracker};
pub use variant::{AnimationVariant, StylePair};
