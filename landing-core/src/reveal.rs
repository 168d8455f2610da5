//! Reveal wrapper state: variant, delay, latch, and the classes/style they produce.

use std::time::Duration;

use crate::latch::{RevealLatch, RevealPhase};
use crate::variant::AnimationVariant;

/// CSS transition applied between the initial and revealed classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: String,
}

impl Transition {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(700);
    pub const DEFAULT_EASING: &'static str = "ease-out";
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            easing: Self::DEFAULT_EASING.to_string(),
        }
    }
}

/// Per-instance reveal parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealConfig {
    pub variant: AnimationVariant,
    /// Offset before the transition starts.
    pub delay: Duration,
    /// Extra classes appended after the animation classes.
    pub class: String,
}

impl RevealConfig {
    pub fn new(variant: AnimationVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

/// State of one reveal wrapper instance.
///
/// Owns its latch; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    config: RevealConfig,
    transition: Transition,
    latch: RevealLatch,
}

impl Reveal {
    pub fn new(config: RevealConfig, transition: Transition) -> Self {
        Self {
            config,
            transition,
            latch: RevealLatch::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn phase(&self) -> RevealPhase {
        self.latch.phase()
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    /// Feed a visibility signal. Returns `true` on the call that reveals.
    pub fn observe(&mut self, visible: bool) -> bool {
        let flipped = self.latch.observe(visible);
        if flipped {
            tracing::debug!(
                variant = %self.config.variant,
                delay_ms = self.config.delay.as_millis() as u64,
                "revealing"
            );
        }
        flipped
    }

    /// Animation classes for the current phase.
    pub fn animation_classes(&self) -> &'static str {
        let styles = self.config.variant.styles();
        match self.latch.phase() {
            RevealPhase::Unrevealed => styles.initial,
            RevealPhase::Revealed => styles.revealed,
        }
    }

    /// Full `class` attribute value.
    pub fn class_name(&self) -> String {
        let mut class = format!("{} transition-all", self.animation_classes());
        let extra = self.config.class.trim();
        if !extra.is_empty() {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }

    /// Inline `style` attribute value. Independent of phase, so the delay is in
    /// place before the revealed classes land.
    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-timing-function: {}; transition-delay: {}ms;",
            self.transition.duration.as_millis(),
            self.transition.easing,
            self.config.delay.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reveal(variant: AnimationVariant, delay_ms: u64) -> Reveal {
        Reveal::new(
            RevealConfig::new(variant).with_delay(Duration::from_millis(delay_ms)),
            Transition::default(),
        )
    }

    #[test]
    fn applies_initial_style_until_visible() {
        for variant in AnimationVariant::ALL {
            let mut r = reveal(variant, 0);
            assert_eq!(r.animation_classes(), variant.styles().initial);
            r.observe(false);
            assert_eq!(r.animation_classes(), variant.styles().initial);
        }
    }

    #[test]
    fn applies_revealed_style_permanently() {
        for variant in AnimationVariant::ALL {
            let mut r = reveal(variant, 0);
            assert!(r.observe(true));
            assert_eq!(r.animation_classes(), variant.styles().revealed);
            r.observe(false);
            assert!(!r.observe(true));
            assert_eq!(r.animation_classes(), variant.styles().revealed);
        }
    }

    #[test]
    fn repeated_visible_signals_are_idempotent() {
        let mut r = reveal(AnimationVariant::ScaleIn, 0);
        r.observe(true);
        let after_first = r.class_name();
        for _ in 0..5 {
            r.observe(true);
        }
        assert_eq!(r.class_name(), after_first);
    }

    #[test]
    fn unknown_variant_uses_fade_up_classes() {
        let r = reveal(AnimationVariant::from_name("bogus"), 0);
        assert_eq!(r.class_name(), "opacity-0 translate-y-10 transition-all");
    }

    #[test]
    fn delay_is_expressed_as_transition_delay() {
        let mut r = reveal(AnimationVariant::FadeUp, 600);
        let before = r.style();
        r.observe(true);
        assert_eq!(
            r.style(),
            "transition-duration: 700ms; transition-timing-function: ease-out; transition-delay: 600ms;"
        );
        assert_eq!(r.style(), before);
        assert_eq!(r.class_name(), "opacity-100 translate-y-0 transition-all");
    }

    #[test]
    fn extra_classes_are_appended() {
        let r = Reveal::new(
            RevealConfig::new(AnimationVariant::FadeIn).with_class("  col-span-2 "),
            Transition::default(),
        );
        assert_eq!(r.class_name(), "opacity-0 transition-all col-span-2");
    }

    #[test]
    fn custom_transition_shows_in_style() {
        let r = Reveal::new(
            RevealConfig::default(),
            Transition {
                duration: Duration::from_millis(450),
                easing: "linear".into(),
            },
        );
        assert_eq!(
            r.style(),
            "transition-duration: 450ms; transition-timing-function: linear; transition-delay: 0ms;"
        );
    }
}
