//! Animation variants for scroll reveals.
//!
//! Each variant names a pair of utility-class strings: the classes applied while a
//! region is still hidden, and the classes applied once it has been revealed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Class pair for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StylePair {
    /// Classes applied before the reveal.
    pub initial: &'static str,
    /// Classes applied after the reveal.
    pub revealed: &'static str,
}

/// Named reveal animation.
///
/// Parsing never fails: unknown names resolve to [`AnimationVariant::FadeUp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationVariant {
    /// Fade in while rising from below.
    #[default]
    FadeUp,
    /// Plain opacity fade.
    FadeIn,
    /// Fade in while growing from 95% scale.
    ScaleIn,
    /// Fade in while sliding in from the right.
    SlideLeft,
    /// Fade in while sliding in from the left.
    SlideRight,
}

impl AnimationVariant {
    /// Every variant, in declaration order.
    pub const ALL: [AnimationVariant; 5] = [
        AnimationVariant::FadeUp,
        AnimationVariant::FadeIn,
        AnimationVariant::ScaleIn,
        AnimationVariant::SlideLeft,
        AnimationVariant::SlideRight,
    ];

    /// Resolve a variant name, falling back to `fadeUp` for anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fadeUp" => AnimationVariant::FadeUp,
            "fadeIn" => AnimationVariant::FadeIn,
            "scaleIn" => AnimationVariant::ScaleIn,
            "slideLeft" => AnimationVariant::SlideLeft,
            "slideRight" => AnimationVariant::SlideRight,
            _ => AnimationVariant::default(),
        }
    }

    /// The camelCase name used in content documents.
    pub fn as_name(&self) -> &'static str {
        match self {
            AnimationVariant::FadeUp => "fadeUp",
            AnimationVariant::FadeIn => "fadeIn",
            AnimationVariant::ScaleIn => "scaleIn",
            AnimationVariant::SlideLeft => "slideLeft",
            AnimationVariant::SlideRight => "slideRight",
        }
    }

    /// The (initial, revealed) class pair for this variant.
    pub fn styles(&self) -> StylePair {
        match self {
            AnimationVariant::FadeUp => StylePair {
                initial: "opacity-0 translate-y-10",
                revealed: "opacity-100 translate-y-0",
            },
            AnimationVariant::FadeIn => StylePair {
                initial: "opacity-0",
                revealed: "opacity-100",
            },
            AnimationVariant::ScaleIn => StylePair {
                initial: "opacity-0 scale-95",
                revealed: "opacity-100 scale-100",
            },
            AnimationVariant::SlideLeft => StylePair {
                initial: "opacity-0 translate-x-10",
                revealed: "opacity-100 translate-x-0",
            },
            AnimationVariant::SlideRight => StylePair {
                initial: "opacity-0 -translate-x-10",
                revealed: "opacity-100 translate-x-0",
            },
        }
    }
}

impl FromStr for AnimationVariant {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AnimationVariant::from_name(s))
    }
}

impl From<&str> for AnimationVariant {
    fn from(name: &str) -> Self {
        AnimationVariant::from_name(name)
    }
}

impl From<String> for AnimationVariant {
    fn from(name: String) -> Self {
        AnimationVariant::from_name(&name)
    }
}

impl From<AnimationVariant> for String {
    fn from(variant: AnimationVariant) -> Self {
        variant.as_name().to_string()
    }
}

impl fmt::Display for AnimationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}
