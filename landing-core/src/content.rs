//! Static page content.
//!
//! The whole page is driven by one JSON document, embedded at compile time. Records
//! here are plain data: nothing mutates them after load.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::ContentError;

const EMBEDDED_CONTENT: &str = include_str!("../content/site.json");

/// Icons the page knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconName {
    Package,
    TrendingUp,
    Clock,
    Shield,
    BarChart3,
    Zap,
    CheckCircle,
    Menu,
    X,
    Star,
    ArrowRight,
}

/// In-page anchor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Features,
    HowItWorks,
    Pricing,
    Testimonials,
}

impl SectionId {
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Features => "features",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Pricing => "pricing",
            SectionId::Testimonials => "testimonials",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub section: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub icon: IconName,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub step: String,
    pub title: String,
    pub description: String,
}

/// A plan price: either a monthly amount in dollars or a quote label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Monthly(u32),
    Quote(String),
}

impl Price {
    /// Headline text, e.g. `$299` or `Custom`.
    pub fn label(&self) -> String {
        match self {
            Price::Monthly(amount) => format!("${amount}"),
            Price::Quote(label) => label.clone(),
        }
    }

    /// Billing period suffix, shown only for monthly prices.
    pub fn period(&self) -> Option<&'static str> {
        match self {
            Price::Monthly(_) => Some("/month"),
            Price::Quote(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: Price,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
    pub rating: u8,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Avatar letter: first character of the name.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub title: String,
    pub subtitle: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<String>,
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub config: SiteConfig,
    pub nav_links: Vec<NavLink>,
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub features: Vec<FeatureItem>,
    #[serde(default)]
    pub steps: Vec<Step>,
    pub plans: Vec<PricingPlan>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    pub cta: Cta,
    #[serde(default)]
    pub footer_columns: Vec<FooterColumn>,
}

impl SiteContent {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// The document shipped with the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.nav_links.is_empty() {
            return Err(ContentError::Empty("navigation links"));
        }
        if self.features.is_empty() {
            return Err(ContentError::Empty("features"));
        }
        if self.plans.is_empty() {
            return Err(ContentError::Empty("pricing plans"));
        }

        let mut anchors = HashSet::new();
        for link in &self.nav_links {
            if !anchors.insert(link.section) {
                return Err(ContentError::DuplicateAnchor(link.section.anchor().into()));
            }
        }

        for testimonial in &self.testimonials {
            if !(1..=Testimonial::MAX_RATING).contains(&testimonial.rating) {
                return Err(ContentError::InvalidRating {
                    name: testimonial.name.clone(),
                    rating: testimonial.rating,
                });
            }
        }

        let popular = self.plans.iter().filter(|p| p.popular).count();
        if popular > 1 {
            return Err(ContentError::MultiplePopularPlans(popular));
        }

        // Optional sections render as empty grids; worth a warning, not a failure
        for (name, empty) in [
            ("stats", self.stats.is_empty()),
            ("steps", self.steps.is_empty()),
            ("testimonials", self.testimonials.is_empty()),
            ("footer columns", self.footer_columns.is_empty()),
        ] {
            if empty {
                tracing::warn!(section = name, "site content section is empty");
            }
        }

        Ok(())
    }

    pub fn popular_plan(&self) -> Option<&PricingPlan> {
        self.plans.iter().find(|p| p.popular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_json() -> serde_json::Value {
        serde_json::json!({
            "nav_links": [{ "label": "Pricing", "section": "pricing" }],
            "hero": {
                "badge": "b", "title": "t", "highlight": "h", "subtitle": "s",
                "primary_cta": "p", "secondary_cta": "c"
            },
            "features": [{ "icon": "Zap", "title": "Fast", "description": "d" }],
            "plans": [{ "name": "Starter", "price": 299, "features": ["a"] }],
            "cta": { "title": "t", "subtitle": "s", "button": "b" }
        })
    }

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.steps.len(), 3);
        assert_eq!(content.plans.len(), 3);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.footer_columns.len(), 3);
        assert_eq!(content.config.brand, "AutoStore");
    }

    #[test]
    fn embedded_nav_links_cover_every_section() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        let anchors: Vec<&str> = content.nav_links.iter().map(|l| l.section.anchor()).collect();
        assert_eq!(anchors, vec!["features", "how-it-works", "pricing", "testimonials"]);
    }

    #[test]
    fn embedded_professional_plan_is_popular() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        let popular = content.popular_plan().expect("one popular plan");
        assert_eq!(popular.name, "Professional");
        assert_eq!(popular.price.label(), "$699");
    }

    #[test]
    fn minimal_document_loads_with_defaults() {
        let content = SiteContent::from_json(&minimal_json().to_string()).expect("valid");
        assert!(content.stats.is_empty());
        assert_eq!(content.config.log_filter, "info");
        assert!(content.popular_plan().is_none());
    }

    #[test]
    fn price_labels() {
        assert_eq!(Price::Monthly(299).label(), "$299");
        assert_eq!(Price::Monthly(299).period(), Some("/month"));
        assert_eq!(Price::Quote("Custom".into()).label(), "Custom");
        assert_eq!(Price::Quote("Custom".into()).period(), None);
    }

    #[test]
    fn price_parses_number_or_text() {
        let prices: Vec<Price> = serde_json::from_str(r#"[699, "Custom"]"#).expect("valid json");
        assert_eq!(prices, vec![Price::Monthly(699), Price::Quote("Custom".into())]);
    }

    #[test]
    fn testimonial_initial() {
        let t = Testimonial {
            name: "Émile".into(),
            role: "r".into(),
            text: "t".into(),
            rating: 5,
        };
        assert_eq!(t.initial(), "É");
        let anonymous = Testimonial {
            name: String::new(),
            ..t
        };
        assert_eq!(anonymous.initial(), "");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteContent::from_json("{ not json").expect_err("malformed");
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn rejects_empty_features() {
        let mut json = minimal_json();
        json["features"] = serde_json::json!([]);
        let err = SiteContent::from_json(&json.to_string()).expect_err("no features");
        assert!(matches!(err, ContentError::Empty("features")));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut json = minimal_json();
        json["testimonials"] = serde_json::json!([
            { "name": "Sam", "role": "r", "text": "t", "rating": 6 }
        ]);
        let err = SiteContent::from_json(&json.to_string()).expect_err("rating 6");
        assert_eq!(err.to_string(), "Testimonial from Sam has rating 6, expected 1-5");
    }

    #[test]
    fn rejects_two_popular_plans() {
        let mut json = minimal_json();
        json["plans"] = serde_json::json!([
            { "name": "A", "price": 1, "features": [], "popular": true },
            { "name": "B", "price": 2, "features": [], "popular": true }
        ]);
        let err = SiteContent::from_json(&json.to_string()).expect_err("two popular");
        assert!(matches!(err, ContentError::MultiplePopularPlans(2)));
    }

    #[test]
    fn rejects_duplicate_anchor() {
        let mut json = minimal_json();
        json["nav_links"] = serde_json::json!([
            { "label": "Pricing", "section": "pricing" },
            { "label": "Plans", "section": "pricing" }
        ]);
        let err = SiteContent::from_json(&json.to_string()).expect_err("duplicate");
        assert!(matches!(err, ContentError::DuplicateAnchor(ref a) if a == "pricing"));
    }

    #[test]
    fn unknown_section_is_a_parse_error() {
        let mut json = minimal_json();
        json["nav_links"] = serde_json::json!([{ "label": "Blog", "section": "blog" }]);
        assert!(matches!(
            SiteContent::from_json(&json.to_string()),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn section_hrefs() {
        assert_eq!(SectionId::HowItWorks.href(), "#how-it-works");
        assert_eq!(SectionId::Features.to_string(), "features");
    }
}
