use thiserror::Error;

/// Problems loading or validating the site content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Site content has no {0}")]
    Empty(&'static str),

    #[error("Testimonial from {name} has rating {rating}, expected 1-5")]
    InvalidRating { name: String, rating: u8 },

    #[error("{0} pricing plans are marked popular, at most one is allowed")]
    MultiplePopularPlans(usize),

    #[error("Intersection threshold {0} is outside 0.0-1.0")]
    InvalidThreshold(f64),

    #[error("Section anchor #{0} is linked more than once")]
    DuplicateAnchor(String),
}
