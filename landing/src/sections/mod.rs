// Landing page sections
// Developed by The AutoStore Team (c)2024

mod cta;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod pricing;
mod testimonials;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use pricing::Pricing;
pub use testimonials::Testimonials;

use leptos::prelude::*;

use crate::motion::Motion;

/// Centered section heading used by every content section.
#[component]
fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    /// Gradient-highlighted tail of the title
    #[prop(optional, into)]
    highlight: String,
) -> impl IntoView {
    view! {
        <Motion>
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">
                    {title}
                    {(!highlight.is_empty()).then(|| view! {
                        <span class="bg-gradient-to-r from-orange-500 to-yellow-500 bg-clip-text text-transparent">
                            {format!(" {highlight}")}
                        </span>
                    })}
                </h2>
                <p class="text-xl text-slate-300">{subtitle}</p>
            </div>
        </Motion>
    }
}
