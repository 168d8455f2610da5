//! Inline SVG icons (Lucide, 24px stroke set).

use landing_core::IconName;
use leptos::prelude::*;

/// Renders an inline stroke icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Package class="w-8 h-8 text-orange-500" /> }
/// ```
#[component]
pub fn Icon(
    name: IconName,
    /// Size/colour utility classes
    #[prop(default = "w-6 h-6")]
    class: &'static str,
    /// Inline style, e.g. a staggered `animation-delay`
    #[prop(optional, into)]
    style: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            style=style
            aria-hidden="true"
        >
            {icon_paths(name)
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Path data for each icon.
pub fn icon_paths(name: IconName) -> &'static [&'static str] {
    match name {
        IconName::Package => &[
            "m7.5 4.27 9 5.15",
            "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
            "m3.3 7 8.7 5 8.7-5",
            "M12 22V12",
        ],
        IconName::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        IconName::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        IconName::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        IconName::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        IconName::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        IconName::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconName::X => &["M18 6 6 18", "m6 6 12 12"],
        IconName::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
    }
}
