// AutoStore Landing Page - Leptos 0.8 Edition
// Developed by The AutoStore Team (c)2024

mod icons;
mod logging;
mod motion;
mod sections;

use landing_core::SiteContent;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::embedded() {
        Ok(content) => {
            logging::init(&content.config.log_filter);
            tracing::info!(brand = %content.config.brand, "mounting landing page");
            leptos::mount::mount_to_body(move || view! { <App content=content /> });
        }
        Err(err) => {
            logging::init("info");
            tracing::error!(%err, "site content failed to load");
            leptos::mount::mount_to_body(ContentUnavailable);
        }
    }
}

#[component]
fn App(content: SiteContent) -> impl IntoView {
    let SiteContent {
        config,
        nav_links,
        hero,
        stats,
        features,
        steps,
        plans,
        testimonials,
        cta,
        footer_columns,
    } = content;

    // Read by every <Motion/> for threshold, duration and easing
    provide_context(config.reveal.clone());

    view! {
        <div class="min-h-screen bg-gradient-to-b from-slate-900 via-slate-800 to-slate-900 text-white overflow-hidden">
            <Nav brand=config.brand.clone() links=nav_links settings=config.nav.clone() />
            <main>
                <Hero hero=hero stats=stats />
                <Features features=features />
                <HowItWorks steps=steps />
                <Pricing plans=plans />
                <Testimonials testimonials=testimonials />
                <CallToAction cta=cta />
            </main>
            <Footer config=config columns=footer_columns />
        </div>
    }
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-900 text-slate-300">
            <p>"This page is temporarily unavailable."</p>
        </div>
    }
}
