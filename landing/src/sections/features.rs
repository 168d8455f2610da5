use landing_core::{FeatureItem, SectionId};
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;
use crate::motion::{Motion, stagger};

#[component]
pub fn Features(features: Vec<FeatureItem>) -> impl IntoView {
    view! {
        <section id=SectionId::Features.anchor() class="py-20 px-4 bg-slate-800/50">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Powerful Features for"
                    highlight="Modern Sellers"
                    subtitle="Everything you need to run a successful Amazon business on autopilot"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {features
                        .into_iter()
                        .enumerate()
                        .map(|(index, feature)| view! {
                            <Motion delay=stagger(0, 100, index)>
                                <FeatureCard feature=feature />
                            </Motion>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    view! {
        <article class="group p-8 bg-slate-900/50 rounded-2xl border border-slate-700 hover:border-orange-500/50 transition-all duration-300 hover:shadow-xl hover:shadow-orange-500/10 transform hover:-translate-y-2">
            <div class="text-orange-500 mb-4 transition-transform duration-300 group-hover:scale-110 group-hover:rotate-6">
                <Icon name=feature.icon class="w-8 h-8" />
            </div>
            <h3 class="text-xl font-bold mb-3">{feature.title}</h3>
            <p class="text-slate-400">{feature.description}</p>
        </article>
    }
}
