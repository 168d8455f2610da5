use landing_core::{SectionId, Step};
use leptos::prelude::*;

use super::SectionHeader;
use crate::motion::{Motion, stagger};

#[component]
pub fn HowItWorks(steps: Vec<Step>) -> impl IntoView {
    view! {
        <section id=SectionId::HowItWorks.anchor() class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <SectionHeader title="How It Works" subtitle="Get started in three simple steps" />
                <div class="grid md:grid-cols-3 gap-12">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| view! {
                            <Motion delay=stagger(0, 200, index)>
                                <div class="text-center transform hover:scale-105 transition-transform duration-300">
                                    <div class="text-6xl font-bold text-orange-500/20 mb-4 transition-all duration-300 hover:text-orange-500/40">
                                        {step.step}
                                    </div>
                                    <h3 class="text-2xl font-bold mb-4">{step.title}</h3>
                                    <p class="text-slate-400">{step.description}</p>
                                </div>
                            </Motion>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
