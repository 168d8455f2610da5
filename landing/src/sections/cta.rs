use landing_core::{AnimationVariant, Cta, IconName};
use leptos::prelude::*;

use crate::icons::Icon;
use crate::motion::Motion;

#[component]
pub fn CallToAction(cta: Cta) -> impl IntoView {
    view! {
        <Motion variant=AnimationVariant::ScaleIn>
            <section class="py-20 px-4 bg-gradient-to-r from-orange-500 to-yellow-500 relative overflow-hidden">
                <div class="absolute inset-0 opacity-10">
                    <div class="absolute top-0 left-0 w-96 h-96 bg-white rounded-full blur-3xl animate-pulse"></div>
                    <div
                        class="absolute bottom-0 right-0 w-96 h-96 bg-white rounded-full blur-3xl animate-pulse"
                        style="animation-delay: 1s;"
                    ></div>
                </div>
                <div class="max-w-4xl mx-auto text-center relative z-10">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-900 mb-6">{cta.title}</h2>
                    <p class="text-xl text-slate-800 mb-8">{cta.subtitle}</p>
                    <button class="px-8 py-4 bg-slate-900 text-white rounded-lg font-semibold text-lg hover:bg-slate-800 transition transform hover:scale-105 inline-flex items-center space-x-2 shadow-2xl">
                        <span>{cta.button}</span>
                        <Icon name=IconName::ArrowRight class="w-6 h-6 animate-pulse" />
                    </button>
                </div>
            </section>
        </Motion>
    }
}
