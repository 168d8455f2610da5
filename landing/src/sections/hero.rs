use landing_core::{AnimationVariant, IconName, Stat};
use leptos::prelude::*;

use crate::icons::Icon;
use crate::motion::{Motion, stagger};

#[component]
pub fn Hero(hero: landing_core::Hero, stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-4">
            <div class="max-w-7xl mx-auto text-center">
                <Motion variant=AnimationVariant::ScaleIn delay=100>
                    <div class="inline-flex items-center space-x-2 bg-orange-500/10 border border-orange-500/20 rounded-full px-4 py-2 mb-8">
                        <Icon name=IconName::Zap class="w-4 h-4 text-orange-500" />
                        <span class="text-sm text-orange-400">{hero.badge}</span>
                    </div>
                </Motion>

                <Motion delay=200>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        {hero.title}
                        <br />
                        <span class="bg-gradient-to-r from-orange-500 to-yellow-500 bg-clip-text text-transparent">
                            {hero.highlight}
                        </span>
                    </h1>
                </Motion>

                <Motion delay=400>
                    <p class="text-xl text-slate-300 mb-12 max-w-3xl mx-auto">{hero.subtitle}</p>
                </Motion>

                <Motion delay=600>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <button class="group px-8 py-4 bg-gradient-to-r from-orange-500 to-yellow-500 rounded-lg font-semibold text-lg hover:shadow-2xl hover:shadow-orange-500/50 transition transform hover:scale-105 flex items-center space-x-2">
                            <span>{hero.primary_cta}</span>
                            <Icon name=IconName::ArrowRight class="w-6 h-6 group-hover:translate-x-1 transition" />
                        </button>
                        <button class="px-8 py-4 border-2 border-slate-600 rounded-lg font-semibold text-lg hover:border-orange-500 transition">
                            {hero.secondary_cta}
                        </button>
                    </div>
                </Motion>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mt-20">
                    {stats
                        .into_iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            let delay = stagger(800, 100, index);
                            view! {
                                <Motion variant=AnimationVariant::ScaleIn delay=delay>
                                    <div class="text-center">
                                        <div class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-orange-500 to-yellow-500 bg-clip-text text-transparent mb-2">
                                            {stat.number}
                                        </div>
                                        <div class="text-slate-400">{stat.label}</div>
                                    </div>
                                </Motion>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
