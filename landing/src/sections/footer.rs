use landing_core::{AnimationVariant, FooterColumn, IconName, SiteConfig};
use leptos::prelude::*;

use crate::icons::Icon;
use crate::motion::{Motion, stagger};

#[component]
pub fn Footer(config: SiteConfig, columns: Vec<FooterColumn>) -> impl IntoView {
    let copyright_delay = stagger(0, 100, columns.len() + 1);
    let copyright = format!(
        "© {} {}. All rights reserved.",
        config.copyright_year, config.brand
    );

    view! {
        <footer class="py-12 px-4 bg-slate-900 border-t border-slate-800">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-4 gap-8 mb-8">
                    <Motion>
                        <div>
                            <div class="flex items-center space-x-2 mb-4">
                                <Icon name=IconName::Package class="w-6 h-6 text-orange-500" />
                                <span class="text-xl font-bold">{config.brand}</span>
                            </div>
                            <p class="text-slate-400">{config.tagline}</p>
                        </div>
                    </Motion>

                    {columns
                        .into_iter()
                        .enumerate()
                        .map(|(index, column)| view! {
                            <Motion delay=stagger(100, 100, index)>
                                <div>
                                    <h4 class="font-bold mb-4">{column.heading}</h4>
                                    <ul class="space-y-2 text-slate-400">
                                        {column
                                            .links
                                            .into_iter()
                                            .map(|label| view! {
                                                <li>
                                                    <a href="#" class="hover:text-orange-500 transition">{label}</a>
                                                </li>
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            </Motion>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Motion variant=AnimationVariant::FadeIn delay=copyright_delay>
                    <div class="border-t border-slate-800 pt-8 text-center text-slate-400">
                        <p>{copyright}</p>
                    </div>
                </Motion>
            </div>
        </footer>
    }
}
