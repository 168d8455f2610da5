use landing_core::{IconName, NavLink, NavSettings, NavState};
use leptos::ev;
use leptos::prelude::*;

use crate::icons::Icon;

#[component]
pub fn Nav(brand: String, links: Vec<NavLink>, settings: NavSettings) -> impl IntoView {
    let nav = RwSignal::new(settings.initial_state());

    // Entrance animation runs once the bar is in the DOM
    Effect::new(move |_| nav.update(NavState::mount));

    let scroll = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        nav.maybe_update(|n| n.on_scroll(scroll_y));
    });
    on_cleanup(move || scroll.remove());

    let menu_links = links.clone();

    view! {
        <nav class=move || nav.with(NavState::bar_class)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <a href="#" class=move || nav.with(NavState::brand_class)>
                        <Icon name=IconName::Package class="w-8 h-8 text-orange-500" />
                        <span class="text-2xl font-bold bg-gradient-to-r from-orange-500 to-yellow-500 bg-clip-text text-transparent">
                            {brand}
                        </span>
                    </a>

                    <div class=move || nav.with(NavState::links_class)>
                        {links
                            .into_iter()
                            .map(|link| view! {
                                <a href=link.section.href() class="hover:text-orange-500 transition">
                                    {link.label}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class=move || nav.with(NavState::actions_class)>
                        <button class="px-4 py-2 hover:text-orange-500 transition">"Sign In"</button>
                        <button class="px-6 py-2 bg-gradient-to-r from-orange-500 to-yellow-500 rounded-lg font-semibold hover:shadow-lg hover:shadow-orange-500/50 transition transform hover:scale-105">
                            "Get Started"
                        </button>
                    </div>

                    <button
                        class="md:hidden"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || {
                            let icon = if nav.with(NavState::menu_open) { IconName::X } else { IconName::Menu };
                            view! { <Icon name=icon /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.with(NavState::menu_open)>
                <div class="md:hidden bg-slate-800 border-t border-slate-700 animate-slideDown">
                    <div class="px-4 py-4 space-y-3">
                        {menu_links
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.section.href()
                                    class="block hover:text-orange-500"
                                    on:click=move |_| nav.update(NavState::close_menu)
                                >
                                    {link.label.clone()}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                        <button class="w-full px-6 py-2 bg-gradient-to-r from-orange-500 to-yellow-500 rounded-lg font-semibold mt-4">
                            "Get Started"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
