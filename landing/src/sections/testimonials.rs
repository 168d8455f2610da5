use landing_core::{AnimationVariant, IconName, SectionId, Testimonial};
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;
use crate::motion::{Motion, stagger};

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id=SectionId::Testimonials.anchor() class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Loved by Sellers Worldwide"
                    subtitle="See what our customers have to say"
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {testimonials
                        .into_iter()
                        .enumerate()
                        .map(|(index, testimonial)| view! {
                            <Motion variant=AnimationVariant::SlideRight delay=stagger(0, 150, index)>
                                <TestimonialCard testimonial=testimonial />
                            </Motion>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initial = testimonial.initial();
    let stars = (0..testimonial.rating as usize)
        .map(|index| {
            let style = format!("animation-delay: {}ms;", stagger(0, 100, index));
            view! {
                <Icon
                    name=IconName::Star
                    class="w-5 h-5 fill-orange-500 text-orange-500 animate-pulse"
                    style=style
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="p-8 bg-slate-900/50 rounded-2xl border border-slate-700 hover:border-orange-500/30 transition-all duration-300 hover:shadow-xl hover:shadow-orange-500/10 transform hover:-translate-y-2">
            <div class="flex mb-4">{stars}</div>
            <p class="text-slate-300 mb-6 italic">{format!("\"{}\"", testimonial.text)}</p>
            <div class="flex items-center space-x-3">
                <div class="w-12 h-12 bg-gradient-to-r from-orange-500 to-yellow-500 rounded-full flex items-center justify-center font-bold text-slate-900 animate-pulse">
                    {initial}
                </div>
                <div>
                    <div class="font-bold">{testimonial.name}</div>
                    <div class="text-sm text-slate-400">{testimonial.role}</div>
                </div>
            </div>
        </div>
    }
}
