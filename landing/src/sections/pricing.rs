use landing_core::{AnimationVariant, IconName, PricingPlan, SectionId};
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;
use crate::motion::{Motion, stagger};

#[component]
pub fn Pricing(plans: Vec<PricingPlan>) -> impl IntoView {
    view! {
        <section id=SectionId::Pricing.anchor() class="py-20 px-4 bg-slate-800/50">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Simple, Transparent Pricing"
                    subtitle="Choose the plan that fits your business"
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {plans
                        .into_iter()
                        .enumerate()
                        .map(|(index, plan)| view! {
                            <Motion variant=AnimationVariant::ScaleIn delay=stagger(0, 150, index)>
                                <PlanCard plan=plan />
                            </Motion>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

fn card_class(popular: bool) -> &'static str {
    if popular {
        "relative p-8 rounded-2xl transition-all duration-300 hover:scale-105 bg-gradient-to-b from-orange-500/20 to-slate-900 border-2 border-orange-500 shadow-2xl shadow-orange-500/20"
    } else {
        "relative p-8 rounded-2xl transition-all duration-300 hover:scale-105 bg-slate-900/50 border border-slate-700 hover:border-orange-500/30"
    }
}

fn button_class(popular: bool) -> &'static str {
    if popular {
        "w-full py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 bg-gradient-to-r from-orange-500 to-yellow-500 hover:shadow-lg hover:shadow-orange-500/50"
    } else {
        "w-full py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 border-2 border-slate-600 hover:border-orange-500"
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let popular = plan.popular;
    let price = plan.price.label();
    let period = plan.price.period();

    view! {
        <div class=card_class(popular)>
            {popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <span class="bg-gradient-to-r from-orange-500 to-yellow-500 text-slate-900 px-4 py-1 rounded-full text-sm font-bold">
                        "Most Popular"
                    </span>
                </div>
            })}

            <h3 class="text-2xl font-bold mb-2">{plan.name}</h3>
            <div class="mb-6">
                <span class="text-5xl font-bold">{price}</span>
                {period.map(|p| view! { <span class="text-slate-400">{p}</span> })}
            </div>

            <ul class="space-y-4 mb-8">
                {plan
                    .features
                    .into_iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        let style = format!(
                            "animation-delay: {}ms; animation-fill-mode: forwards;",
                            stagger(0, 100, index)
                        );
                        view! {
                            <li class="flex items-start space-x-3 opacity-0 animate-slideIn" style=style>
                                <Icon name=IconName::CheckCircle class="w-5 h-5 text-orange-500 flex-shrink-0 mt-0.5" />
                                <span class="text-slate-300">{feature}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <button class=button_class(popular)>"Get Started"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_plan_gets_highlight_styling() {
        assert!(card_class(true).contains("border-orange-500"));
        assert!(!card_class(false).contains("border-2 border-orange-500"));
        assert!(button_class(true).contains("bg-gradient-to-r"));
        assert!(button_class(false).contains("border-slate-600"));
    }
}
