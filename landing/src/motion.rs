//! Scroll-triggered reveal animations.
//!
//! [`use_in_view`] wires an `IntersectionObserver` to a
//! [`VisibilityTracker`]; [`Motion`] wraps arbitrary children and swaps their
//! animation classes exactly once, the first time they come into view.

use std::time::Duration;

use landing_core::{
    AnimationVariant, IntersectionSample, Reveal, RevealConfig, RevealSettings, Threshold,
    VisibilityTracker,
};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Live observer plus the callback it calls into. Dropping it disconnects.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One-shot "has this region been on screen" signal.
///
/// Observation starts once `target` is attached and is torn down with the owning
/// component. The returned signal goes `false -> true` at most once.
pub fn use_in_view(target: NodeRef<Div>, threshold: Threshold) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    let tracker = StoredValue::new_local(VisibilityTracker::new(threshold));
    let observation = StoredValue::new_local(None::<Observation>);

    Effect::new(move |_| {
        // Not attached yet: the effect re-runs when the node ref is filled
        let Some(element) = target.get() else {
            return;
        };
        if !tracker.try_update_value(|t| t.attach()).unwrap_or(false) {
            return;
        }

        let on_sample = move |sample: IntersectionSample| {
            let flipped = tracker
                .try_update_value(|t| t.on_intersection(sample))
                .unwrap_or(false);
            if flipped {
                set_in_view.try_set(true);
            }
        };

        match observe(&element, threshold, on_sample) {
            Ok(live) => observation.set_value(Some(live)),
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable, region stays hidden")
            }
        }
    });

    on_cleanup(move || {
        tracker.try_update_value(|t| t.release());
        observation.try_update_value(|live| live.take());
    });

    in_view
}

fn observe(
    element: &web_sys::Element,
    threshold: Threshold,
    mut on_sample: impl FnMut(IntersectionSample) + 'static,
) -> Result<Observation, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_sample(IntersectionSample::new(
                entry.is_intersecting(),
                entry.intersection_ratio(),
            ));
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.get()));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Delay for the `index`-th item of a staggered group, in milliseconds.
pub fn stagger(base_ms: u64, step_ms: u64, index: usize) -> u64 {
    base_ms + step_ms * index as u64
}

/// Reveal wrapper.
///
/// Renders `children` with the variant's initial classes until the wrapper is
/// first seen, then switches to the revealed classes for good. Threshold,
/// duration and easing come from the [`RevealSettings`] context when present.
#[component]
pub fn Motion(
    children: Children,
    /// Animation variant, `fadeUp` when omitted
    #[prop(optional)]
    variant: AnimationVariant,
    /// Transition delay in milliseconds
    #[prop(optional)]
    delay: u64,
    /// Extra classes appended after the animation classes
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let settings = use_context::<RevealSettings>().unwrap_or_default();
    let config = RevealConfig::new(variant)
        .with_delay(Duration::from_millis(delay))
        .with_class(class);
    let reveal = RwSignal::new(Reveal::new(config, settings.transition()));

    let target = NodeRef::<Div>::new();
    let in_view = use_in_view(target, settings.threshold);

    Effect::new(move |_| {
        let visible = in_view.get();
        reveal.maybe_update(|r| r.observe(visible));
    });

    let style = reveal.with_untracked(Reveal::style);

    view! {
        <div node_ref=target class=move || reveal.with(Reveal::class_name) style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_from_base() {
        assert_eq!(stagger(0, 100, 0), 0);
        assert_eq!(stagger(0, 150, 2), 300);
        assert_eq!(stagger(800, 100, 3), 1100);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> web_sys::HtmlElement {
        let document = document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root.unchecked_into()
    }

    #[wasm_bindgen_test]
    fn renders_initial_classes_and_delay() {
        let root = mount_root();
        let handle = leptos::mount::mount_to(root.clone(), || {
            view! {
                <Motion variant=AnimationVariant::ScaleIn delay=600 class="extra">
                    <p>"hello"</p>
                </Motion>
            }
        });

        let wrapper = root.first_element_child().unwrap();
        let class = wrapper.get_attribute("class").unwrap();
        assert_eq!(class, "opacity-0 scale-95 transition-all extra");
        let style = wrapper.get_attribute("style").unwrap();
        assert!(style.contains("transition-delay: 600ms"));
        assert!(style.contains("transition-duration: 700ms"));

        drop(handle);
    }

    #[wasm_bindgen_test]
    fn unmounting_before_visible_is_quiet() {
        let root = mount_root();
        let handle = leptos::mount::mount_to(root.clone(), || {
            view! { <Motion><p>"bye"</p></Motion> }
        });
        drop(handle);
        assert!(root.first_element_child().is_none());
    }
}
