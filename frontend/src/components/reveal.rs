use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Animated elements start hidden; `fadeInUp` brings them in.
pub const REVEAL_STYLES: &str = r#"
    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .rule-card, .contact-card, .faq-item {
        opacity: 0;
    }
"#;

/// Animation to apply to an observed element, if any.
pub fn reveal_animation(is_intersecting: bool) -> Option<&'static str> {
    is_intersecting.then_some(config::REVEAL_ANIMATION)
}

type RevealCallback = Closure<dyn FnMut(Array)>;

fn observe_reveal_targets() -> Option<(IntersectionObserver, RevealCallback)> {
    let document = window()?.document()?;

    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if let Some(animation) = reveal_animation(entry.is_intersecting()) {
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    let _ = target.style().set_property("animation", animation);
                }
            }
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let targets = document.query_selector_all(config::REVEAL_SELECTOR).ok()?;
    let mut observed = 0;
    for index in 0..targets.length() {
        if let Some(element) = targets.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
            observed += 1;
        }
    }
    log::debug!("Observing {} elements for entrance animation", observed);

    Some((observer, callback))
}

/// Fades cards in as they scroll into view. Elements stay observed after their
/// first reveal; the observer is dropped with the calling component.
#[hook]
pub fn use_entrance_animation() {
    use_effect_with_deps(
        move |_| {
            let observation = observe_reveal_targets();
            if observation.is_none() {
                log::warn!("Entrance animation unavailable in this browser");
            }
            move || {
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_intersecting_entries_animate() {
        assert_eq!(reveal_animation(true), Some("fadeInUp 0.6s ease forwards"));
        assert_eq!(reveal_animation(false), None);
    }

    #[test]
    fn observer_fires_early_and_shrinks_bottom_edge() {
        assert_eq!(config::REVEAL_THRESHOLD, 0.1);
        let margins: Vec<&str> = config::REVEAL_ROOT_MARGIN.split(' ').collect();
        assert_eq!(margins, ["0px", "0px", "-50px", "0px"]);
    }

    #[test]
    fn hidden_by_default_matches_observed_selector() {
        for selector in config::REVEAL_SELECTOR.split(", ") {
            assert!(REVEAL_STYLES.contains(selector), "{selector} not hidden");
        }
    }
}
