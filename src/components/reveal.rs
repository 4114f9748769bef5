use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::UiError;
use crate::utils::dom;

const REVEAL_SELECTOR: &str =
    "section:not(.hero), .feature-card, .step-card, .testimonial-card, .pricing-card, .stat-card";

fn stagger_delay(index: u32) -> String {
    format!("{:.1}s", f64::from(index) * 0.1)
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn install() -> Result<Self, UiError> {
        let document = dom::document()?;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        if let Err(e) = entry.target().class_list().add_1("visible") {
                            log::debug!("could not reveal element: {:?}", e);
                        }
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            element.class_list().add_1("animate-on-scroll")?;
            element
                .style()
                .set_property("animation-delay", &stagger_delay(index))?;
            observer.observe(&element);
        }
        log::debug!("scroll reveal watching {} elements", nodes.length());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Fades sections and cards in the first time they scroll into view.
/// Inactive where IntersectionObserver is unsupported.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let reveal = RevealObserver::install();
            if let Err(e) = &reveal {
                log::debug!("scroll reveal inactive: {}", e);
            }
            move || drop(reveal)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(12), "1.2s");
    }
}
