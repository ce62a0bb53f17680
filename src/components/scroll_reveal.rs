use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

use crate::config;
use crate::effects::reveal::RevealTiming;

/// Watches elements and marks each one `revealed` the first time it is seen.
/// Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal(element: &Element, delay_ms: u32) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("transition-delay", &format!("{}ms", delay_ms));
    }
    let _ = element.class_list().add_1("revealed");
}

/// Starts observing everything matching `selector`. Returns `None` when the
/// browser has no `IntersectionObserver`; matched elements are then shown at once.
pub fn observe(selector: &str) -> Option<RevealObserver> {
    let document = web_sys::window().and_then(|w| w.document())?;
    let nodes = document.query_selector_all(selector).ok()?;
    let elements: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let timing = RevealTiming::new(&config::get_config().reveal);
    for element in &elements {
        let _ = element.class_list().add_1("reveal");
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for (name, value) in timing.custom_properties() {
                let _ = style.set_property(name, &value);
            }
        }
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(|entry| entry.is_intersecting())
            .map(|entry| entry.target());

        for (index, target) in visible.enumerate() {
            reveal(&target, timing.delay_ms(index));
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(_) => {
            log::debug!("IntersectionObserver unavailable, revealing everything");
            for element in &elements {
                reveal(element, 0);
            }
            return None;
        }
    };

    for element in &elements {
        observer.observe(element);
    }
    log::debug!("Watching {} elements for reveal", elements.len());

    Some(RevealObserver { observer, _callback: callback })
}
