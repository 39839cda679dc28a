use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom;

pub const REVEAL_SELECTOR: &str = ".service-card, .about-content, .contact-form";
const FADE_IN_CLASS: &str = "fade-in";
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn reveal(element: &Element) {
    let _ = element.class_list().add_1(FADE_IN_CLASS);
}

fn observe(elements: &[Element]) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in elements {
        observer.observe(element);
    }
    Ok((observer, callback))
}

/// Fades sections in the first time they scroll into view. Browsers
/// without IntersectionObserver get everything revealed up front.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let elements = dom::query_all(REVEAL_SELECTOR);
            let observed = match observe(&elements) {
                Ok(observed) => Some(observed),
                Err(e) => {
                    log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                    elements.iter().for_each(reveal);
                    None
                }
            };

            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

/// Promotes `data-src` to `src` on images marked for deferred loading.
pub fn load_deferred_images() {
    for element in dom::query_all("img[data-src]") {
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if let Some(src) = image.get_attribute("data-src") {
            image.set_src(&src);
        }
    }
}
