use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// All elements matching `selector`, or none if the document or the
/// selector is unusable.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn smooth_scroll(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn scroll_offset() -> f64 {
    let from_window = window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0);
    if from_window > 0.0 {
        return from_window;
    }
    document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_top() as f64)
        .unwrap_or(0.0)
}
