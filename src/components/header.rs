use web_sys::{Element, ScrollLogicalPosition};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;

const SCROLLED_AFTER: f64 = 50.0;
const HIDE_AFTER: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderStyle {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderStyle {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Tracks scroll direction between events.
#[derive(Debug, Default)]
pub struct HeaderScroll {
    last_offset: f64,
}

impl HeaderScroll {
    pub fn on_scroll(&mut self, offset: f64) -> HeaderStyle {
        let style = HeaderStyle {
            scrolled: offset > SCROLLED_AFTER,
            hidden: offset > self.last_offset && offset > HIDE_AFTER,
        };
        self.last_offset = offset.max(0.0);
        style
    }
}

/// In-page anchors (`href="#..."`) scroll smoothly instead of jumping.
#[hook]
pub fn use_smooth_anchors() {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(anchor) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        e.prevent_default();
        if href.len() < 2 {
            return;
        }
        if let Some(target) = dom::query(&href) {
            dom::smooth_scroll(&target, ScrollLogicalPosition::Start);
        }
    });
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let style = use_state(HeaderStyle::default);
    let scroll = use_mut_ref(HeaderScroll::default);

    {
        let style = style.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = scroll.borrow_mut().on_scroll(dom::scroll_offset());
            if *style != next {
                style.set(next);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let active = (*menu_open).then_some("active");
    let links = [
        ("#home", "Home"),
        ("#services", "Services"),
        ("#about", "About"),
        ("#support", "Support"),
        ("#contact", "Contact"),
    ];

    html! {
        <header
            class={classes!("header", style.scrolled.then_some("scrolled"))}
            style={format!("transform: {};", style.transform())}
        >
            <nav class="nav container">
                <a href="#home" class="nav-logo">{config::SITE_NAME}</a>
                <ul class={classes!("nav-menu", active)}>
                    { for links.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                        </li>
                    }) }
                </ul>
                <button
                    class={classes!("nav-toggle", active)}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </nav>
        </header>
    }
}
