use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

const RAINBOW_ANIMATION: &str = "rainbow 2s linear infinite";
const RAINBOW_MS: u32 = 2_000;

#[derive(Debug, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    /// Feeds one `KeyboardEvent.code`. Returns true when it completes the
    /// sequence. Any unexpected key starts over.
    pub fn press(&mut self, code: &str) -> bool {
        if KONAMI_SEQUENCE[self.progress] != code {
            self.progress = 0;
            return false;
        }
        self.progress += 1;
        if self.progress == KONAMI_SEQUENCE.len() {
            self.progress = 0;
            return true;
        }
        false
    }
}

fn set_body_animation(value: &str) {
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        let _ = body.style().set_property("animation", value);
    }
}

#[hook]
pub fn use_konami_code() {
    let tracker = use_mut_ref(KonamiTracker::default);

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if !tracker.borrow_mut().press(&e.code()) {
            return;
        }
        log::info!("Konami code entered");
        set_body_animation(RAINBOW_ANIMATION);
        Timeout::new(RAINBOW_MS, || {
            set_body_animation("");
            dom::alert("🎮 Konami Code activated! You're a true tech enthusiast!");
        })
        .forget();
    });
}
