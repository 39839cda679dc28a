use yew::prelude::*;

use crate::config;
use crate::dom;

fn notice(text: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dom::alert(text);
    })
}

#[function_component(SupportButtons)]
pub fn support_buttons() -> Html {
    html! {
        <div class="support-buttons">
            <button type="button" id="revolut-btn" class="btn btn-primary" onclick={notice(config::REVOLUT_NOTICE)}>
                {"💳 Tip via Revolut"}
            </button>
            <button type="button" id="donation-btn" class="btn btn-secondary" onclick={notice(config::DONATION_NOTICE)}>
                {"☕ Buy me a coffee"}
            </button>
        </div>
    }
}
