use yew::prelude::*;

use crate::contact::validation::MIN_MESSAGE_LENGTH;

pub const TEXTAREA_MIN_HEIGHT: i32 = 120;

pub fn below_minimum(count: usize) -> bool {
    count < MIN_MESSAGE_LENGTH
}

pub fn counter_label(count: usize) -> String {
    if below_minimum(count) {
        format!("{} characters (minimum {})", count, MIN_MESSAGE_LENGTH)
    } else {
        format!("{} characters", count)
    }
}

/// Height in pixels for a textarea whose content needs `scroll_height`.
pub fn textarea_height(scroll_height: i32) -> i32 {
    scroll_height.max(TEXTAREA_MIN_HEIGHT)
}

#[derive(Properties, PartialEq)]
pub struct CharCounterProps {
    pub count: usize,
}

#[function_component(CharCounter)]
pub fn char_counter(props: &CharCounterProps) -> Html {
    let color = if below_minimum(props.count) {
        "var(--error)"
    } else {
        "var(--text-light)"
    };

    html! {
        <div
            class="char-counter"
            style={format!("font-size: 0.875rem; color: {}; text-align: right; margin-top: 0.5rem;", color)}
        >
            {counter_label(props.count)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mentions_minimum_until_reached() {
        assert_eq!(counter_label(0), "0 characters (minimum 20)");
        assert_eq!(counter_label(19), "19 characters (minimum 20)");
        assert_eq!(counter_label(20), "20 characters");
        assert!(below_minimum(19));
        assert!(!below_minimum(20));
    }

    #[test]
    fn textarea_never_shrinks_below_minimum() {
        assert_eq!(textarea_height(40), 120);
        assert_eq!(textarea_height(300), 300);
    }
}
