use yew::prelude::*;

use crate::config;
use crate::utils::dom;
use crate::utils::scroll::use_debounced_scroll;

fn shows_at(offset: f64) -> bool {
    offset > config::SCROLL_TO_TOP_THRESHOLD_PX
}

const SCROLL_TOP_CSS: &str = r#"
    .scroll-to-top {
        position: fixed;
        bottom: 32px;
        right: 32px;
        width: 56px;
        height: 56px;
        border-radius: 50%;
        background: var(--gradient-primary);
        color: var(--pure-white);
        cursor: pointer;
        font-size: 24px;
        font-weight: 800;
        box-shadow: 0 8px 32px var(--green-glow);
        transform: translateY(100px) scale(0.8);
        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
        z-index: 1000;
        backdrop-filter: blur(10px);
        border: 2px solid var(--color-primary);
    }
    .scroll-to-top--visible {
        transform: translateY(0) scale(1);
    }
"#;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_debounced_scroll(
            config::SCROLL_DEBOUNCE_MS,
            Callback::from(move |offset| visible.set(shows_at(offset))),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    html! {
        <>
            <style>{SCROLL_TOP_CSS}</style>
            <button
                class={classes!("scroll-to-top", (*visible).then_some("scroll-to-top--visible"))}
                aria-label="Scroll to top"
                {onclick}
            >
                {"↑"}
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_the_threshold() {
        assert!(!shows_at(0.0));
        assert!(!shows_at(500.0));
        assert!(shows_at(501.0));
    }
}
