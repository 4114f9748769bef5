use yew::prelude::*;

use crate::theme::{use_theme, Theme};

fn slider_offset(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "transform: translateX(0px)",
        Theme::Dark => "transform: translateX(26px)",
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    // Inert placeholder until the store has resolved the session theme.
    let Some(ctx) = theme.filter(|ctx| ctx.state.initialized) else {
        return html! {
            <div class="theme-toggle" id="theme-toggle">
                <span class="theme-toggle-label">{"Theme"}</span>
                <div class="theme-toggle-switch">
                    <div class="theme-toggle-slider">
                        <span class="theme-toggle-icon">{ Theme::Light.icon() }</span>
                    </div>
                </div>
            </div>
        };
    };

    let current = ctx.state.value;
    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let onkeydown = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                toggle.emit(());
            }
        })
    };

    html! {
        <div class="theme-toggle" id="theme-toggle">
            <span class="theme-toggle-label">{"Theme"}</span>
            <div
                class="theme-toggle-switch"
                id="theme-switch"
                role="button"
                tabindex="0"
                aria-label={format!("Switch to {} theme", current.toggled())}
                {onclick}
                {onkeydown}
            >
                <div class="theme-toggle-slider" style={slider_offset(current)}>
                    <span class="theme-toggle-icon">{ current.icon() }</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_moves_right_for_dark() {
        assert!(slider_offset(Theme::Dark).contains("26px"));
        assert!(slider_offset(Theme::Light).contains("0px"));
    }
}
