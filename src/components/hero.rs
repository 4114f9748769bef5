use yew::prelude::*;

use crate::components::email_form::EmailForm;
use crate::config;
use crate::utils::dom;
use crate::utils::scroll::use_debounced_scroll;

const HERO_IMAGE: &str =
    "https://user-gen-media-assets.s3.amazonaws.com/gpt4o_images/8352916b-3239-426f-929f-08721fb4a692.png";

/// Vertical shifts of the hero section and its card, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroOffsets {
    pub section: f64,
    pub card: f64,
}

impl HeroOffsets {
    fn section_style(&self) -> String {
        format!("transform: translateY({}px);", self.section)
    }

    fn card_style(&self) -> String {
        format!("transform: translateY({}px);", self.card)
    }
}

/// Parallax for a scroll offset. Once the hero is out of view (`scroll_y`
/// past one viewport height) there is nothing to move and the last offsets
/// stay in place.
pub fn parallax_offsets(scroll_y: f64, viewport_height: f64) -> Option<HeroOffsets> {
    (scroll_y <= viewport_height).then(|| HeroOffsets {
        section: scroll_y * -0.5,
        card: scroll_y * 0.1,
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let offsets = use_state_eq(HeroOffsets::default);

    {
        let offsets = offsets.clone();
        use_debounced_scroll(
            config::PARALLAX_DEBOUNCE_MS,
            Callback::from(move |scroll_y| {
                if let Some(next) = parallax_offsets(scroll_y, dom::viewport_height()) {
                    offsets.set(next);
                }
            }),
        );
    }

    html! {
        <section class="hero" id="hero" style={offsets.section_style()}>
            <div class="hero-bg" style={format!("background-image: url('{}');", HERO_IMAGE)}></div>
            <div class="hero-content">
                <div class="container">
                    <div class="hero-card" style={offsets.card_style()}>
                        <h1 class="hero-title">{"Turn Conversations Into Revenue"}</h1>
                        <p class="hero-subtitle">
                            {"Convex automates inbound & outbound sales via AI on WhatsApp and voice calls. Never miss a lead again."}
                        </p>
                        <EmailForm />
                        <p class="hero-note">{"14-day free trial • No credit card required"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_drifts_up_while_card_lags_behind() {
        let offsets = parallax_offsets(200.0, 800.0).expect("hero in view");
        assert_eq!(offsets.section, -100.0);
        assert_eq!(offsets.card, 20.0);
    }

    #[test]
    fn parallax_stops_past_one_viewport() {
        assert!(parallax_offsets(800.0, 800.0).is_some());
        assert_eq!(parallax_offsets(801.0, 800.0), None);
    }

    #[test]
    fn top_of_page_is_unshifted() {
        assert_eq!(parallax_offsets(0.0, 800.0), Some(HeroOffsets::default()));
    }
}
