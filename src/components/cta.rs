use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::config;

/// Toast for a pricing card button, keyed off its label.
pub fn pricing_message(label: &str) -> Option<&'static str> {
    if label.contains("Contact Sales") {
        Some("📞 Sales team contacted! Expect a call within 24 hours.")
    } else if label.contains("Start Free Trial") {
        Some("🚀 Welcome to Convex! Check your email for next steps.")
    } else {
        None
    }
}

/// Label a pricing button shows while confirming its action.
pub fn pricing_success_label(label: &str) -> Option<&'static str> {
    if label.contains("Contact Sales") {
        Some("Contacted! 📞")
    } else if label.contains("Start Free Trial") {
        Some("Welcome! 🚀")
    } else {
        None
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub featured: bool,
}

/// Pricing card button. Raises its toast and shows a success label, scaled
/// up and disabled, for a couple of seconds.
#[function_component(PricingButton)]
pub fn pricing_button(props: &PricingButtonProps) -> Html {
    let toasts = use_toast();
    let confirming = use_state(|| false);
    let revert = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let label = props.label.clone();
        let confirming = confirming.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(message) = pricing_message(&label) else {
                return;
            };
            toasts.success(message);
            if pricing_success_label(&label).is_some() {
                confirming.set(true);
                let confirming = confirming.clone();
                *revert.borrow_mut() = Some(Timeout::new(config::BUTTON_SUCCESS_MS, move || {
                    confirming.set(false)
                }));
            }
        })
    };
    let variant = if props.featured { "btn--primary" } else { "btn--outline" };
    let text = match (*confirming, pricing_success_label(&props.label)) {
        (true, Some(success)) => AttrValue::from(success),
        _ => props.label.clone(),
    };

    html! {
        <button
            class={classes!("btn", variant, "btn--full-width", (*confirming).then_some("btn--activated"))}
            disabled={*confirming}
            {onclick}
        >
            { text }
        </button>
    }
}

/// Closing call-to-action that confirms activation in place for a moment.
#[function_component(FinalCta)]
pub fn final_cta() -> Html {
    let toasts = use_toast();
    let activated = use_state(|| false);
    let revert = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let activated = activated.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toasts.success("🎉 Welcome aboard! Your free trial is starting now.");
            activated.set(true);
            let activated = activated.clone();
            *revert.borrow_mut() = Some(Timeout::new(config::BUTTON_SUCCESS_MS, move || {
                activated.set(false)
            }));
        })
    };

    html! {
        <button
            id="final-cta-btn"
            class={classes!("btn", "btn--primary", "btn--lg", (*activated).then_some("btn--activated"))}
            disabled={*activated}
            {onclick}
        >
            { if *activated { "Activated! ✨" } else { "Start Your Free Trial" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_labels_map_to_messages() {
        assert!(pricing_message("Contact Sales").unwrap().contains("Sales team"));
        assert!(pricing_message("Start Free Trial").unwrap().contains("Welcome to Convex"));
        assert_eq!(pricing_message("Learn more"), None);
    }

    #[test]
    fn pricing_labels_map_to_success_labels() {
        assert_eq!(pricing_success_label("Contact Sales"), Some("Contacted! 📞"));
        assert_eq!(pricing_success_label("Start Free Trial"), Some("Welcome! 🚀"));
        assert_eq!(pricing_success_label("Learn more"), None);
    }
}
