use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::{use_toast, ToastKind};
use crate::config;
use crate::utils::validation::is_valid_email;

const ACCEPTED: &str = "🎉 Thank you! Check your email for next steps to start your free trial.";
const REJECTED: &str = "Please enter a valid email address.";

/// What the form does with a submitted address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub kind: ToastKind,
    pub clear_input: bool,
    pub shake: bool,
    /// Success outline on the input.
    pub glow: bool,
}

pub fn feedback_for(raw: &str) -> Feedback {
    if is_valid_email(raw.trim()) {
        Feedback {
            message: ACCEPTED,
            kind: ToastKind::Success,
            clear_input: true,
            shake: false,
            glow: true,
        }
    } else {
        Feedback {
            message: REJECTED,
            kind: ToastKind::Error,
            clear_input: false,
            shake: true,
            glow: false,
        }
    }
}

/// Hero waitlist form. Validation is advisory; nothing is posted from here.
#[function_component(EmailForm)]
pub fn email_form() -> Html {
    let toasts = use_toast();
    let input_ref = use_node_ref();
    let shaking = use_state(|| false);
    let shake_reset = use_mut_ref(|| None::<Timeout>);
    let glowing = use_state(|| false);
    let glow_reset = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let input_ref = input_ref.clone();
        let shaking = shaking.clone();
        let glowing = glowing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                log::debug!("email input missing, ignoring submit");
                return;
            };

            let feedback = feedback_for(&input.value());
            toasts.show(feedback.message, feedback.kind);
            if feedback.clear_input {
                input.set_value("");
            }
            if feedback.shake {
                shaking.set(true);
                let shaking = shaking.clone();
                *shake_reset.borrow_mut() =
                    Some(Timeout::new(config::SHAKE_RESET_MS, move || shaking.set(false)));
            }
            if feedback.glow {
                glowing.set(true);
                let glowing = glowing.clone();
                *glow_reset.borrow_mut() =
                    Some(Timeout::new(config::EMAIL_GLOW_MS, move || glowing.set(false)));
            }
        })
    };

    html! {
        <form
            class="hero-form"
            id="email-form"
            method="POST"
            action={config::get_subscribe_url()}
            novalidate=true
            {onsubmit}
        >
            <div class="email-input-group">
                <input
                    type="email"
                    id="hero-email"
                    name="email"
                    ref={input_ref}
                    class={classes!("form-control", "email-input", (*shaking).then_some("shake"), (*glowing).then_some("email-input--success"))}
                    placeholder="Enter your work email"
                    aria-label="Work email"
                />
                <button type="submit" class="btn btn--primary">{"Start Free Trial"}</button>
            </div>
        </form>
    }
}
