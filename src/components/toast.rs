//! Transient notifications. At most one toast exists at a time: showing a
//! new one drops the previous one immediately, without an exit transition.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-screen, slides in on the next animation frame.
    Entering,
    Visible,
    /// Exit transition running; detached once it finishes.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    /// Milliseconds since the epoch.
    pub visible_since: f64,
    pub phase: ToastPhase,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub current: Option<Notification>,
    next_id: u64,
}

#[derive(Debug, PartialEq)]
pub enum ToastAction {
    Show {
        message: String,
        kind: ToastKind,
        at: f64,
    },
    Entered(ToastId),
    Dismiss(ToastId),
    Remove(ToastId),
}

impl ToastState {
    fn is_current(&self, id: ToastId) -> bool {
        self.current.as_ref().map(|n| n.id) == Some(id)
    }

    fn with_phase(&self, phase: ToastPhase) -> Rc<Self> {
        let mut next = self.clone();
        if let Some(current) = next.current.as_mut() {
            current.phase = phase;
        }
        Rc::new(next)
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show { message, kind, at } => {
                if let Some(evicted) = &self.current {
                    log::debug!("replacing toast {:?}", evicted.id);
                }
                let id = ToastId(self.next_id);
                Rc::new(Self {
                    current: Some(Notification {
                        id,
                        message,
                        kind,
                        visible_since: at,
                        phase: ToastPhase::Entering,
                    }),
                    next_id: self.next_id + 1,
                })
            }
            ToastAction::Entered(id) => {
                let entering = self
                    .current
                    .as_ref()
                    .map_or(false, |n| n.id == id && n.phase == ToastPhase::Entering);
                if entering {
                    self.with_phase(ToastPhase::Visible)
                } else {
                    self
                }
            }
            ToastAction::Dismiss(id) => {
                let leaving = self
                    .current
                    .as_ref()
                    .map_or(true, |n| n.phase == ToastPhase::Leaving);
                if !self.is_current(id) || leaving {
                    return self;
                }
                self.with_phase(ToastPhase::Leaving)
            }
            ToastAction::Remove(id) => {
                if !self.is_current(id) {
                    return self;
                }
                Rc::new(Self {
                    current: None,
                    next_id: self.next_id,
                })
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastContext(UseReducerDispatcher<ToastState>);

/// Handle for raising toasts from any component below a [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct ToastHandle(Option<UseReducerDispatcher<ToastState>>);

impl ToastHandle {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        match &self.0 {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Show {
                message,
                kind,
                at: js_sys::Date::now(),
            }),
            None => log::debug!("no toast host mounted, dropping: {}", message),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle(use_context::<ToastContext>().map(|ctx| ctx.0))
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

const TOAST_CSS: &str = r#"
    .toast {
        position: fixed;
        top: 120px;
        right: 32px;
        padding: 20px 32px;
        border-radius: 16px;
        z-index: 10000;
        transform: translateX(400px);
        transition: all 0.4s cubic-bezier(0.68, -0.55, 0.265, 1.55);
        font-size: 16px;
        font-weight: 700;
        max-width: 400px;
        word-wrap: break-word;
        backdrop-filter: blur(20px);
        cursor: pointer;
    }
    .toast--visible {
        transform: translateX(0);
    }
    .toast--success {
        background: var(--gradient-primary);
        color: var(--toast-success-text);
        box-shadow: 0 12px 40px var(--green-glow);
        border: 1px solid var(--color-primary);
    }
    .toast--error {
        background: var(--toast-error-bg);
        color: var(--toast-error-text);
        box-shadow: 0 12px 40px var(--toast-error-glow);
        border: 1px solid var(--toast-error-border);
    }
"#;

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastState::default);
    let timer = use_mut_ref(|| None::<Timeout>);

    // One timer per toast: the auto-dismiss while it is shown, replaced by
    // the exit timer once it starts leaving. Replacing drops (cancels) it.
    {
        let dispatcher = toasts.dispatcher();
        let timer = timer.clone();
        let key = toasts.current.as_ref().map(|n| (n.id, n.phase));
        use_effect_with_deps(
            move |key| {
                if let Some((id, ToastPhase::Entering)) = *key {
                    slide_in_next_frame(dispatcher.clone(), id);
                }
                match timer_for(*key) {
                    TimerPlan::Keep => {}
                    TimerPlan::Clear => {
                        timer.borrow_mut().take();
                    }
                    TimerPlan::Start { after_ms, action } => {
                        *timer.borrow_mut() =
                            Some(Timeout::new(after_ms, move || dispatcher.dispatch(action)));
                    }
                }
                || ()
            },
            key,
        );
    }

    let toast = toasts.current.as_ref().map(|notification| {
        let id = notification.id;
        let onclick = {
            let dispatcher = toasts.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
        };
        let visible = notification.phase == ToastPhase::Visible;
        html! {
            <div
                key={id.0.to_string()}
                class={classes!("toast", notification.kind.class(), visible.then_some("toast--visible"))}
                role="status"
                aria-live="polite"
                {onclick}
            >
                { notification.message.clone() }
            </div>
        }
    });

    html! {
        <ContextProvider<ToastContext> context={ToastContext(toasts.dispatcher())}>
            <style>{TOAST_CSS}</style>
            { for props.children.iter() }
            { toast.unwrap_or_default() }
        </ContextProvider<ToastContext>>
    }
}

/// What the single toast timer slot should hold for the current toast.
#[derive(Debug, PartialEq)]
enum TimerPlan {
    /// Leave whatever is scheduled alone.
    Keep,
    /// Cancel any scheduled timer.
    Clear,
    /// Replace the scheduled timer, cancelling the previous one.
    Start { after_ms: u32, action: ToastAction },
}

fn timer_for(current: Option<(ToastId, ToastPhase)>) -> TimerPlan {
    match current {
        Some((id, ToastPhase::Entering)) => TimerPlan::Start {
            after_ms: config::TOAST_AUTO_DISMISS_MS,
            action: ToastAction::Dismiss(id),
        },
        Some((_, ToastPhase::Visible)) => TimerPlan::Keep,
        Some((id, ToastPhase::Leaving)) => TimerPlan::Start {
            after_ms: config::TOAST_EXIT_MS,
            action: ToastAction::Remove(id),
        },
        None => TimerPlan::Clear,
    }
}

fn slide_in_next_frame(dispatcher: UseReducerDispatcher<ToastState>, id: ToastId) {
    let entered = dispatcher.clone();
    let frame = Closure::once_into_js(move || entered.dispatch(ToastAction::Entered(id)));
    let requested = web_sys::window()
        .map(|window| window.request_animation_frame(frame.unchecked_ref()).is_ok())
        .unwrap_or(false);
    if !requested {
        dispatcher.dispatch(ToastAction::Entered(id));
    }
}
