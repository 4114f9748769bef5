use std::rc::Rc;

use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::use_toast;
use crate::config;
use crate::utils::dom::{self, EventListener};
use crate::utils::scroll::use_debounced_scroll;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Mobile menu expanded.
    pub open: bool,
    /// Header has left the top of the page.
    pub scrolled: bool,
}

pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    PointerDown { in_toggle: bool, in_menu: bool },
    Scrolled(f64),
}

impl NavState {
    fn with_open(self: Rc<Self>, open: bool) -> Rc<Self> {
        if self.open == open {
            return self;
        }
        Rc::new(Self { open, ..*self })
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::ToggleMenu => {
                let open = !self.open;
                self.with_open(open)
            }
            NavAction::CloseMenu => self.with_open(false),
            NavAction::PointerDown { in_toggle, in_menu } => {
                if self.open && !in_toggle && !in_menu {
                    self.with_open(false)
                } else {
                    self
                }
            }
            NavAction::Scrolled(offset) => {
                let scrolled = offset > config::SCROLLED_THRESHOLD_PX;
                if scrolled == self.scrolled {
                    return self;
                }
                Rc::new(Self { scrolled, ..*self })
            }
        }
    }
}

const NAV_LINKS: [(&str, &str); 3] = [("#features", "Features"), ("#pricing", "Pricing"), ("#faq", "FAQ")];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavState::default);
    let toasts = use_toast();
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let dispatcher = nav.dispatcher();
        use_debounced_scroll(
            config::SCROLL_DEBOUNCE_MS,
            Callback::from(move |offset| dispatcher.dispatch(NavAction::Scrolled(offset))),
        );
    }

    // Outside pointer presses and Escape close the menu.
    {
        let dispatcher = nav.dispatcher();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let pointer = dom::document().and_then(|document| {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document, "pointerdown", move |event| {
                        dispatcher.dispatch(NavAction::PointerDown {
                            in_toggle: dom::event_within(event, toggle_ref.get().as_ref()),
                            in_menu: dom::event_within(event, menu_ref.get().as_ref()),
                        });
                    })
                });
                let escape = dom::on_escape(move || dispatcher.dispatch(NavAction::CloseMenu));
                if let Err(e) = pointer.as_ref().and(escape.as_ref()) {
                    log::debug!("menu dismissal partly inactive: {}", e);
                }
                move || {
                    drop(pointer);
                    drop(escape);
                }
            },
            (),
        );
    }

    let on_toggle = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };
    let close_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::CloseMenu))
    };
    let on_cta = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        toasts.success("🚀 Welcome to Convex! Your free trial is starting now.");
    });

    html! {
        <nav class={classes!("navbar", nav.scrolled.then_some("scrolled"))} id="navbar">
            <div class="nav-container">
                <div class="nav-logo">
                    <h2>{"Convex"}</h2>
                </div>
                // the theme switch lives in here, so pressing it is not an outside press
                <ul class="nav-menu" id="nav-menu" ref={menu_ref}>
                    <div class={classes!("nav-menu-links", nav.open.then_some("active"))} id="nav-menu-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <SectionLink href={*href} class="nav-link" on_navigate={close_menu.clone()}>
                                    { *label }
                                </SectionLink>
                            </li>
                        }) }
                        <li>
                            <button class="btn btn--primary btn--sm" onclick={on_cta}>{"Start Free Trial"}</button>
                        </li>
                    </div>
                    <ThemeToggle />
                </ul>
                <button
                    class={classes!("nav-toggle", nav.open.then_some("active"))}
                    id="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={nav.open.to_string()}
                    ref={toggle_ref}
                    onclick={on_toggle}
                >
                    <span class="hamburger"></span>
                    <span class="hamburger"></span>
                    <span class="hamburger"></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Rc<NavState> {
        Rc::<NavState>::default().reduce(NavAction::ToggleMenu)
    }

    #[test]
    fn toggle_flips_the_menu() {
        let state = open();
        assert!(state.open);
        assert!(!state.reduce(NavAction::ToggleMenu).open);
    }

    #[test]
    fn pointer_outside_closes_the_menu() {
        let state = open().reduce(NavAction::PointerDown {
            in_toggle: false,
            in_menu: false,
        });
        assert!(!state.open);
    }

    #[test]
    fn pointer_inside_menu_or_toggle_keeps_it_open() {
        let state = open();
        let inside_menu = state.clone().reduce(NavAction::PointerDown {
            in_toggle: false,
            in_menu: true,
        });
        assert!(inside_menu.open);
        let on_toggle = state.reduce(NavAction::PointerDown {
            in_toggle: true,
            in_menu: false,
        });
        assert!(on_toggle.open);
    }

    #[test]
    fn pressing_the_theme_switch_keeps_the_menu_open() {
        // the switch sits inside the menu container, next to the links
        let state = open().reduce(NavAction::PointerDown {
            in_toggle: false,
            in_menu: true,
        });
        assert!(state.open);
        assert!(!state.reduce(NavAction::ToggleMenu).open);
    }

    #[test]
    fn close_on_a_closed_menu_is_a_no_op() {
        let state: Rc<NavState> = Rc::default();
        let after = state.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &after));
        let after = state.clone().reduce(NavAction::PointerDown {
            in_toggle: false,
            in_menu: false,
        });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn escape_and_navigation_close_the_menu() {
        assert!(!open().reduce(NavAction::CloseMenu).open);
    }

    #[test]
    fn scrolled_flag_follows_the_threshold() {
        let state: Rc<NavState> = Rc::default();
        let state = state.reduce(NavAction::Scrolled(100.0));
        assert!(!state.scrolled);
        let state = state.reduce(NavAction::Scrolled(100.5));
        assert!(state.scrolled);
        let state = state.reduce(NavAction::Scrolled(0.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn scrolling_leaves_the_menu_alone() {
        let state = open().reduce(NavAction::Scrolled(450.0));
        assert!(state.open);
        assert!(state.scrolled);
    }
}
