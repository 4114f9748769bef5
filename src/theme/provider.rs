use yew::prelude::*;

use crate::components::toast::use_toast;

use super::browser::{ambient_preference, watch_ambient, DocumentPresenter, LocalStorage};
use super::store::{ThemeState, ThemeStore};

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub state: ThemeState,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the session's [`ThemeStore`] and republishes its state to the tree.
/// Must sit below a `ToastProvider` for toggle notifications to show.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let toasts = use_toast();
    let state = use_state(ThemeState::default);
    let store = use_mut_ref(|| ThemeStore::new(LocalStorage, DocumentPresenter));

    {
        let state = state.clone();
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = store.borrow_mut().subscribe(move |value| {
                    state.set(ThemeState {
                        value,
                        initialized: true,
                    })
                });
                store.borrow_mut().resolve_initial(ambient_preference());

                let ambient = watch_ambient({
                    let store = store.clone();
                    move |theme| {
                        if store.borrow_mut().ambient_changed(theme) {
                            log::debug!("followed ambient color scheme to {}", theme);
                        }
                    }
                });
                if let Err(e) = &ambient {
                    log::debug!("ambient color scheme not observable: {}", e);
                }

                move || {
                    drop(ambient);
                    store.borrow_mut().unsubscribe(subscription);
                }
            },
            (),
        );
    }

    let toggle = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let theme = store.borrow_mut().toggle();
            toasts.success(theme.activation_message());
        })
    };

    let context = ThemeContext {
        state: *state,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}
