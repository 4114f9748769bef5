//! Convex marketing landing page, rendered client side with Yew.

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod theme;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::ToastProvider;
use crate::pages::landing::Landing;
use crate::pages::not_found::NotFound;
use crate::theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Toasts sit outermost so the theme store can announce switches.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <ThemeProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ThemeProvider>
        </ToastProvider>
    }
}
