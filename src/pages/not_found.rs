use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <div class="container">
                <h1 class="section-title">{"Page not found"}</h1>
                <Link<Route> to={Route::Landing} classes="btn btn--primary">
                    {"Back to Convex"}
                </Link<Route>>
            </div>
        </section>
    }
}
