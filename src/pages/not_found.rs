use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page section not-found">
            <h2>{"Nothing here"}</h2>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Back to the homepage"}
            </Link<Route>>
        </div>
    }
}
