//! Ideas board: a paginated, sortable grid of ideas fetched from the
//! Suitmedia API, rendered with Yew.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
