use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found_page as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("px-6", "pt-32", "pb-20", "text-center")}>
            <h2 class={classes!("text-3xl", "font-bold", "mb-4")}>{ t::TITLE }</h2>
            <p class={classes!("text-gray-500", "mb-8")}>{ t::DETAIL }</p>
            <Link<Route> to={Route::Ideas} classes={classes!("text-[#ED6B32]", "font-semibold")}>
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
