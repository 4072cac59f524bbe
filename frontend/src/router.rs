use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Ideas,
    #[cfg(feature = "mock")]
    #[at("/ideas-board/")]
    Ideas,

    #[cfg(not(feature = "mock"))]
    #[at("/ideas")]
    IdeasAlias,
    #[cfg(feature = "mock")]
    #[at("/ideas-board/ideas")]
    IdeasAlias,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/ideas-board/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Ideas | Route::IdeasAlias => html! { <pages::ideas::IdeasPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-white" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
