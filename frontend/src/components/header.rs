use yew::prelude::*;

use crate::{config::asset_path, i18n::current::header as t};

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class={classes!(
            "navbar",
            "fixed",
            "top-0",
            "z-10",
            "w-full",
            "flex",
            "items-center",
            "justify-between",
            "px-6",
            "md:px-40",
            "py-2",
            "bg-[#ED6B32]",
            "text-white"
        )}>
            <img src={asset_path("static/logo.svg")} alt={t::BRAND_NAME} class="w-32" />
            <nav class={classes!("flex")} aria-label={t::NAV_MAIN_ARIA}>
                { for t::NAV_ITEMS.into_iter().map(|item| {
                    let current = item == t::NAV_CURRENT;
                    html! {
                        <span
                            key={item}
                            class={classes!(
                                "mx-3",
                                "py-3",
                                if current { "border-b-2 border-white" } else { "" }
                            )}
                            aria-current={if current { Some(AttrValue::from("page")) } else { None }}
                        >
                            { item }
                        </span>
                    }
                }) }
            </nav>
        </header>
    }
}
