use ideas_board_shared::derive_controls;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub last_page: u32,
    pub on_page_change: Callback<u32>,
}

/// Page-number bar covering every page from 1 to `last_page`.
///
/// The active page is rendered disabled, so clicking it does nothing.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let controls = derive_controls(props.current_page, props.last_page);

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-md",
        "text-sm",
        "font-semibold",
        "transition-all",
        "duration-200"
    );

    html! {
        <nav class="flex flex-wrap items-center justify-center gap-1" aria-label={t::ARIA_NAV}>
            { for controls.into_iter().map(|control| {
                let page = control.page;
                let page_classes = classes!(
                    base_btn_classes.clone(),
                    if control.active {
                        "bg-[#ED6B32] text-white cursor-default"
                    } else {
                        "text-gray-700 hover:text-[#ED6B32]"
                    }
                );
                let onclick = {
                    let on_page_change = props.on_page_change.clone();
                    Callback::from(move |_| on_page_change.emit(page))
                };

                html! {
                    <button
                        key={format!("page-{page}")}
                        type="button"
                        class={page_classes}
                        aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                        aria-current={if control.active {
                            Some(AttrValue::from("page"))
                        } else {
                            None
                        }}
                        disabled={control.active}
                        onclick={onclick}
                    >
                        { page }
                    </button>
                }
            }) }
        </nav>
    }
}
