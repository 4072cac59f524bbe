use ideas_board_shared::{SelectOption, Selector};
use yew::prelude::*;

use crate::i18n::current::dropdown as t;

#[derive(Properties, PartialEq)]
pub struct DropdownProps<T: SelectOption> {
    pub label: AttrValue,
    pub selector: Selector<T>,
    /// Summary control clicked.
    pub on_open: Callback<()>,
    /// Option row clicked.
    pub on_select: Callback<T>,
}

/// Pill-shaped selector: a summary showing the current value and, while
/// open, one row per option.
#[function_component(Dropdown)]
pub fn dropdown<T>(props: &DropdownProps<T>) -> Html
where
    T: SelectOption,
{
    let selector = props.selector;

    let open_menu = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    let menu = if selector.is_open() {
        html! {
            <ul
                class={classes!(
                    "absolute",
                    "top-10",
                    "right-0",
                    "z-20",
                    "min-w-full",
                    "bg-white",
                    "border-2",
                    "rounded-lg",
                    "overflow-hidden"
                )}
                role="listbox"
                aria-label={t::OPTIONS_ARIA}
            >
                { for selector.rows().map(|(option, current)| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(option))
                    };
                    html! {
                        <li
                            key={option.label()}
                            class={classes!(
                                "border-b-2",
                                "last:border-b-0",
                                "p-2",
                                "px-5",
                                "cursor-pointer",
                                "whitespace-nowrap",
                                "hover:bg-gray-100",
                                if current { "font-semibold" } else { "" }
                            )}
                            role="option"
                            aria-selected={current.to_string()}
                            onclick={onclick}
                        >
                            { option.label() }
                        </li>
                    }
                }) }
            </ul>
        }
    } else {
        Html::default()
    };

    html! {
        <div class={classes!("flex", "items-center")}>
            <p class={classes!("mr-3")}>{ props.label.clone() }</p>
            <div class={classes!("relative")}>
                <button
                    type="button"
                    class={classes!("px-10", "py-1", "border-2", "rounded-full", "bg-white")}
                    aria-haspopup="listbox"
                    aria-expanded={selector.is_open().to_string()}
                    onclick={open_menu}
                >
                    { selector.selected().label() }
                </button>
                { menu }
            </div>
        </div>
    }
}
