use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

/// Non-blocking failure notice pinned to the bottom of the viewport.
///
/// Closes itself after a few seconds; a new message restarts the timer.
/// The page underneath stays fully interactive.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), AUTO_DISMISS_MS)
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.message.clone(), move |_| {
            auto_timeout.reset();
        });
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!(
            "fixed",
            "bottom-6",
            "left-1/2",
            "-translate-x-1/2",
            "z-50",
            "w-[calc(100%-2rem)]",
            "max-w-xl"
        )}>
            <div
                class={classes!(
                    "error-banner",
                    "flex",
                    "items-start",
                    "gap-3",
                    "rounded-2xl",
                    "border",
                    "border-red-200",
                    "bg-white",
                    "px-5",
                    "py-4",
                    "text-sm",
                    "text-gray-700",
                    "shadow-xl"
                )}
                role="alert"
                aria-live="assertive"
            >
                <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
                <div class="flex-1 space-y-1">
                    <p class="font-semibold text-base">{ t::TITLE }</p>
                    <p>{ props.message.clone() }</p>
                </div>
                <button
                    type="button"
                    class={classes!(
                        "ml-4",
                        "inline-flex",
                        "h-8",
                        "w-8",
                        "items-center",
                        "justify-center",
                        "rounded-full",
                        "text-lg",
                        "transition",
                        "duration-200",
                        "hover:bg-black/10"
                    )}
                    aria-label={t::CLOSE_ARIA}
                    onclick={close_button}
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
