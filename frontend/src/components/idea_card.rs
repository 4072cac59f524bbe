use ideas_board_shared::display::format_published;
use yew::prelude::*;

use crate::{components::image_with_loading::ImageWithLoading, models::Article};

#[derive(Properties, PartialEq, Clone)]
pub struct IdeaCardProps {
    pub article: Article,
}

#[function_component(IdeaCard)]
pub fn idea_card(props: &IdeaCardProps) -> Html {
    let article = &props.article;
    let cover = article.cover().map(|image| AttrValue::from(image.url.clone()));

    html! {
        <article class={classes!(
            "idea-card",
            "min-h-fit",
            "rounded-lg",
            "bg-white",
            "shadow-md",
            "overflow-hidden"
        )}>
            <ImageWithLoading
                src={cover}
                alt={AttrValue::from(article.title.clone())}
                container_class={classes!("h-40", "rounded-t-lg")}
                class={classes!("h-full", "w-full", "object-cover")}
            />
            <div class={classes!("p-3")}>
                <p class={classes!("text-xs", "font-semibold", "uppercase", "text-gray-400")}>
                    { format_published(&article.published_at) }
                </p>
                <h3 class={classes!("mt-1", "text-lg", "font-bold", "leading-snug", "line-clamp-3")}>
                    { &article.title }
                </h3>
            </div>
        </article>
    }
}
