use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithLoadingProps {
    /// `None` renders the placeholder straight away.
    pub src: Option<AttrValue>,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
}

#[function_component(ImageWithLoading)]
pub fn image_with_loading(props: &ImageWithLoadingProps) -> Html {
    let status = use_state_eq(|| ImageStatus::Loading);

    {
        let status = status.clone();
        use_effect_with(props.src.clone(), move |_| {
            status.set(ImageStatus::Loading);
            || ()
        });
    }

    let on_image_load = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(ImageStatus::Loaded))
    };
    let on_image_error = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(ImageStatus::Failed))
    };

    let show_placeholder = props.src.is_none() || *status != ImageStatus::Loaded;

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if show_placeholder { "bg-gray-200" } else { "" }
    );

    let image_classes = classes!(
        props.class.clone(),
        "transition-opacity",
        "duration-500",
        if *status == ImageStatus::Loaded { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <div class={container_classes}>
            {
                if show_placeholder {
                    html! {
                        <div class={classes!(
                            "absolute",
                            "inset-0",
                            "bg-gradient-to-br",
                            "from-gray-200",
                            "to-gray-100",
                            "pointer-events-none",
                            if *status == ImageStatus::Loading && props.src.is_some() { "animate-pulse" } else { "" }
                        )} />
                    }
                } else {
                    html! {}
                }
            }
            {
                match props.src.clone() {
                    Some(src) if *status != ImageStatus::Failed => html! {
                        <img
                            src={src}
                            alt={props.alt.clone()}
                            class={image_classes}
                            loading="lazy"
                            decoding="async"
                            onload={on_image_load}
                            onerror={on_image_error}
                        />
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}
