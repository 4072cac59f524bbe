use ideas_board_shared::{Article, PageSize, QueryState, RangeSummary, Selector, SortKey};
use yew::prelude::*;

use crate::{
    components::{
        dropdown::Dropdown,
        error_banner::ErrorBanner,
        idea_card::IdeaCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
    },
    hooks::use_listing,
    i18n::{current::ideas_page as t, fill_one, fill_two},
};

#[function_component(IdeasPage)]
pub fn ideas_page() -> Html {
    let query = use_state_eq(QueryState::default);
    let size_menu = use_state_eq(|| Selector::new(query.page_size()));
    let sort_menu = use_state_eq(|| Selector::new(query.sort()));
    let listing = use_listing(*query);

    let go_to_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            // 页码来自 derive_controls，始终 >= 1
            if let Ok(next) = query.with_page(page) {
                query.set(next);
            }
        })
    };

    let open_size_menu = {
        let size_menu = size_menu.clone();
        Callback::from(move |_| size_menu.set(size_menu.open()))
    };

    let select_size = {
        let size_menu = size_menu.clone();
        let query = query.clone();
        Callback::from(move |size: PageSize| {
            size_menu.set(size_menu.select(size));
            query.set(query.with_page_size(size));
        })
    };

    let open_sort_menu = {
        let sort_menu = sort_menu.clone();
        Callback::from(move |_| sort_menu.set(sort_menu.open()))
    };

    let select_sort = {
        let sort_menu = sort_menu.clone();
        let query = query.clone();
        Callback::from(move |sort: SortKey| {
            sort_menu.set(sort_menu.select(sort));
            query.set(query.with_sort(sort));
        })
    };

    let records = listing.state.records().unwrap_or_default();
    let grid = match grid_status(listing.state.records(), listing.load_failed) {
        GridStatus::Loading => html! {
            <div class={classes!("col-span-full", "flex", "items-center", "justify-center", "min-h-[240px]")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        },
        GridStatus::Unavailable => html! {
            <p class={classes!("col-span-full", "py-20", "text-center", "text-gray-500")} role="status">
                { t::UNAVAILABLE }
            </p>
        },
        GridStatus::Empty => html! {
            <p class={classes!("col-span-full", "py-20", "text-center", "text-gray-400")}>
                { t::EMPTY }
            </p>
        },
        GridStatus::Ready => html! {
            <>
                { for records.iter().map(|article| html! {
                    <IdeaCard key={article.id} article={article.clone()} />
                }) }
            </>
        },
    };

    html! {
        <main class={classes!("pb-10")}>
            // Hero
            <section class={classes!(
                "hero",
                "flex",
                "h-[60vh]",
                "items-center",
                "justify-center",
                "bg-gray-800",
                "bg-cover",
                "bg-center",
                "text-white"
            )}>
                <div class={classes!("text-center")}>
                    <h1 class={classes!("text-5xl")}>{ t::HERO_TITLE }</h1>
                    <p class={classes!("text-lg")}>{ t::HERO_DESC }</p>
                </div>
            </section>

            // Toolbar
            <div class={classes!("px-6", "md:px-40", "pt-10")}>
                <div class={classes!("flex", "flex-wrap", "gap-4", "justify-between", "items-center")}>
                    <p>{ summary_text(listing.state.summary()) }</p>
                    <div class={classes!("flex", "flex-wrap", "gap-3")}>
                        <Dropdown<PageSize>
                            label={t::PER_PAGE_LABEL}
                            selector={*size_menu}
                            on_open={open_size_menu}
                            on_select={select_size}
                        />
                        <Dropdown<SortKey>
                            label={t::SORT_LABEL}
                            selector={*sort_menu}
                            on_open={open_sort_menu}
                            on_select={select_sort}
                        />
                    </div>
                </div>
            </div>

            // Grid
            <div class={classes!(
                "px-6",
                "md:px-40",
                "mt-5",
                "grid",
                "grid-cols-1",
                "sm:grid-cols-2",
                "lg:grid-cols-4",
                "gap-5"
            )}>
                { grid }
            </div>

            <div class={classes!("mt-10", "flex", "justify-center")}>
                <Pagination
                    current_page={query.page()}
                    last_page={listing.state.last_page()}
                    on_page_change={go_to_page}
                />
            </div>

            {
                if let Some(message) = listing.error.clone() {
                    let on_close = listing.dismiss_error.clone();
                    html! { <ErrorBanner message={message} on_close={on_close} /> }
                } else {
                    Html::default()
                }
            }
        </main>
    }
}

/// What the grid area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridStatus {
    Loading,
    /// Nothing was ever committed and the latest fetch failed.
    Unavailable,
    Empty,
    Ready,
}

// 已有数据时失败只弹横幅，网格保持上一页
fn grid_status(records: Option<&[Article]>, load_failed: bool) -> GridStatus {
    match records {
        None if load_failed => GridStatus::Unavailable,
        None => GridStatus::Loading,
        Some([]) => GridStatus::Empty,
        Some(_) => GridStatus::Ready,
    }
}

/// Toolbar text such as `Showing 1-10 of 100`.
fn summary_text(summary: Option<RangeSummary>) -> String {
    match summary {
        None => t::NOTHING_SHOWN.to_string(),
        Some(range) => {
            let mut text = fill_two(t::SHOWING_TEMPLATE, range.from, range.to);
            if let Some(total) = range.total {
                text.push_str(&fill_one(t::OF_TOTAL_TEMPLATE, total));
            }
            text
        },
    }
}

#[cfg(test)]
mod tests {
    use ideas_board_shared::{Article, RangeSummary};

    use super::{grid_status, summary_text, GridStatus};

    fn article() -> Article {
        Article {
            id: 1,
            title: "First idea".to_string(),
            slug: "first-idea".to_string(),
            content: String::new(),
            created_at: "2022-10-05 08:00:00".to_string(),
            updated_at: "2022-10-05 08:00:00".to_string(),
            published_at: "2022-10-05 08:00:00".to_string(),
            deleted_at: None,
            small_image: Vec::new(),
            medium_image: Vec::new(),
        }
    }

    #[test]
    fn first_load_failure_replaces_the_spinner() {
        assert_eq!(grid_status(None, false), GridStatus::Loading);
        assert_eq!(grid_status(None, true), GridStatus::Unavailable);
    }

    #[test]
    fn later_failure_keeps_the_committed_grid() {
        let records = vec![article()];
        assert_eq!(grid_status(Some(records.as_slice()), true), GridStatus::Ready);
        assert_eq!(grid_status(Some(&[] as &[Article]), true), GridStatus::Empty);
        assert_eq!(grid_status(Some(records.as_slice()), false), GridStatus::Ready);
    }

    #[test]
    fn summary_with_and_without_total() {
        assert_eq!(
            summary_text(Some(RangeSummary {
                from: 1,
                to: 10,
                total: Some(100)
            })),
            "Showing 1-10 of 100"
        );
        assert_eq!(
            summary_text(Some(RangeSummary {
                from: 21,
                to: 27,
                total: None
            })),
            "Showing 21-27"
        );
        assert_eq!(summary_text(None), "Showing 0 results");
    }
}
