use ideas_board_shared::{FetchOutcome, ListState, Listing, QueryState};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::{
    api,
    i18n::{current::ideas_page as t, fill_one},
};

/// What [`use_listing`] hands back to the page.
pub struct ListingHandle {
    /// Last committed page, or the initial loading state.
    pub state: ListState,
    /// Message of the latest failed fetch, until dismissed or superseded.
    pub error: Option<String>,
    /// The latest fetch failed. Unlike `error` it survives dismissal and is
    /// cleared only when a new query starts or a page is committed.
    pub load_failed: bool,
    /// Clears `error`.
    pub dismiss_error: Callback<()>,
}

/// Keep a listing in sync with `query`.
///
/// Every change of `query` issues one request through the shared
/// [`Listing`]; responses to superseded queries are dropped there, so only
/// the latest request can update `state`. Failures keep the previous page
/// and are reported to the console and through `error`.
///
/// # Example
/// ```rust
/// use crate::hooks::use_listing;
///
/// #[function_component(IdeasPage)]
/// fn ideas_page() -> Html {
///     let query = use_state_eq(QueryState::default);
///     let listing = use_listing(*query);
///     html! { <p>{ format!("{} pages", listing.state.last_page()) }</p> }
/// }
/// ```
#[hook]
pub fn use_listing(query: QueryState) -> ListingHandle {
    let listing = use_memo((), |_| Listing::new(api::transport()));
    let state = use_state(ListState::default);
    let error = use_state(|| None::<String>);
    let load_failed = use_state_eq(|| false);

    {
        let listing = listing.clone();
        let state = state.clone();
        let error = error.clone();
        let load_failed = load_failed.clone();
        use_effect_with(query, move |query| {
            let query = *query;
            load_failed.set(false);
            wasm_bindgen_futures::spawn_local(async move {
                match listing.apply(query).await {
                    FetchOutcome::Committed => {
                        state.set(listing.state());
                        error.set(None);
                        load_failed.set(false);
                    },
                    FetchOutcome::Failed(err) => {
                        web_sys::console::error_1(&JsValue::from(format!(
                            "Failed to fetch ideas (page {}): {}",
                            query.page(),
                            err
                        )));
                        error.set(Some(fill_one(t::FETCH_FAILED_TEMPLATE, err)));
                        load_failed.set(true);
                    },
                    FetchOutcome::Stale | FetchOutcome::Unchanged => {},
                }
            });
            || ()
        });
    }

    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    ListingHandle {
        state: (*state).clone(),
        error: (*error).clone(),
        load_failed: *load_failed,
        dismiss_error,
    }
}
