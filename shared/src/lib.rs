//! Core of the ideas board: data model, query building, fetch sequencing,
//! list state and pagination, shared by the browser frontend and tests.

use serde::{Deserialize, Serialize};

pub mod coordinator;
pub mod display;
pub mod error;
pub mod listing;
pub mod pagination;
pub mod query;
pub mod selector;
pub mod wire;

pub use coordinator::{FetchCoordinator, FetchOutcome, Listing, Ticket, Transport};
pub use error::{FetchError, QueryError};
pub use listing::{ListPage, ListState};
pub use pagination::{derive_controls, PageControl, RangeSummary};
pub use query::{build, PageSize, QueryState, Relation, RequestDescriptor, SortKey};
pub use selector::{SelectOption, Selector};

// 图片变体（small / medium），服务端解析好的 URL
/// One image variant attached to an idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Server-side identifier.
    pub id: u64,
    /// MIME type, e.g. `image/jpeg`.
    pub mime: String,
    /// Original upload file name.
    pub file_name: String,
    /// Resolved, absolute URL.
    pub url: String,
}

// 列表接口返回的文章（idea）
/// An idea record as returned by the listing endpoint.
///
/// Timestamps are kept as the server sends them; see
/// [`display::format_published`] for rendering. A record with `deleted_at`
/// set is still a valid value and is rendered like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier.
    pub id: u64,
    /// Headline shown on the card.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Body content (HTML as authored on the server).
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Publish timestamp, the sort field of the listing.
    pub published_at: String,
    /// Soft-deletion timestamp, if any.
    #[serde(default)]
    pub deleted_at: Option<String>,
    /// Small image variants, in server order.
    #[serde(default)]
    pub small_image: Vec<Image>,
    /// Medium image variants, in server order.
    #[serde(default)]
    pub medium_image: Vec<Image>,
}

impl Article {
    /// Image used as the card cover: first medium variant, else first small
    /// variant.
    pub fn cover(&self) -> Option<&Image> {
        self.medium_image
            .first()
            .or_else(|| self.small_image.first())
    }
}
