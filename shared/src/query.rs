//! Query state and the pure request builder for the ideas listing.

use std::fmt;

use url::Url;

use crate::error::QueryError;

/// Listing resource under the API base.
pub const RESOURCE: &str = "ideas";

/// Supported page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    /// 10 records per page.
    #[default]
    Ten,
    /// 20 records per page.
    Twenty,
    /// 50 records per page.
    Fifty,
}

impl PageSize {
    /// All sizes in menu order.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    /// Numeric page size sent to the server.
    pub fn get(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Sort order by publish time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// `published_at`, oldest first.
    PublishedAsc,
    /// `-published_at`, most recent first.
    #[default]
    PublishedDesc,
}

impl SortKey {
    /// All sort keys in menu order.
    pub const ALL: [SortKey; 2] = [SortKey::PublishedAsc, SortKey::PublishedDesc];

    /// Raw key understood by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PublishedAsc => "published_at",
            SortKey::PublishedDesc => "-published_at",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relations the listing must embed in every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `small_image` variants.
    SmallImage,
    /// `medium_image` variants.
    MediumImage,
}

impl Relation {
    /// Relation name as sent in `append[]`.
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::SmallImage => "small_image",
            Relation::MediumImage => "medium_image",
        }
    }
}

/// The card always needs both image variants.
pub const INCLUDED_RELATIONS: [Relation; 2] = [Relation::SmallImage, Relation::MediumImage];

/// Page, page size and sort key: everything that determines the next fetch.
///
/// Values are immutable; each `with_*` transition returns a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryState {
    page: u32,
    page_size: PageSize,
    sort: SortKey,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            sort: SortKey::default(),
        }
    }
}

impl QueryState {
    /// Builds a state, rejecting page 0.
    pub fn new(page: u32, page_size: PageSize, sort: SortKey) -> Result<Self, QueryError> {
        if page == 0 {
            return Err(QueryError::ZeroPage);
        }
        Ok(Self {
            page,
            page_size,
            sort,
        })
    }

    /// Current page, starting at 1.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Selected page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Selected sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Same state on another page.
    pub fn with_page(self, page: u32) -> Result<Self, QueryError> {
        Self::new(page, self.page_size, self.sort)
    }

    /// Same state with another page size. The page number is kept.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self { page_size, ..self }
    }

    /// Same state with another sort key. The page number is kept.
    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    /// Request descriptor for this state.
    pub fn descriptor(&self) -> RequestDescriptor {
        build(self.page, self.page_size, self.sort)
    }
}

/// Fully specified listing request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestDescriptor {
    /// Target resource under the API base.
    pub resource: &'static str,
    /// Requested page, starting at 1.
    pub page: u32,
    /// Records per page.
    pub page_size: PageSize,
    /// Sort order.
    pub sort: SortKey,
    /// Relations embedded in each record.
    pub include: [Relation; 2],
}

/// Maps query parameters to a request descriptor. Pure and deterministic.
pub fn build(page: u32, page_size: PageSize, sort: SortKey) -> RequestDescriptor {
    RequestDescriptor {
        resource: RESOURCE,
        page,
        page_size,
        sort,
        include: INCLUDED_RELATIONS,
    }
}

impl RequestDescriptor {
    /// Query parameters in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page[number]", self.page.to_string()),
            ("page[size]", self.page_size.get().to_string()),
        ];
        pairs.extend(
            self.include
                .iter()
                .map(|relation| ("append[]", relation.as_str().to_string())),
        );
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs
    }

    /// Absolute request URL under `base` (e.g. `https://host/api`).
    pub fn to_url(&self, base: &str) -> Result<Url, QueryError> {
        let mut url = Url::parse(base).map_err(|e| QueryError::InvalidBase(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| QueryError::InvalidBase(base.to_string()))?
            .pop_if_empty()
            .push(self.resource);
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.query_pairs());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://suitmedia-backend.suitdev.com/api";

    #[test]
    fn build_echoes_every_input_plus_both_relations() {
        for page in [1_u32, 2, 37] {
            for size in PageSize::ALL {
                for sort in SortKey::ALL {
                    let descriptor = build(page, size, sort);
                    assert_eq!(descriptor.resource, "ideas");
                    assert_eq!(
                        descriptor.query_pairs(),
                        vec![
                            ("page[number]", page.to_string()),
                            ("page[size]", size.get().to_string()),
                            ("append[]", "small_image".to_string()),
                            ("append[]", "medium_image".to_string()),
                            ("sort", sort.as_str().to_string()),
                        ]
                    );
                }
            }
        }
    }

    #[test]
    fn rendering_is_byte_identical_for_equal_inputs() {
        let first = build(4, PageSize::Twenty, SortKey::PublishedAsc);
        let second = build(4, PageSize::Twenty, SortKey::PublishedAsc);
        assert_eq!(first, second);
        let first_url = first.to_url(BASE).expect("valid base");
        let second_url = second.to_url(BASE).expect("valid base");
        assert_eq!(first_url.as_str(), second_url.as_str());
    }

    #[test]
    fn url_keeps_base_path_and_wire_params() {
        let url = QueryState::default()
            .descriptor()
            .to_url(BASE)
            .expect("valid base");
        assert_eq!(url.path(), "/api/ideas");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("page[number]".to_string(), "1".to_string()),
                ("page[size]".to_string(), "10".to_string()),
                ("append[]".to_string(), "small_image".to_string()),
                ("append[]".to_string(), "medium_image".to_string()),
                ("sort".to_string(), "-published_at".to_string()),
            ]
        );

        let trailing = QueryState::default()
            .descriptor()
            .to_url("http://localhost:8080/api/")
            .expect("valid base");
        assert_eq!(trailing.path(), "/api/ideas");
    }

    #[test]
    fn invalid_base_is_rejected() {
        let descriptor = QueryState::default().descriptor();
        assert!(matches!(descriptor.to_url("not a url"), Err(QueryError::InvalidBase(_))));
        assert!(matches!(
            descriptor.to_url("mailto:ideas@example.com"),
            Err(QueryError::InvalidBase(_))
        ));
    }

    #[test]
    fn state_transitions_touch_one_field() {
        let start = QueryState::default();
        assert_eq!(start.page(), 1);
        assert_eq!(start.page_size(), PageSize::Ten);
        assert_eq!(start.sort(), SortKey::PublishedDesc);

        let resized = start.with_page(3).expect("page 3").with_page_size(PageSize::Fifty);
        assert_eq!(resized.page(), 3);
        assert_eq!(resized.page_size(), PageSize::Fifty);
        assert_eq!(resized.sort(), SortKey::PublishedDesc);

        let resorted = resized.with_sort(SortKey::PublishedAsc);
        assert_eq!(resorted.page(), 3);
        assert_eq!(resorted.page_size(), PageSize::Fifty);
        assert_eq!(start.with_page(0), Err(QueryError::ZeroPage));
    }
}
