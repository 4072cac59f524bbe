//! Committed listing state.

use crate::{pagination::RangeSummary, query::QueryState, Article};

/// One successful fetch: records in server order plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    /// Records as the server ordered them.
    pub records: Vec<Article>,
    /// Server-reported number of pages, at least 1.
    pub last_page: u32,
    /// Server-reported range, when present.
    pub summary: Option<RangeSummary>,
}

/// What the grid and the pagination bar render from.
///
/// Only [`crate::FetchCoordinator::resolve`] writes it, and only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    records: Option<Vec<Article>>,
    last_page: u32,
    summary: Option<RangeSummary>,
    // query whose response is on screen, not the one in flight
    committed: Option<QueryState>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            records: None,
            last_page: 1,
            summary: None,
            committed: None,
        }
    }
}

impl ListState {
    /// Records of the last committed page; `None` until the first success.
    pub fn records(&self) -> Option<&[Article]> {
        self.records.as_deref()
    }

    /// Last page reported by the server.
    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    /// True until a page has been committed.
    pub fn is_loading(&self) -> bool {
        self.records.is_none()
    }

    /// Range of the committed page: the server's figures, or an estimate
    /// from the query that produced it.
    pub fn summary(&self) -> Option<RangeSummary> {
        self.summary.or_else(|| {
            let query = self.committed.as_ref()?;
            RangeSummary::estimate(query, self.records.as_ref().map_or(0, Vec::len))
        })
    }

    // 整体替换，不合并旧数据
    pub(crate) fn commit(&mut self, query: QueryState, page: ListPage) {
        self.records = Some(page.records);
        self.last_page = page.last_page.max(1);
        self.summary = page.summary;
        self.committed = Some(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, query::PageSize};

    #[test]
    fn starts_loading_on_one_page() {
        let state = ListState::default();
        assert!(state.is_loading());
        assert_eq!(state.records(), None);
        assert_eq!(state.last_page(), 1);
        assert_eq!(state.summary(), None);
        assert_eq!(state.committed, None);
    }

    #[test]
    fn commit_replaces_wholesale() {
        let mut state = ListState::default();
        state.commit(QueryState::default(), ListPage {
            records: fixtures::articles(1..=10),
            last_page: 7,
            summary: None,
        });
        let second = QueryState::default().with_page(2).expect("page 2");
        state.commit(second, ListPage {
            records: fixtures::articles(11..=12),
            last_page: 2,
            summary: None,
        });
        let ids: Vec<u64> = state
            .records()
            .unwrap_or_default()
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(state.last_page(), 2);
        assert_eq!(state.committed, Some(second));
        assert!(!state.is_loading());
    }

    #[test]
    fn server_summary_wins_over_estimate() {
        let mut state = ListState::default();
        state.commit(QueryState::default(), ListPage {
            records: fixtures::articles(1..=10),
            last_page: 7,
            summary: Some(RangeSummary {
                from: 1,
                to: 10,
                total: Some(64),
            }),
        });
        assert_eq!(state.summary().and_then(|s| s.total), Some(64));
    }

    #[test]
    fn estimate_uses_the_committed_query() {
        let mut state = ListState::default();
        let third = QueryState::default()
            .with_page_size(PageSize::Twenty)
            .with_page(3)
            .expect("page 3");
        state.commit(third, ListPage {
            records: fixtures::articles(41..=47),
            last_page: 3,
            summary: None,
        });
        assert_eq!(
            state.summary(),
            Some(RangeSummary {
                from: 41,
                to: 47,
                total: None
            })
        );
    }
}
