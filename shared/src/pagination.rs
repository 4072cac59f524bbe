//! Page controls and the "Showing X-Y of Z" summary.

use crate::query::QueryState;

/// One page-number button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// Page number, starting at 1.
    pub page: u32,
    /// Whether this is the page currently shown.
    pub active: bool,
}

/// Controls for every page in `[1, last_page]`, ascending.
///
/// The full range is always produced; there is no windowing. A
/// `last_page` of 0 is treated as 1.
pub fn derive_controls(current_page: u32, last_page: u32) -> Vec<PageControl> {
    (1..=last_page.max(1))
        .map(|page| PageControl {
            page,
            active: page == current_page,
        })
        .collect()
}

/// Range of records shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    /// 1-based index of the first record shown.
    pub from: u64,
    /// 1-based index of the last record shown.
    pub to: u64,
    /// Total record count, when the server reports it.
    pub total: Option<u64>,
}

impl RangeSummary {
    /// Range implied by the query when the server omits `from`/`to`.
    ///
    /// Returns `None` for an empty page.
    pub fn estimate(query: &QueryState, records: usize) -> Option<Self> {
        if records == 0 {
            return None;
        }
        let size = u64::from(query.page_size().get());
        let from = u64::from(query.page() - 1) * size + 1;
        Some(Self {
            from,
            to: from + records as u64 - 1,
            total: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PageSize;

    fn pages(controls: &[PageControl]) -> Vec<u32> {
        controls.iter().map(|c| c.page).collect()
    }

    #[test]
    fn middle_page_of_five() {
        let controls = derive_controls(3, 5);
        assert_eq!(pages(&controls), vec![1, 2, 3, 4, 5]);
        let active: Vec<u32> = controls.iter().filter(|c| c.active).map(|c| c.page).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn single_page_is_active() {
        assert_eq!(derive_controls(1, 1), vec![PageControl { page: 1, active: true }]);
    }

    #[test]
    fn zero_last_page_still_yields_one_control() {
        assert_eq!(derive_controls(1, 0), vec![PageControl { page: 1, active: true }]);
    }

    #[test]
    fn current_page_beyond_range_marks_nothing_active() {
        let controls = derive_controls(9, 4);
        assert_eq!(pages(&controls), vec![1, 2, 3, 4]);
        assert!(controls.iter().all(|c| !c.active));
    }

    #[test]
    fn large_range_is_not_windowed() {
        assert_eq!(derive_controls(50, 120).len(), 120);
    }

    #[test]
    fn estimate_follows_page_and_size() {
        let query = QueryState::default()
            .with_page_size(PageSize::Twenty)
            .with_page(3)
            .expect("page 3");
        assert_eq!(
            RangeSummary::estimate(&query, 7),
            Some(RangeSummary {
                from: 41,
                to: 47,
                total: None
            })
        );
        assert_eq!(RangeSummary::estimate(&query, 0), None);
    }
}
