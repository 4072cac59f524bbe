//! Dropdown state machine for the page-size and sort selectors.

use crate::query::{PageSize, SortKey};

/// Whether a dropdown's option list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MenuState {
    /// Only the summary control is shown.
    #[default]
    Closed,
    /// The option rows are shown.
    Open,
}

/// A value offered by a dropdown.
pub trait SelectOption: Copy + PartialEq + 'static {
    /// Every option, in menu order.
    fn options() -> &'static [Self];

    /// Text shown for the option. Display only; the stored value is `self`.
    fn label(self) -> &'static str;
}

impl SelectOption for PageSize {
    fn options() -> &'static [Self] {
        &PageSize::ALL
    }

    fn label(self) -> &'static str {
        match self {
            PageSize::Ten => "10",
            PageSize::Twenty => "20",
            PageSize::Fifty => "50",
        }
    }
}

impl SelectOption for SortKey {
    fn options() -> &'static [Self] {
        &SortKey::ALL
    }

    fn label(self) -> &'static str {
        match self {
            SortKey::PublishedAsc => "Latest",
            SortKey::PublishedDesc => "Newest",
        }
    }
}

/// One dropdown: its menu state and the value it currently shows.
///
/// Opening happens only through the summary control and closing only
/// through picking an option; there is no click-outside dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<T> {
    menu: MenuState,
    selected: T,
}

impl<T: SelectOption> Selector<T> {
    /// A closed dropdown showing `selected`.
    pub fn new(selected: T) -> Self {
        Self {
            menu: MenuState::Closed,
            selected,
        }
    }

    /// True while the option rows are shown.
    pub fn is_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// Value shown in the summary control.
    pub fn selected(&self) -> T {
        self.selected
    }

    /// Summary control clicked. An open menu stays open.
    pub fn open(self) -> Self {
        Self {
            menu: MenuState::Open,
            ..self
        }
    }

    /// Option row clicked: takes the value and closes the menu.
    pub fn select(self, value: T) -> Self {
        Self {
            menu: MenuState::Closed,
            selected: value,
        }
    }

    /// Options paired with whether each is the current one.
    pub fn rows(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        T::options()
            .iter()
            .map(move |&option| (option, option == self.selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryState;

    #[test]
    fn page_size_selection_round_trip() {
        let query = QueryState::default();
        let menu = Selector::new(query.page_size());
        assert!(!menu.is_open());

        let menu = menu.open();
        assert!(menu.is_open());

        let menu = menu.select(PageSize::Twenty);
        let next = query.with_page_size(menu.selected());

        assert_eq!(next.page_size().get(), 20);
        assert!(!menu.is_open());
        assert_eq!(next.sort(), query.sort());
        assert_eq!(next.page(), query.page());
    }

    #[test]
    fn opening_twice_keeps_menu_open() {
        let menu = Selector::new(SortKey::PublishedDesc).open().open();
        assert!(menu.is_open());
        assert_eq!(menu.selected(), SortKey::PublishedDesc);
    }

    #[test]
    fn menus_are_independent() {
        let sizes = Selector::new(PageSize::Ten).open();
        let sorts = Selector::new(SortKey::PublishedDesc).open();
        let sorts = sorts.select(SortKey::PublishedAsc);
        assert!(sizes.is_open());
        assert!(!sorts.is_open());
    }

    #[test]
    fn sort_labels_are_display_only() {
        let rows: Vec<(&str, &str, bool)> = Selector::new(SortKey::PublishedDesc)
            .rows()
            .map(|(key, current)| (key.as_str(), key.label(), current))
            .collect();
        assert_eq!(
            rows,
            vec![("published_at", "Latest", false), ("-published_at", "Newest", true)]
        );
    }

    #[test]
    fn page_size_rows_follow_menu_order() {
        let labels: Vec<&str> = Selector::new(PageSize::Fifty)
            .rows()
            .map(|(size, _)| size.label())
            .collect();
        assert_eq!(labels, vec!["10", "20", "50"]);
    }
}
