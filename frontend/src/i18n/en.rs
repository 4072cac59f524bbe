pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod header {
    pub const BRAND_NAME: &str = "Suitmedia";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const NAV_ITEMS: [&str; 6] = ["Work", "About", "Services", "Ideas", "Careers", "Contact"];
    pub const NAV_CURRENT: &str = "Ideas";
}

pub mod ideas_page {
    pub const HERO_TITLE: &str = "Ideas";
    pub const HERO_DESC: &str = "Where all our great things begin";
    pub const SHOWING_TEMPLATE: &str = "Showing {}-{}";
    pub const OF_TOTAL_TEMPLATE: &str = " of {}";
    pub const NOTHING_SHOWN: &str = "Showing 0 results";
    pub const PER_PAGE_LABEL: &str = "Show per page:";
    pub const SORT_LABEL: &str = "Sort by:";
    pub const EMPTY: &str = "No ideas on this page yet.";
    pub const UNAVAILABLE: &str = "Ideas could not be loaded. Try another page or sort order.";
    pub const FETCH_FAILED_TEMPLATE: &str = "Could not load ideas: {}";
}

pub mod dropdown {
    pub const OPTIONS_ARIA: &str = "Options";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod not_found_page {
    pub const TITLE: &str = "404 - Page not found";
    pub const DETAIL: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to Ideas";
}
