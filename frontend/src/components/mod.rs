// Reusable components live here.

pub mod dropdown;
pub mod error_banner;
pub mod header;
pub mod idea_card;
pub mod image_with_loading;
pub mod loading_spinner;
pub mod pagination;
