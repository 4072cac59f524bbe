pub mod ideas;
pub mod not_found;
