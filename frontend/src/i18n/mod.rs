pub mod en;

pub use en as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let first_pass = template.replacen("{}", &first.to_string(), 1);
    first_pass.replacen("{}", &second.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::{fill_one, fill_two};

    #[test]
    fn fills_placeholders_left_to_right() {
        assert_eq!(fill_one("Go to page {}", 4), "Go to page 4");
        assert_eq!(fill_two("Showing {}-{}", 11, 20), "Showing 11-20");
        assert_eq!(fill_one("no slot", 1), "no slot");
    }
}
