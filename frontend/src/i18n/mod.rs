pub mod en;

pub use en as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_one_replaces_first_placeholder() {
        assert_eq!(fill_one("Go to page {}", 3), "Go to page 3");
        assert_eq!(fill_one("{} of {}", 1), "1 of {}");
    }
}
