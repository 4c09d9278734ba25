//! Compile-time settings for the frontend.

/// API base URL, read at compile time from `JOURNAL_API_BASE`.
pub const API_BASE: &str = match option_env!("JOURNAL_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Rows per page in the article table and the public feed.
pub const ARTICLE_PAGE_SIZE: usize = 10;
/// Rows per page in the category table.
pub const CATEGORY_PAGE_SIZE: usize = 10;
/// Page size used when loading every category for a dropdown.
pub const CATEGORY_DROPDOWN_PAGE_SIZE: usize = 100;
/// Upper bound on dropdown pages, in case the server keeps reporting more.
pub const MAX_CATEGORY_PAGES: usize = 50;

/// Quiet window for title search boxes.
pub const SEARCH_DEBOUNCE_MS: u32 = 400;
/// Quiet window for the admin category filter.
pub const CATEGORY_DEBOUNCE_MS: u32 = 300;

/// Articles fetched for the "other articles" strip on the detail page.
pub const RELATED_FETCH_LIMIT: usize = 4;
/// Articles shown in that strip.
pub const RELATED_SHOWN: usize = 3;

/// Pause between a successful login and the role-based redirect.
pub const REDIRECT_DELAY_MS: u32 = 2000;
/// Lifetime of a toast notification.
pub const TOAST_DISMISS_MS: u32 = 3000;

/// Characters of body text shown on feed cards.
pub const EXCERPT_CHARS: usize = 160;

/// Join `path` onto [`API_BASE`].
pub fn api_url(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", API_BASE.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_with_single_slash() {
        assert!(api_url("/articles").ends_with("/articles"));
        assert!(!api_url("articles").contains("//articles"));
    }
}
