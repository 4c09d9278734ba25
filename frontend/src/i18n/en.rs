pub mod common {
    pub const BRAND_NAME: &str = "Journal";
    pub const LOADING: &str = "Loading...";
    pub const UNCATEGORIZED: &str = "Uncategorized";
    pub const ANONYMOUS: &str = "Anonymous";
    pub const ALL_CATEGORIES: &str = "All Categories";
    pub const SELECT_CATEGORY: &str = "Select category";
    pub const CATEGORIES_FAILED: &str = "Error fetching categories";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE: &str = "Save";
    pub const DELETE: &str = "Delete";
    pub const SAVING: &str = "Saving...";
    pub const GENERIC_FAILURE: &str = "Something went wrong.";
    pub const UNAVAILABLE: &str = "This list could not be loaded.";
    pub const RETRY: &str = "Try again";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
}

pub mod toast {
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© Journal. All rights reserved.";
}

pub mod header {
    pub const HOME: &str = "Home";
    pub const LOGIN: &str = "Login";
    pub const REGISTER: &str = "Register";
    pub const MY_ACCOUNT: &str = "My Account";
    pub const DASHBOARD: &str = "Dashboard";
    pub const LOGOUT: &str = "Logout";
    pub const ACCOUNT_MENU_ARIA: &str = "Account menu";
    pub const PROFILE_FAILED: &str = "Failed to fetch profile";
}

pub mod logout {
    pub const CONFIRM_TITLE: &str = "Log out?";
    pub const CONFIRM_BODY: &str = "You will need to sign in again to manage content.";
    pub const DONE: &str = "Logged out";
}

pub mod admin_layout {
    pub const SIDEBAR_ARIA: &str = "Admin navigation";
    pub const NAV_ARTICLES: &str = "Articles";
    pub const NAV_CATEGORIES: &str = "Categories";
}

pub mod home {
    pub const HERO_TITLE: &str = "Stories, notes and ideas";
    pub const HERO_SUBTITLE: &str = "Browse the latest articles or search by title.";
    pub const SEARCH_PLACEHOLDER: &str = "Search articles...";
    pub const NO_RESULTS: &str = "No articles found.";
    pub const LOAD_FAILED: &str = "Error fetching articles";
    pub const READ_MORE: &str = "Read more";
}

pub mod article_detail {
    pub const LOAD_FAILED: &str = "Error fetching article details";
    pub const RELATED_FAILED: &str = "Error fetching articles";
    pub const NOT_FOUND: &str = "Article not found.";
    pub const OTHER_ARTICLES: &str = "Other articles";
    pub const BACK: &str = "← Back to articles";
}

pub mod auth {
    pub const LOGIN_TITLE: &str = "Sign in";
    pub const REGISTER_TITLE: &str = "Create an account";
    pub const USERNAME: &str = "Username";
    pub const PASSWORD: &str = "Password";
    pub const ROLE: &str = "Role";
    pub const ROLE_PLACEHOLDER: &str = "Select role";
    pub const SHOW_PASSWORD: &str = "Show password";
    pub const HIDE_PASSWORD: &str = "Hide password";
    pub const LOGIN_BUTTON: &str = "Login";
    pub const REGISTER_BUTTON: &str = "Register";
    pub const SUBMITTING: &str = "Please wait...";
    pub const LOGIN_SUCCESS: &str = "Login successful!";
    pub const REGISTER_SUCCESS: &str = "Registration successful!";
    pub const NO_TOKEN_IN_RESPONSE: &str = "Login response did not include a token";
    pub const NO_ACCOUNT: &str = "Don't have an account?";
    pub const HAVE_ACCOUNT: &str = "Already have an account?";
}

pub mod profile {
    pub const TITLE: &str = "My Account";
    pub const USERNAME: &str = "Username";
    pub const PASSWORD: &str = "Password";
    pub const ROLE: &str = "Role";
    pub const BACK: &str = "← Back";
    pub const LOAD_FAILED: &str = "Failed to fetch profile";
}

pub mod admin_articles {
    pub const TITLE: &str = "Articles";
    pub const NEW_ARTICLE: &str = "+ New Article";
    pub const SEARCH_PLACEHOLDER: &str = "Search by title...";
    pub const TOTAL_TEMPLATE: &str = "Total: {} articles";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_TITLE: &str = "Title";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_CREATED: &str = "Created";
    pub const COL_ACTIONS: &str = "Actions";
    pub const PREVIEW: &str = "Preview";
    pub const EDIT: &str = "Edit";
    pub const EMPTY: &str = "No articles yet.";
    pub const LOAD_FAILED: &str = "Error fetching articles";
    pub const DELETE_CONFIRM_TITLE: &str = "Delete article?";
    pub const DELETE_CONFIRM_BODY: &str = "This article will be removed permanently.";
    pub const DELETED: &str = "Article deleted successfully";
    pub const DELETE_FAILED: &str = "Error deleting article";
}

pub mod article_editor {
    pub const CREATE_TITLE: &str = "New Article";
    pub const EDIT_TITLE: &str = "Edit Article";
    pub const TITLE_LABEL: &str = "Title";
    pub const CATEGORY_LABEL: &str = "Category";
    pub const CONTENT_LABEL: &str = "Content (HTML)";
    pub const CONTENT_PLACEHOLDER: &str = "<p>Write your article...</p>";
    pub const IMAGE_LABEL: &str = "Cover image";
    pub const UPLOADING: &str = "Uploading...";
    pub const REMOVE_IMAGE: &str = "Remove image";
    pub const WORDS_TEMPLATE: &str = "{} words";
    pub const LOAD_FAILED: &str = "Error fetching article details";
    pub const NOT_FOUND: &str = "Article not found.";
    pub const UPLOADED: &str = "Image uploaded successfully!";
    pub const UPLOAD_FAILED: &str = "Upload failed.";
    pub const IMAGE_REMOVED: &str = "Image deleted.";
    pub const CREATED: &str = "Article uploaded successfully!";
    pub const UPDATED: &str = "Article updated successfully!";
    pub const BACK: &str = "← Back to articles";
}

pub mod admin_categories {
    pub const TITLE: &str = "Categories";
    pub const ADD: &str = "+ Add Category";
    pub const SEARCH_PLACEHOLDER: &str = "Search categories...";
    pub const COL_NAME: &str = "Name";
    pub const COL_CREATED: &str = "Created";
    pub const COL_ACTIONS: &str = "Actions";
    pub const RENAME: &str = "Edit";
    pub const EMPTY: &str = "No categories found.";
    pub const ADD_TITLE: &str = "Add Category";
    pub const RENAME_TITLE: &str = "Edit Category";
    pub const NAME_LABEL: &str = "Category name";
    pub const LOAD_FAILED: &str = "Error fetching categories";
    pub const CREATED: &str = "Category added successfully";
    pub const CREATE_FAILED: &str = "Failed to add category";
    pub const UPDATED: &str = "Category updated successfully";
    pub const UPDATE_FAILED: &str = "An error occurred while updating the category";
    pub const DELETED: &str = "Category deleted successfully";
    pub const DELETE_FAILED: &str = "An error occurred while deleting the category";
    pub const DELETE_CONFIRM_TITLE: &str = "Delete category?";
    pub const DELETE_CONFIRM_BODY: &str = "Articles in this category will keep their category id.";
}

pub mod not_found {
    pub const TITLE: &str = "404";
    pub const BODY: &str = "The page you are looking for does not exist.";
    pub const HOME: &str = "Back to home";
}
