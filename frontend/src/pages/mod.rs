pub mod admin_articles;
pub mod admin_categories;
pub mod article_detail;
pub mod article_editor;
pub mod auth;
pub mod home;
pub mod not_found;
pub mod profile;
