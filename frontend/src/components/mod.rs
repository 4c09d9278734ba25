// Reusable components live here.

pub mod admin_layout;
pub mod article_card;
pub mod category_select;
pub mod confirm_dialog;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod logout_button;
pub mod pagination;
pub mod raw_html;
pub mod require_session;
pub mod toast;
