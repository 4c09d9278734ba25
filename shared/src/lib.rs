//! Target-independent core of the Journal front-end.
//!
//! Everything here compiles for both `wasm32-unknown-unknown` and the host,
//! so the list-view plumbing (filters, request sequencing, debouncing,
//! category pagination, session handling and form validation) can be unit
//! tested without a browser.

pub mod debounce;
pub mod error;
pub mod filter;
pub mod forms;
pub mod guard;
pub mod list;
pub mod models;
pub mod page;
pub mod paginator;
pub mod session;
pub mod text;

pub use error::ApiError;
pub use filter::{FilterState, ListQuery};
pub use list::{ApplyOutcome, FetchTicket, ListController, ListView};
pub use models::{Article, AuthResponse, Category, CategoryRef, Profile, Role, UserRef};
pub use page::Page;
pub use session::{MemoryTokenStore, Session, TokenStore};
