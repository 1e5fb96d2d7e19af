//! State, seed data and access rules for Cat&Class.
//!
//! Nothing in here depends on a UI framework; the `ui` and `web` packages wrap
//! these types in Dioxus signals.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod search;
pub mod theme;
pub mod upload;

pub use auth::{AuthState, Session};
pub use config::AppConfig;
pub use error::{AuthError, SeedError};
pub use guard::{guard, landing, Access, Page, NAVIGATION};
pub use models::{guess_mime, CatalogEntry, FileKind, FileStatus, MonthlyActivity, SearchResult, Stat, UploadFile};
pub use search::Searchable;
pub use theme::Theme;
pub use upload::UploadQueue;
