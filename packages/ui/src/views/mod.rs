//! Page views shared by the platform packages.
//!
//! Views never touch the router. Anything that needs to move to another page
//! takes an event handler and lets the caller map it onto its `Route`.

mod analytics;
pub use analytics::AnalyticsView;

mod catalog;
pub use catalog::CatalogView;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod search;
pub use search::SearchView;

mod upload;
pub use upload::UploadView;
