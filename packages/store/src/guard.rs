//! # Pages and access control
//!
//! [`Page`] enumerates every screen of the app with its URL path. [`guard`]
//! decides, from the current [`AuthState`] alone, whether a page may render or
//! the visitor must be sent to the login screen. The web router calls it on
//! every render; nothing is cached.

use crate::auth::AuthState;

/// A navigable screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Home,
    Catalog,
    Upload,
    Search,
    Analytics,
}

/// Links shown in the navigation shell, in display order.
pub const NAVIGATION: [Page; 4] = [Page::Catalog, Page::Upload, Page::Search, Page::Analytics];

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::Home,
        Page::Catalog,
        Page::Upload,
        Page::Search,
        Page::Analytics,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Home => "/",
            Page::Catalog => "/catalog",
            Page::Upload => "/upload",
            Page::Search => "/search",
            Page::Analytics => "/analytics",
        }
    }

    /// Resolve a URL path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Home => "Home",
            Page::Catalog => "Catalog",
            Page::Upload => "Upload",
            Page::Search => "Search",
            Page::Analytics => "Analytics",
        }
    }

    /// Whether the page requires a session.
    pub fn is_protected(self) -> bool {
        self != Page::Login
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Page),
}

/// Decide whether `page` may render for the given auth state.
pub fn guard(auth: &AuthState, page: Page) -> Access {
    if page.is_protected() && !auth.is_authenticated() {
        tracing::debug!("No session for {}, redirecting to login", page.path());
        Access::Redirect(Page::Login)
    } else {
        Access::Allow
    }
}

/// Where a visitor already holding a session should land instead of `page`.
///
/// Only the login screen bounces signed-in users (to home).
pub fn landing(auth: &AuthState, page: Page) -> Option<Page> {
    (page == Page::Login && auth.is_authenticated()).then_some(Page::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::upload::UploadQueue;

    fn resolve(auth: &AuthState, path: &str) -> Page {
        let page = Page::from_path(path).unwrap();
        match guard(auth, page) {
            Access::Allow => page,
            Access::Redirect(target) => target,
        }
    }

    #[test]
    fn test_paths_roundtrip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/catalog/"), Some(Page::Catalog));
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_navigation_excludes_login_and_home() {
        assert!(!NAVIGATION.contains(&Page::Login));
        assert!(!NAVIGATION.contains(&Page::Home));
        assert!(NAVIGATION.iter().all(|page| page.is_protected()));
    }

    #[test]
    fn test_unauthenticated_is_redirected_from_protected_pages() {
        let auth = AuthState::Unauthenticated;
        for page in Page::ALL.into_iter().filter(|p| p.is_protected()) {
            assert_eq!(guard(&auth, page), Access::Redirect(Page::Login));
        }
        assert_eq!(guard(&auth, Page::Login), Access::Allow);
    }

    #[test]
    fn test_authenticated_is_allowed_everywhere() {
        let mut auth = AuthState::default();
        auth.login("demo@catandclass.io", "demo123").unwrap();
        for page in Page::ALL {
            assert_eq!(guard(&auth, page), Access::Allow);
        }
    }

    #[test]
    fn test_landing_bounces_signed_in_user_from_login() {
        let mut auth = AuthState::default();
        assert_eq!(landing(&auth, Page::Login), None);
        auth.login("demo@catandclass.io", "demo123").unwrap();
        assert_eq!(landing(&auth, Page::Login), Some(Page::Home));
        assert_eq!(landing(&auth, Page::Catalog), None);
    }

    #[test]
    fn test_demo_session_flow() {
        let config = AppConfig::bundled().unwrap();
        let mut auth = AuthState::default();

        assert_eq!(resolve(&auth, "/catalog"), Page::Login);

        auth.login(&config.demo.email, &config.demo.password).unwrap();
        assert!(auth.current_user().is_some());
        assert_eq!(resolve(&auth, "/catalog"), Page::Catalog);
        assert_eq!(config.catalog.len(), 2);

        let uploads = UploadQueue::new(config.uploads.clone());
        assert_eq!(uploads.len(), 2);

        auth.logout();
        assert!(auth.current_user().is_none());
        assert_eq!(resolve(&auth, "/upload"), Page::Login);
    }
}
