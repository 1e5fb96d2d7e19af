use dioxus::prelude::*;

use store::Page;
use views::{Analytics, Catalog, GuardedLayout, Home, Login, Search, Upload};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(GuardedLayout)]
        #[route("/")]
        Home {},
        #[route("/catalog")]
        Catalog {},
        #[route("/upload")]
        Upload {},
        #[route("/search")]
        Search {},
        #[route("/analytics")]
        Analytics {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The screen this route renders. Unknown paths count as home so the
    /// guard still applies to them.
    fn page(&self) -> Page {
        match self {
            Route::Login {} => Page::Login,
            Route::Home {} | Route::NotFound { .. } => Page::Home,
            Route::Catalog {} => Page::Catalog,
            Route::Upload {} => Page::Upload,
            Route::Search {} => Page::Search,
            Route::Analytics {} => Page::Analytics,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Home => Route::Home {},
            Page::Catalog => Route::Catalog {},
            Page::Upload => Route::Upload {},
            Page::Search => Route::Search {},
            Page::Analytics => Route::Analytics {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Cat&Class" }
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        ui::AppProviders {
            Router::<Route> {}
        }
    }
}

/// Resolve a path the router did not match, such as `/catalog/`, to a page.
/// Anything unknown lands on home, which redirects to `/login` when signed out.
fn fallback_route(segments: &[String]) -> Route {
    let path = format!("/{}", segments.join("/"));
    match Page::from_path(&path) {
        Some(page) => Route::from(page),
        None => {
            tracing::debug!("No route for {}, going home", path);
            Route::Home {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(fallback_route(&segments));
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_page_paths() {
        for page in Page::ALL {
            let route = Route::from(page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(route.page(), page);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/shelves/a".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(route.page(), Page::Home);
    }

    #[test]
    fn test_fallback_route() {
        let segments = |parts: &[&str]| parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        assert_eq!(fallback_route(&segments(&["catalog", ""])), Route::Catalog {});
        assert_eq!(fallback_route(&segments(&["upload"])), Route::Upload {});
        assert_eq!(fallback_route(&segments(&["shelves", "a"])), Route::Home {});
        assert_eq!(fallback_route(&[]), Route::Home {});
    }
}
