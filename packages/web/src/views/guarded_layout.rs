use dioxus::prelude::*;
use store::{guard, Access, Page};
use ui::{use_auth, AppShell};

use crate::Route;

/// Layout for every signed-in page: runs the guard on each render and wraps
/// the outlet in the navigation shell.
#[component]
pub fn GuardedLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let page = route.page();

    if let Access::Redirect(target) = guard(&auth.read(), page) {
        nav.replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        AppShell {
            active: page,
            on_navigate: move |page: Page| {
                nav.push(Route::from(page));
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
