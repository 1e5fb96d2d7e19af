//! Login page view.

use dioxus::prelude::*;
use store::{landing, Page, Session};
use ui::{use_auth, views::LoginView};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go home
    if let Some(target) = landing(&auth.read(), Page::Login) {
        nav.replace(Route::from(target));
    }

    rsx! {
        LoginView {
            on_login: move |_: Session| {
                nav.replace(Route::Home {});
            },
        }
    }
}
