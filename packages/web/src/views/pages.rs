use dioxus::prelude::*;
use store::Page;
use ui::views::{AnalyticsView, CatalogView, HomeView, SearchView, UploadView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_navigate: move |page: Page| {
                nav.push(Route::from(page));
            },
        }
    }
}

#[component]
pub fn Catalog() -> Element {
    rsx! { CatalogView {} }
}

#[component]
pub fn Upload() -> Element {
    rsx! { UploadView {} }
}

#[component]
pub fn Search() -> Element {
    rsx! { SearchView {} }
}

#[component]
pub fn Analytics() -> Element {
    rsx! { AnalyticsView {} }
}
