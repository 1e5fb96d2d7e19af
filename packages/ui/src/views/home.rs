use dioxus::prelude::*;
use store::Page;

use crate::{use_activity_log, use_auth, PageIcon};

const QUICK_ACTIONS: [(Page, &str); 3] = [
    (Page::Catalog, "New Catalog Entry"),
    (Page::Upload, "Upload Materials"),
    (Page::Search, "Search Catalog"),
];

#[component]
pub fn HomeView(on_navigate: EventHandler<Page>) -> Element {
    let auth = use_auth();
    let activity_log = use_activity_log();

    let name = auth
        .read()
        .current_user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Librarian".to_string());
    let recent: Vec<_> = activity_log.read().recent(5).cloned().collect();

    rsx! {
        div {
            class: "view",
            h1 { class: "view-title", "Welcome back, {name}!" }

            div {
                class: "home-grid",
                div {
                    class: "card",
                    h2 { class: "card-title", "Quick Actions" }
                    div {
                        class: "quick-actions",
                        for (page, label) in QUICK_ACTIONS {
                            button {
                                key: "{page.path()}",
                                class: "quick-action",
                                onclick: move |_| on_navigate.call(page),
                                PageIcon { page }
                                span { "{label}" }
                            }
                        }
                    }
                }

                div {
                    class: "card card-wide",
                    h2 { class: "card-title", "Recent Activity" }
                    if recent.is_empty() {
                        p { class: "muted", "No recent activity to display." }
                    } else {
                        ul {
                            class: "activity-list",
                            for (i, entry) in recent.iter().enumerate() {
                                li {
                                    key: "{i}",
                                    class: "activity-{entry.level:?}",
                                    span { class: "activity-time", "{entry.timestamp}" }
                                    span { "{entry.message}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
