use dioxus::prelude::*;
use store::search::filter;

use crate::icons::{FaBook, FaFilter, FaPlus};
use crate::{use_app_config, Icon};

#[component]
pub fn CatalogView() -> Element {
    let config = use_app_config();
    let mut query = use_signal(String::new);

    let visible = filter(&config.catalog, &query());

    rsx! {
        div {
            class: "view",
            div {
                class: "view-header",
                h1 { class: "view-title", "Catalog" }
                button {
                    class: "btn btn-primary",
                    Icon { width: 16, height: 16, icon: FaPlus }
                    span { "New Entry" }
                }
            }

            div {
                class: "card toolbar",
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Search catalog...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                button {
                    class: "btn btn-outline",
                    Icon { width: 16, height: 16, icon: FaFilter }
                    span { "Filters" }
                }
            }

            if visible.is_empty() {
                p { class: "muted", "No catalog entries match \"{query}\"." }
            }

            div {
                class: "catalog-grid",
                for item in visible {
                    div {
                        key: "{item.id}",
                        class: "card catalog-card",
                        div {
                            class: "catalog-card-head",
                            Icon { width: 28, height: 28, icon: FaBook, class: "accent" }
                            div {
                                h3 { class: "item-title", "{item.title}" }
                                p { class: "muted", "{item.author}" }
                            }
                        }
                        div {
                            class: "subject-tags",
                            for subject in item.subjects.iter() {
                                span { key: "{subject}", class: "subject-tag", "{subject}" }
                            }
                        }
                        div {
                            class: "catalog-card-foot",
                            p { class: "muted", "Added: {item.added_display()}" }
                        }
                    }
                }
            }
        }
    }
}
