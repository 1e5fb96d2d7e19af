use dioxus::prelude::*;
use store::search::rank;

use crate::icons::{FaBook, FaFilter, FaMagnifyingGlass};
use crate::{use_app_config, Icon};

#[component]
pub fn SearchView() -> Element {
    let config = use_app_config();
    let mut draft = use_signal(String::new);
    let mut query = use_signal(String::new);

    let hits = rank(&config.search, &query());

    rsx! {
        div {
            class: "view",
            div {
                class: "card search-header",
                form {
                    class: "search-bar",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        tracing::debug!("Searching for {:?}", draft());
                        query.set(draft());
                    },
                    div {
                        class: "search-input",
                        Icon { width: 18, height: 18, icon: FaMagnifyingGlass }
                        input {
                            class: "text-input",
                            r#type: "text",
                            placeholder: "Search catalog...",
                            value: draft(),
                            oninput: move |evt: FormEvent| draft.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Search" }
                }
                div {
                    class: "filter-tags",
                    button {
                        class: "filter-tag",
                        Icon { width: 14, height: 14, icon: FaFilter }
                        span { "Filter Results" }
                    }
                }
            }

            div {
                class: "search-results",
                if hits.is_empty() {
                    p { class: "muted", "No results for \"{query}\"." }
                }
                for result in hits {
                    div {
                        key: "{result.id}",
                        class: "card search-result",
                        Icon { width: 22, height: 22, icon: FaBook, class: "accent" }
                        div {
                            class: "search-result-body",
                            div {
                                class: "search-result-head",
                                h3 { class: "item-title", "{result.title}" }
                                span { class: "muted", "Relevance: {result.relevance}%" }
                            }
                            p { class: "muted", "{result.author} · {result.kind}" }
                            div {
                                class: "subject-tags",
                                for subject in result.subjects.iter() {
                                    span { key: "{subject}", class: "subject-tag", "{subject}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
