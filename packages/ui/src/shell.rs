//! Navigation shell wrapped around every signed-in page.

use dioxus::prelude::*;
use store::{Page, NAVIGATION};

use crate::icons::{FaBars, FaBook, FaChartColumn, FaHouse, FaMagnifyingGlass, FaRightFromBracket, FaUpload, FaXmark};
use crate::{use_app_config, use_theme, Icon, LogoutButton, ThemeToggle};

/// Sidebar + header layout.
///
/// Routing stays with the platform package: the shell only reports which
/// page was picked through `on_navigate`.
#[component]
pub fn AppShell(
    active: Page,
    on_navigate: EventHandler<Page>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let theme = use_theme();
    let config = use_app_config();
    let mut sidebar_open = use_signal(|| false);

    let app_name = config.app_name.clone();

    rsx! {
        div {
            class: "app-shell {theme().class()}",

            // Mobile sidebar
            if sidebar_open() {
                div {
                    class: "mobile-overlay",
                    onclick: move |_| sidebar_open.set(false),
                    div {
                        class: "mobile-sidebar",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                        button {
                            class: "mobile-close",
                            title: "Close menu",
                            onclick: move |_| sidebar_open.set(false),
                            Icon { width: 20, height: 20, icon: FaXmark }
                        }
                        Brand {
                            name: app_name.clone(),
                            on_click: move |_| {
                                sidebar_open.set(false);
                                on_navigate.call(Page::Home);
                            },
                        }
                        NavLinks {
                            active,
                            on_navigate: move |page| {
                                sidebar_open.set(false);
                                on_navigate.call(page);
                            },
                        }
                        div {
                            class: "sidebar-bottom",
                            ThemeToggle { class: "sidebar-bottom-item" }
                        }
                    }
                }
            }

            // Desktop sidebar
            aside {
                class: "sidebar",
                Brand {
                    name: app_name.clone(),
                    on_click: move |_| on_navigate.call(Page::Home),
                }
                NavLinks { active, on_navigate }
                div {
                    class: "sidebar-bottom",
                    ThemeToggle { class: "sidebar-bottom-item" }
                    LogoutButton {
                        class: "sidebar-bottom-item",
                        on_logout,
                        Icon { width: 18, height: 18, icon: FaRightFromBracket }
                    }
                }
            }

            div {
                class: "main",
                header {
                    class: "topbar",
                    button {
                        class: "menu-button",
                        title: "Open menu",
                        onclick: move |_| sidebar_open.set(true),
                        Icon { width: 22, height: 22, icon: FaBars }
                    }
                    span { class: "brand-name topbar-brand", "{app_name}" }
                }
                main {
                    class: "content",
                    {children}
                }
            }
        }
    }
}

#[component]
fn Brand(name: String, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "brand",
            onclick: move |_| on_click.call(()),
            span { class: "brand-name", "{name}" }
        }
    }
}

#[component]
fn NavLinks(active: Page, on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        nav {
            class: "nav-links",
            for page in NAVIGATION {
                button {
                    key: "{page.path()}",
                    class: if page == active { "nav-link active" } else { "nav-link" },
                    onclick: move |_| on_navigate.call(page),
                    PageIcon { page }
                    span { "{page.title()}" }
                }
            }
        }
    }
}

/// Icon used for a page in navigation and quick actions.
#[component]
pub fn PageIcon(page: Page) -> Element {
    match page {
        Page::Home | Page::Login => rsx! { Icon { width: 18, height: 18, icon: FaHouse } },
        Page::Catalog => rsx! { Icon { width: 18, height: 18, icon: FaBook } },
        Page::Upload => rsx! { Icon { width: 18, height: 18, icon: FaUpload } },
        Page::Search => rsx! { Icon { width: 18, height: 18, icon: FaMagnifyingGlass } },
        Page::Analytics => rsx! { Icon { width: 18, height: 18, icon: FaChartColumn } },
    }
}
