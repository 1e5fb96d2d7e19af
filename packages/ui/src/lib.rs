//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/app.css");

mod config;
pub use config::{use_app_config, ConfigProvider};

mod auth;
pub use auth::{use_auth, AuthProvider, LogoutButton};

mod theme;
pub use theme::{apply_theme, use_theme, ThemeProvider, ThemeSignal, ThemeToggle};

mod shell;
pub use shell::{AppShell, PageIcon};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

/// Every context provider the views rely on, in dependency order.
#[component]
pub fn AppProviders(children: Element) -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        ConfigProvider {
            ThemeProvider {
                AuthProvider {
                    {children}
                }
            }
        }
    }
}
