use dioxus::prelude::*;
use store::AppConfig;

/// Seed data and demo credentials, loaded once by [`ConfigProvider`].
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

#[component]
pub fn ConfigProvider(children: Element) -> Element {
    use_context_provider(AppConfig::load);

    rsx! {
        {children}
    }
}
