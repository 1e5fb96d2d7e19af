//! Theme context: a single light/dark flag shared by every view.

use dioxus::prelude::*;
use store::Theme;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Provider component holding the theme for the lifetime of the app.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme: ThemeSignal = use_context_provider(|| Signal::new(Theme::default()));

    use_effect(move || {
        apply_theme(theme());
    });

    rsx! {
        {children}
    }
}

/// Mirror the theme onto the document root so page-level CSS can key off it.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            root.set_class_name(theme.class());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Button flipping between light and dark mode.
#[component]
pub fn ThemeToggle(#[props(default = "".to_string())] class: String) -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| theme.write().toggle(),
            if theme().is_dark() {
                Icon { width: 18, height: 18, icon: FaSun }
            } else {
                Icon { width: 18, height: 18, icon: FaMoon }
            }
            span { "{theme().toggle_label()}" }
        }
    }
}
