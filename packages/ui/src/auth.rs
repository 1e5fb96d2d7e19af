//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::AuthState;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session for the lifetime of the app.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let mut auth_state = use_auth();
    let mut activity_log = use_activity_log();

    let onclick = move |_| {
        let email = auth_state.read().current_user().map(|u| u.email.clone());
        auth_state.write().logout();
        if let Some(email) = email {
            log_activity(&mut activity_log, LogLevel::Info, &format!("Signed out {email}"));
        }
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            {children}
            "{label}"
        }
    }
}
