use dioxus::prelude::*;
use store::{AuthError, Session};

use crate::icons::{FaEye, FaEyeSlash};
use crate::{log_activity, use_activity_log, use_app_config, use_auth, use_theme, Icon, LogLevel};

const FEATURES: [&str; 3] = [
    "AI-Powered Cataloging Assistant",
    "Library of Congress Integration",
    "Smart Subject Analysis",
];

/// Sign-in screen: credential form plus a one-click demo login.
#[component]
pub fn LoginView(on_login: EventHandler<Session>) -> Element {
    let mut auth = use_auth();
    let theme = use_theme();
    let config = use_app_config();
    let mut activity_log = use_activity_log();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<AuthError>::None);

    let mut attempt = move |identifier: String, secret: String| {
        let result = auth.write().login(&identifier, &secret);
        match result {
            Ok(session) => {
                error.set(None);
                log_activity(
                    &mut activity_log,
                    LogLevel::Success,
                    &format!("Signed in as {}", session.email),
                );
                on_login.call(session);
            }
            Err(e) => {
                tracing::warn!("Login refused: {}", e);
                error.set(Some(e));
            }
        }
    };

    let demo = config.demo.clone();
    let app_name = config.app_name.clone();

    rsx! {
        div {
            class: "login-page {theme().class()}",

            div {
                class: "login-panel",
                div {
                    class: "login-card",
                    h2 { class: "login-title", "Sign in to {app_name}" }
                    p { class: "login-subtitle", "Access your library catalog management" }

                    form {
                        class: "login-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            attempt(email(), password());
                        },
                        input {
                            class: "login-input",
                            name: "email",
                            r#type: "email",
                            placeholder: "Email address",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        div {
                            class: "password-field",
                            input {
                                class: "login-input",
                                name: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                title: if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() {
                                    Icon { width: 18, height: 18, icon: FaEyeSlash }
                                } else {
                                    Icon { width: 18, height: 18, icon: FaEye }
                                }
                            }
                        }

                        if let Some(e) = error() {
                            p { class: "login-error", "{e}" }
                        }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            "Sign in"
                        }
                    }

                    div { class: "divider", span { "Or" } }

                    button {
                        class: "btn btn-outline btn-block",
                        onclick: move |_| attempt(demo.email.clone(), demo.password.clone()),
                        "Preview {app_name} Demo"
                    }
                }
            }

            div {
                class: "login-features",
                h2 { "Intelligent Knowledge Organization" }
                ul {
                    for (number, feature) in (1..).zip(FEATURES) {
                        li {
                            key: "{number}",
                            span { class: "feature-number", "{number}" }
                            span { "{feature}" }
                        }
                    }
                }
            }
        }
    }
}
