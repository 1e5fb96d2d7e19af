//! Session state machine.
//!
//! There is no backend: any non-empty credential pair is accepted and turned
//! into a synthetic [`Session`] derived from the identifier.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
}

impl Session {
    /// Build a session from a login identifier.
    ///
    /// The display name comes from the local part of an e-mail address,
    /// split on `.`, `_` and `-` with each word capitalised:
    /// `"jane.smith@example.org"` becomes `"Jane Smith"`.
    pub fn from_identifier(identifier: &str) -> Self {
        let email = identifier.trim().to_string();
        let local = email.split('@').next().unwrap_or_default();
        let name = local
            .split(['.', '_', '-'])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        Self { name, email }
    }

    /// Name shown in greetings, falling back when the identifier had no
    /// usable local part.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Librarian"
        } else {
            &self.name
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Authentication state for the application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    /// Attempt to sign in.
    ///
    /// The identifier is trimmed before the emptiness check; the secret is
    /// taken as typed, so a password of only spaces is still accepted.
    /// Signing in while already authenticated replaces the current session.
    pub fn login(&mut self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        if identifier.trim().is_empty() {
            return Err(AuthError::MissingIdentifier);
        }
        if secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let session = Session::from_identifier(identifier);
        if let AuthState::Authenticated(previous) = self {
            tracing::debug!("Replacing session for {} with {}", previous.email, session.email);
        }
        tracing::info!("Signed in as {}", session.email);
        *self = AuthState::Authenticated(session.clone());
        Ok(session)
    }

    /// Sign out. Does nothing if no one is signed in.
    pub fn logout(&mut self) {
        if let AuthState::Authenticated(session) = std::mem::take(self) {
            tracing::info!("Signed out {}", session.email);
        }
    }

    pub fn current_user(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}
