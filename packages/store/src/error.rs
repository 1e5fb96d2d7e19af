use thiserror::Error;

/// Reasons a login attempt is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter your email address")]
    MissingIdentifier,
    #[error("Please enter your password")]
    MissingSecret,
}

/// Failure to load the bundled seed document.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed document: {0}")]
    Parse(#[from] toml::de::Error),
}
