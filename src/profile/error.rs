//! Profile lookup errors.

/// Errors from profile lookups and the built-in registry.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Portfolio not found for {key}. Available profiles: {}", available.join(", "))]
    NotFound { key: String, available: Vec<String> },

    #[error("Built-in profile data is invalid: {0}")]
    InvalidRegistry(#[from] toml::de::Error),

    #[error("No registered profile of type {0}")]
    NoDefault(super::ProfileType),

    #[error("Profile '{key}' is declared as {declared} but its key implies {inferred}")]
    TypeMismatch {
        key: String,
        declared: super::ProfileType,
        inferred: super::ProfileType,
    },
}
