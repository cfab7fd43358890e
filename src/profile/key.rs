//! Profile keys
//!
//! A profile key is `<name>-<type>`, e.g. `sujit-developer` or `mona-qa`.
//! The type is always recoverable from the key suffix: anything carrying the
//! `-qa` marker is a QA profile, everything else is a developer profile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker that identifies a QA profile key.
pub const QA_MARKER: &str = "-qa";

/// The two presentation flavours a profile can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Developer,
    Qa,
}

impl ProfileType {
    /// Canonical spelling used inside profile keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Developer => "developer",
            ProfileType::Qa => "qa",
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileType {
    type Err = String;

    /// Accepts `developer`, the `dev` shorthand, and `qa` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "developer" | "dev" => Ok(ProfileType::Developer),
            "qa" => Ok(ProfileType::Qa),
            other => Err(format!("unknown profile type: {}", other)),
        }
    }
}

/// Infer the profile type from a key's suffix.
pub fn infer_type(key: &str) -> ProfileType {
    if key.contains(QA_MARKER) {
        ProfileType::Qa
    } else {
        ProfileType::Developer
    }
}

/// Build the canonical key for a name and type.
pub fn build_key(name: &str, profile_type: ProfileType) -> String {
    format!("{}-{}", name, profile_type)
}

/// Short form shown to users: `sujit-developer` becomes `sujit-dev`.
pub fn short_key(key: &str) -> String {
    key.replace("-developer", "-dev")
}

/// Canonical key for user input that may use the short form.
pub fn full_key(key: &str) -> String {
    let key = key.trim().to_ascii_lowercase();
    match key.strip_suffix("-dev") {
        Some(name) => build_key(name, ProfileType::Developer),
        None => key,
    }
}
