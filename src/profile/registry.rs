//! Built-in profile registry
//!
//! The registry is parsed once from the embedded `data/profiles.toml` and is
//! immutable afterwards. Listing order is the order of the data file.

use serde::Deserialize;

use super::error::ProfileError;
use super::key::{infer_type, ProfileType};
use super::PortfolioProfile;

/// Embedded profile data.
const BUILTIN_PROFILES: &str = include_str!("../../data/profiles.toml");

/// Public identity of a registered profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileId {
    /// Short owner name, e.g. `sujit`
    pub name: String,
    pub profile_type: ProfileType,
    /// Full key, e.g. `sujit-developer`
    pub key: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    profile: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryEntry {
    key: String,
    name: String,
    #[serde(rename = "type")]
    profile_type: ProfileType,
    record: PortfolioProfile,
}

/// Immutable, ordered map from profile key to record.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    entries: Vec<(ProfileId, PortfolioProfile)>,
}

impl ProfileRegistry {
    /// Load the profiles compiled into the binary.
    pub fn builtin() -> Result<Self, ProfileError> {
        Self::from_toml(BUILTIN_PROFILES)
    }

    /// Parse a registry from TOML source.
    ///
    /// Rejects entries whose declared type disagrees with their key suffix.
    pub fn from_toml(source: &str) -> Result<Self, ProfileError> {
        let file: RegistryFile = toml::from_str(source)?;
        let mut entries = Vec::with_capacity(file.profile.len());

        for entry in file.profile {
            let inferred = infer_type(&entry.key);
            if inferred != entry.profile_type {
                return Err(ProfileError::TypeMismatch {
                    key: entry.key,
                    declared: entry.profile_type,
                    inferred,
                });
            }
            let id = ProfileId {
                name: entry.name,
                profile_type: entry.profile_type,
                key: entry.key,
            };
            entries.push((id, entry.record));
        }

        Ok(Self { entries })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(id, _)| id.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&PortfolioProfile> {
        self.entries
            .iter()
            .find(|(id, _)| id.key == key)
            .map(|(_, profile)| profile)
    }

    /// Registered profiles in their fixed listing order.
    pub fn list(&self) -> Vec<ProfileId> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Key of the first registered profile of the given type.
    pub fn default_key_for(&self, profile_type: ProfileType) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id.profile_type == profile_type)
            .map(|(id, _)| id.key.as_str())
    }

    /// First registered profile of the given type.
    pub fn default_for(&self, profile_type: ProfileType) -> Option<&PortfolioProfile> {
        self.default_key_for(profile_type).and_then(|key| self.get(key))
    }
}
