//! Active profile store
//!
//! Tracks which profile is active, both in memory (the current type flag) and
//! in persisted state (active key plus a JSON snapshot of the record). One
//! store is constructed per application context and passed by reference to
//! the terminal and the portfolio views.

use super::error::ProfileError;
use super::key::{infer_type, short_key, ProfileType};
use super::registry::{ProfileId, ProfileRegistry};
use super::PortfolioProfile;
use crate::storage::{StateStore, StorageError};

/// Persisted state key holding the active profile key.
pub const ACTIVE_PROFILE_KEY: &str = "activeProfileKey";

/// Persisted state key holding the JSON snapshot of the active profile.
pub const ACTIVE_PROFILE_SNAPSHOT: &str = "activeProfileSnapshot";

/// Key reported when nothing has been selected yet.
pub const DEFAULT_PROFILE_KEY: &str = "sujit-developer";

/// Registry lookups plus the persisted active selection.
pub struct ProfileStore {
    registry: ProfileRegistry,
    storage: Box<dyn StateStore>,
    current_type: ProfileType,
    fallback_developer: PortfolioProfile,
    fallback_qa: PortfolioProfile,
}

impl ProfileStore {
    /// Create a store over `registry`, persisting into `storage`.
    ///
    /// The registry must hold at least one profile of each type.
    pub fn new(
        registry: ProfileRegistry,
        storage: Box<dyn StateStore>,
    ) -> Result<Self, ProfileError> {
        let fallback = |ty: ProfileType| {
            registry
                .default_for(ty)
                .cloned()
                .ok_or_else(|| ProfileError::NoDefault(ty))
        };
        let fallback_developer = fallback(ProfileType::Developer)?;
        let fallback_qa = fallback(ProfileType::Qa)?;

        Ok(Self {
            registry,
            storage,
            current_type: ProfileType::default(),
            fallback_developer,
            fallback_qa,
        })
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn storage(&self) -> &dyn StateStore {
        self.storage.as_ref()
    }

    pub fn has_profile(&self, key: &str) -> bool {
        self.registry.contains(key)
    }

    pub fn get_profile(&self, key: &str) -> Option<&PortfolioProfile> {
        self.registry.get(key)
    }

    pub fn list_profiles(&self) -> Vec<ProfileId> {
        self.registry.list()
    }

    /// Short-form keys of every registered profile, e.g. `sujit-dev`.
    pub fn short_keys(&self) -> Vec<String> {
        self.list_profiles()
            .iter()
            .map(|id| short_key(&id.key))
            .collect()
    }

    /// Look up a profile, turning a miss into a listing of what exists.
    pub fn require(&self, key: &str) -> Result<&PortfolioProfile, ProfileError> {
        self.registry.get(key).ok_or_else(|| ProfileError::NotFound {
            key: key.to_string(),
            available: self.short_keys(),
        })
    }

    pub fn current_type(&self) -> ProfileType {
        self.current_type
    }

    pub fn set_current_type(&mut self, profile_type: ProfileType) {
        self.current_type = profile_type;
    }

    /// Persist `key` and its snapshot as the active selection.
    ///
    /// Without an explicit `profile` the record is taken from the registry.
    /// An unknown key with no explicit record leaves storage untouched.
    pub fn set_active(
        &mut self,
        key: &str,
        profile: Option<&PortfolioProfile>,
    ) -> Result<(), StorageError> {
        let Some(profile) = profile.or_else(|| self.registry.get(key)) else {
            tracing::debug!(key, "Ignoring activation of unknown profile");
            return Ok(());
        };

        // Snapshot first: a failed key write must not pair the old key with
        // the new record.
        let snapshot = serde_json::to_string(profile)?;
        self.storage.set(ACTIVE_PROFILE_SNAPSHOT, &snapshot)?;
        if let Err(e) = self.storage.set(ACTIVE_PROFILE_KEY, key) {
            let _ = self.storage.remove(ACTIVE_PROFILE_SNAPSHOT);
            return Err(e);
        }
        self.current_type = infer_type(key);

        tracing::info!(key, profile_type = %self.current_type, "Activated profile");
        Ok(())
    }

    /// Persisted active key, or [`DEFAULT_PROFILE_KEY`] when none is stored.
    pub fn active_key(&self) -> String {
        self.persisted_key()
            .unwrap_or_else(|| DEFAULT_PROFILE_KEY.to_string())
    }

    /// Resolve the profile to render.
    ///
    /// Precedence:
    /// 1. `key`, when given and registered
    /// 2. the persisted key (only when no `profile_type` is given): its
    ///    snapshot if that parses and the key's type matches the current
    ///    type, otherwise its registry record
    /// 3. the default profile of `profile_type`
    /// 4. the default profile of the current type
    pub fn active_profile(
        &self,
        key: Option<&str>,
        profile_type: Option<ProfileType>,
    ) -> PortfolioProfile {
        if let Some(profile) = key.and_then(|k| self.registry.get(k)) {
            return profile.clone();
        }

        if profile_type.is_none() {
            if let Some(persisted) = self.persisted_key() {
                if infer_type(&persisted) == self.current_type {
                    if let Some(snapshot) = self.snapshot() {
                        return snapshot;
                    }
                }
                if let Some(profile) = self.registry.get(&persisted) {
                    return profile.clone();
                }
            }
        }

        self.default_profile(profile_type.unwrap_or(self.current_type))
            .clone()
    }

    /// Remove the persisted selection and reset the current type.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(ACTIVE_PROFILE_KEY)?;
        self.storage.remove(ACTIVE_PROFILE_SNAPSHOT)?;
        self.current_type = ProfileType::default();
        tracing::debug!("Cleared active profile");
        Ok(())
    }

    /// Make sure the active selection is of `profile_type`.
    ///
    /// A matching active key is re-asserted; anything else is cleared and
    /// replaced by the type's default profile. Returns the resulting key.
    pub fn ensure_type(&mut self, profile_type: ProfileType) -> Result<String, StorageError> {
        let key = self.active_key();
        let key = if infer_type(&key) == profile_type {
            self.set_active(&key, None)?;
            key
        } else {
            self.clear()?;
            let default_key = self
                .registry
                .default_key_for(profile_type)
                .unwrap_or(DEFAULT_PROFILE_KEY)
                .to_string();
            self.set_active(&default_key, None)?;
            default_key
        };
        self.current_type = profile_type;
        Ok(key)
    }

    fn default_profile(&self, profile_type: ProfileType) -> &PortfolioProfile {
        match profile_type {
            ProfileType::Developer => &self.fallback_developer,
            ProfileType::Qa => &self.fallback_qa,
        }
    }

    fn persisted_key(&self) -> Option<String> {
        match self.storage.get(ACTIVE_PROFILE_KEY) {
            Ok(key) => key.filter(|k| !k.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read active profile key");
                None
            }
        }
    }

    /// Persisted snapshot, `None` when absent or not a valid record.
    fn snapshot(&self) -> Option<PortfolioProfile> {
        let raw = match self.storage.get(ACTIVE_PROFILE_SNAPSHOT) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read profile snapshot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed profile snapshot");
                None
            }
        }
    }
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("profiles", &self.registry.list().len())
            .field("current_type", &self.current_type)
            .finish()
    }
}
