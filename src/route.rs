//! Views and the guards that run when entering them.

use std::fmt;

use crate::profile::key::QA_MARKER;
use crate::profile::{PortfolioProfile, ProfileStore, ProfileType};
use crate::storage::StorageError;

/// A full-screen view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The interactive terminal landing
    Terminal,
    DeveloperPortfolio,
    QaPortfolio,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Terminal => "/",
            Route::DeveloperPortfolio => "/portfolio-dev",
            Route::QaPortfolio => "/portfolio-qa",
        }
    }

    /// Resolve a path. `/portfolio` is the old developer path; anything
    /// unknown lands on the terminal.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/portfolio-dev" | "/portfolio" => Route::DeveloperPortfolio,
            "/portfolio-qa" => Route::QaPortfolio,
            _ => Route::Terminal,
        }
    }

    /// Portfolio view for a profile key, chosen by the QA marker.
    pub fn for_key(key: &str) -> Self {
        if key.contains(QA_MARKER) {
            Route::QaPortfolio
        } else {
            Route::DeveloperPortfolio
        }
    }

    /// Profile type a portfolio view renders.
    pub fn profile_type(&self) -> Option<ProfileType> {
        match self {
            Route::Terminal => None,
            Route::DeveloperPortfolio => Some(ProfileType::Developer),
            Route::QaPortfolio => Some(ProfileType::Qa),
        }
    }

    /// Prepare the store for this view.
    ///
    /// Portfolio views make sure the active profile matches their type. The
    /// terminal starts from a clean slate. Returns the active key afterwards,
    /// `None` for the terminal.
    pub fn enter(&self, store: &mut ProfileStore) -> Result<Option<String>, StorageError> {
        match self.profile_type() {
            Some(profile_type) => {
                let key = store.ensure_type(profile_type)?;
                tracing::info!(route = %self, key = %key, "Entered portfolio view");
                Ok(Some(key))
            }
            None => {
                store.clear()?;
                tracing::info!(route = %self, "Entered terminal");
                Ok(None)
            }
        }
    }

    /// Enter a portfolio view and resolve the profile it shows.
    ///
    /// A storage failure in the guard is logged and the view falls back to
    /// the default profile of its type. `None` for the terminal.
    pub fn open_page(&self, store: &mut ProfileStore) -> Option<PortfolioProfile> {
        let profile_type = self.profile_type()?;
        match self.enter(store) {
            Ok(_) => Some(store.active_profile(None, None)),
            Err(e) => {
                tracing::warn!(route = %self, error = %e, "Page guard failed, using default profile");
                store.set_current_type(profile_type);
                Some(store.active_profile(None, Some(profile_type)))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileRegistry;
    use crate::storage::MemoryStore;

    fn store() -> ProfileStore {
        ProfileStore::new(
            ProfileRegistry::builtin().unwrap(),
            Box::new(MemoryStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Terminal);
        assert_eq!(Route::from_path("/portfolio-dev"), Route::DeveloperPortfolio);
        assert_eq!(Route::from_path("/portfolio-qa/"), Route::QaPortfolio);
        assert_eq!(Route::from_path("/portfolio"), Route::DeveloperPortfolio);
        assert_eq!(Route::from_path("/nowhere"), Route::Terminal);
    }

    #[test]
    fn for_key_uses_qa_marker() {
        assert_eq!(Route::for_key("mona-qa"), Route::QaPortfolio);
        assert_eq!(Route::for_key("sujit-developer"), Route::DeveloperPortfolio);
    }

    #[test]
    fn entering_qa_view_with_developer_selection_switches_to_default_qa() {
        let mut store = store();
        store.set_active("sujit-developer", None).unwrap();

        let key = Route::QaPortfolio.enter(&mut store).unwrap();
        assert_eq!(key.as_deref(), Some("mona-qa"));
        assert_eq!(store.active_profile(None, None).name, "Monalisha Biswal");
    }

    #[test]
    fn entering_developer_view_keeps_developer_selection() {
        let mut store = store();
        store.set_active("sujit-developer", None).unwrap();

        let key = Route::DeveloperPortfolio.enter(&mut store).unwrap();
        assert_eq!(key.as_deref(), Some("sujit-developer"));
    }

    #[test]
    fn entering_terminal_clears_selection() {
        let mut store = store();
        store.set_active("mona-qa", None).unwrap();

        assert_eq!(Route::Terminal.enter(&mut store).unwrap(), None);
        assert!(store.storage().is_empty());
        assert_eq!(store.current_type(), ProfileType::Developer);
    }

    #[test]
    fn open_page_resolves_profile_of_view_type() {
        let mut store = store();
        store.set_active("mona-qa", None).unwrap();

        let profile = Route::DeveloperPortfolio.open_page(&mut store).unwrap();
        assert_eq!(profile.name, "Sujit Kumar Patra");
        assert_eq!(store.active_key(), "sujit-developer");
        assert!(Route::Terminal.open_page(&mut store).is_none());
    }
}
