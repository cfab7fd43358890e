//! Log file setup
//!
//! The TUI owns the screen, so tracing output goes to a file under the data
//! directory. The filter comes from `FOLIO_LOG`, then the configured level.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Default log file location.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("folio").join("folio.log"))
}

/// Filter from `FOLIO_LOG` if set and valid, else `level`, else `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directive) {
            return filter;
        }
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
///
/// Each run truncates the file. Calling this twice is an error from
/// `tracing-subscriber`, reported as such.
pub fn init(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_falls_back_to_info() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        assert_eq!(build_filter("folio=bogus").to_string(), "info");
        assert_eq!(build_filter("debug").to_string(), "debug");
    }

    #[test]
    fn default_path_is_under_folio_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("folio/folio.log"));
        }
    }
}
