//! Config migration
//!
//! Adds fields that exist in the current default config but are missing
//! from the user's file. Existing values, comments and ordering are kept.

use toml_edit::{DocumentMut, Item};

use super::{Config, ConfigError};

/// Outcome of a migration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateResult {
    /// The migrated file contents
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that were missing entirely
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Merge missing default fields into `content`.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            for (key, _) in default_table.iter() {
                added_fields.push(format!("{}.{}", section, key));
            }
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            continue;
        }

        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            tracing::warn!(section, "Config section is not a table, leaving it alone");
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
