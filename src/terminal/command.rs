//! Prompt command grammar.
//!
//! Matching is case-insensitive. Profile commands take the form
//! `<name>-<developer|dev|qa>` or the older `portfolio-<name>-<type>`.

use crate::profile::key::build_key;
use crate::profile::ProfileType;

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a named profile
    LoadProfile {
        name: String,
        profile_type: ProfileType,
    },
    /// Load the default profile
    FetchPortfolio,
    Help,
    Clear,
    Exit,
    /// Anything else, as typed
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let lowered = input.to_lowercase();

        if let Some((name, profile_type)) = parse_profile(&lowered) {
            return Command::LoadProfile { name, profile_type };
        }

        match lowered.as_str() {
            "fetch-portfolio" => Command::FetchPortfolio,
            "help" => Command::Help,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            _ => Command::Unknown(input.to_string()),
        }
    }

    /// Registry key a profile command refers to.
    pub fn profile_key(&self) -> Option<String> {
        match self {
            Command::LoadProfile { name, profile_type } => Some(build_key(name, *profile_type)),
            _ => None,
        }
    }
}

fn parse_profile(lowered: &str) -> Option<(String, ProfileType)> {
    let parts: Vec<&str> = lowered.split('-').collect();
    let (name, ty) = match parts.as_slice() {
        [name, ty] => (*name, *ty),
        ["portfolio", name, ty] => (*name, *ty),
        _ => return None,
    };

    if !is_word(name) || !matches!(ty, "developer" | "dev" | "qa") {
        return None;
    }
    let profile_type = ty.parse().ok()?;
    Some((name.to_string(), profile_type))
}

/// One or more ASCII letters, digits or underscores.
fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
