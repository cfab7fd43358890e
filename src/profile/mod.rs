//! Portfolio profiles
//!
//! Typed portfolio records, the built-in registry they are looked up in, and
//! the `ProfileStore` that tracks which profile is active and mirrors that
//! choice into persisted state.
//!
//! Every record crosses the storage boundary through serde with
//! `deny_unknown_fields`: a snapshot either deserializes into exactly this
//! shape or it is rejected.

mod error;
pub mod key;
mod registry;
mod store;

pub use error::ProfileError;
pub use key::{full_key, infer_type, short_key, ProfileType};
pub use registry::{ProfileId, ProfileRegistry};
pub use store::{ProfileStore, ACTIVE_PROFILE_KEY, ACTIVE_PROFILE_SNAPSHOT, DEFAULT_PROFILE_KEY};

use serde::{Deserialize, Serialize};

/// A complete portfolio record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub portfolio_items: Vec<PortfolioItem>,
    pub social_links: Vec<SocialLink>,
    pub contact: Contact,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkExperience {
    pub id: u32,
    pub company: String,
    pub role: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`; `None` means the position is current
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A project shown in the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub role: String,
    pub category: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl PortfolioProfile {
    /// Technologies across all positions, first occurrence wins, capped at `limit`.
    pub fn unique_technologies(&self, limit: usize) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tech in self.work_experience.iter().flat_map(|exp| &exp.technologies) {
            if seen.len() >= limit {
                break;
            }
            if !seen.contains(tech) {
                seen.push(tech.clone());
            }
        }
        seen
    }

    /// Distinct project categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.portfolio_items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }
}
