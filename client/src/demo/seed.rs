//! Embedded demo dataset.
//!
//! The internal team plus a handful of well-known external people, with the
//! organizations, roles and schools needed to produce realistic connectivity
//! results without a backend.

use serde::Deserialize;

/// A position in the seed file. `end: None` is the current role.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedOrg {
    pub name: String,
    pub slug: Option<String>,
    pub start: Option<i32>,
    pub end: Option<i32>,
    #[serde(default)]
    pub board: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedEducation {
    pub institution: String,
    pub degree: Option<String>,
    pub start: Option<i32>,
    pub end: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedPerson {
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub current_title: Option<String>,
    pub current_company: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub orgs: Vec<SeedOrg>,
    #[serde(default)]
    pub education: Vec<SeedEducation>,
}

/// Team members are seeded as internal, externals as external.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub team: Vec<SeedPerson>,
    #[serde(default)]
    pub externals: Vec<SeedPerson>,
}

impl SeedData {
    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(include_str!("../../data/demo_seed.json"))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
