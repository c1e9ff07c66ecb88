//! Wire models for the connectivity API.
//!
//! Field names match the backend's JSON (snake_case). Detail types embed
//! their summary with `#[serde(flatten)]`, so a `PersonDetail` reads and
//! writes the same flat object the backend produces.
//!
//! - [`PersonSummary`] / [`PersonDetail`] / [`PersonCreate`]
//! - [`OrgSummary`] / [`OrgDetail`] / [`OrgCreate`]
//! - [`RoleOut`] / [`RoleCreate`], [`EducationOut`] / [`EducationCreate`]
//! - [`Signal`], [`ConnectorResult`], [`ConnectivityResponse`]
//! - [`OverlapResult`], [`CompanyConnectivityResponse`]
//! - [`InteractionCreate`] / [`InteractionOut`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// People
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonSummary {
    pub id: i64,
    pub full_name: String,
    pub current_title: Option<String>,
    pub current_company: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_internal: bool,
}

/// A person with roles and education.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonDetail {
    #[serde(flatten)]
    pub summary: PersonSummary,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleOut>,
    #[serde(default)]
    pub education: Vec<EducationOut>,
}

impl PersonDetail {
    pub fn id(&self) -> i64 {
        self.summary.id
    }

    pub fn full_name(&self) -> &str {
        &self.summary.full_name
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonCreate {
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub current_title: Option<String>,
    pub current_company: Option<String>,
    #[serde(default)]
    pub is_internal: bool,
}

// =============================================================================
// Organizations
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrgSummary {
    pub id: i64,
    pub name: String,
    pub linkedin_slug: Option<String>,
    pub hq_location: Option<String>,
    pub industry: Option<String>,
    #[serde(default)]
    pub is_portfolio: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrgDetail {
    #[serde(flatten)]
    pub summary: OrgSummary,
    pub domain: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleOut>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrgCreate {
    pub name: String,
    pub linkedin_slug: Option<String>,
    pub domain: Option<String>,
    pub hq_location: Option<String>,
    pub industry: Option<String>,
    #[serde(default)]
    pub is_portfolio: bool,
}

// =============================================================================
// Roles & Education
// =============================================================================

/// A position held at an organization. `end_year: None` means current.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleOut {
    pub id: i64,
    pub org_id: i64,
    pub title: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    #[serde(default)]
    pub is_board: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub org_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleCreate {
    pub person_id: i64,
    pub org_name: String,
    pub title: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    #[serde(default)]
    pub is_board: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationOut {
    pub id: i64,
    pub institution: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationCreate {
    pub person_id: i64,
    pub institution: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

// =============================================================================
// Connectivity
// =============================================================================

/// Kind of evidence behind a [`Signal`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Company,
    Board,
    Education,
    Location,
    Interaction,
}

impl SignalKind {
    /// Display icon used by the backend for this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Company => "🏢",
            Self::Board => "🪑",
            Self::Education => "🎓",
            Self::Location => "📍",
            Self::Interaction => "🤝",
        }
    }
}

/// Connection strength bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Medium,
    Weak,
}

impl Strength {
    /// 40 and above is strong, 20 and above medium, anything lower weak.
    pub fn from_score(score: u32) -> Self {
        if score >= 40 {
            Self::Strong
        } else if score >= 20 {
            Self::Medium
        } else {
            Self::Weak
        }
    }
}

/// One piece of evidence that two people are connected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub label: String,
    pub detail: String,
    pub points: u32,
    pub icon: String,
}

impl Signal {
    pub fn new(kind: SignalKind, label: String, detail: String, points: u32) -> Self {
        Self {
            kind,
            label,
            detail,
            points,
            icon: kind.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectorResult {
    pub sp_member: PersonSummary,
    pub score: u32,
    pub strength: Strength,
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectivityResponse {
    pub target: PersonSummary,
    pub connectors: Vec<ConnectorResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlapResult {
    pub sp_member: PersonSummary,
    pub target_person: PersonSummary,
    pub score: u32,
    pub strength: Strength,
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyConnectivityResponse {
    pub org: OrgSummary,
    pub overlaps: Vec<OverlapResult>,
    pub total: usize,
}

// =============================================================================
// Interactions
// =============================================================================

fn default_interaction_type() -> String {
    "meeting".to_string()
}

/// A logged touchpoint between an internal and an external person.
///
/// `interaction_type` is one of email, meeting, call, event, linkedin.
/// `sentiment` ranges from -2 to 2.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionCreate {
    pub internal_person_id: i64,
    pub external_person_id: i64,
    #[serde(default = "default_interaction_type")]
    pub interaction_type: String,
    pub occurred_at: DateTime<Utc>,
    pub notes: Option<String>,
    #[serde(default)]
    pub sentiment: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionOut {
    pub id: i64,
    #[serde(flatten)]
    pub interaction: InteractionCreate,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
    pub version: String,
}
