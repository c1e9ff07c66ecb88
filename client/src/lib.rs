//! # RCP - relationship connectivity client
//!
//! Finds who on the internal team is best connected to an outside person or
//! company, talking to a connectivity backend or, when none is configured,
//! answering from a built-in demo dataset.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  empty base   ┌──────────────┐
//! │    Config    │──────────────▶│  DemoStore   │  (seed + scoring, no network)
//! │ RCP_API_BASE │               └──────────────┘
//! └──────┬───────┘
//!        │ base URL
//!        ▼
//! ┌──────────────┐  base + path  ┌──────────────┐
//! │ HttpBackend  │──────────────▶│   backend    │
//! └──────────────┘               └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rcp::{Config, RcpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RcpClient::new(Config::from_env()?)?;
//!     let people = client.list_people(Some("salesforce"), false).await?;
//!     println!("{} matches", people.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Base URL and client settings
//! - [`error`] - Error types
//! - [`models`] - Wire types
//! - [`api`] - Client and HTTP backend
//! - [`demo`] - Offline demo store
//! - [`scoring`] - Connectivity scoring
//! - [`linkedin`] - LinkedIn company URL helpers
//! - [`logs`] - Activity log

pub mod config;
pub mod error;
pub mod models;

pub mod api;
pub mod demo;
pub mod linkedin;
pub mod scoring;

pub mod logs;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ApiBase, Config, API_BASE_VAR};

pub use error::{ApiError, ClientError, ConfigError};

pub use models::{
    CompanyConnectivityResponse, ConnectivityResponse, ConnectorResult, EducationCreate,
    EducationOut, Health, InteractionCreate, InteractionOut, OrgCreate, OrgDetail, OrgSummary,
    OverlapResult, PersonCreate, PersonDetail, PersonSummary, RoleCreate, RoleOut, Signal,
    SignalKind, Strength,
};

pub use api::{HttpBackend, RcpClient};

pub use demo::DemoStore;

pub use scoring::compute_connectivity;
