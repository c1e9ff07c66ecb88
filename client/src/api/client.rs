//! The client used by application code.
//!
//! `RcpClient` picks its backend once, from the configuration it is built
//! with: an empty base URL selects the in-memory demo store, anything else
//! the HTTP backend. There is no way to switch afterwards.

use chrono::Utc;
use tokio::sync::RwLock;

use super::http::HttpBackend;
use crate::config::Config;
use crate::demo::DemoStore;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    CompanyConnectivityResponse, ConnectivityResponse, EducationCreate, EducationOut, Health,
    InteractionCreate, InteractionOut, OrgCreate, OrgDetail, OrgSummary, PersonCreate,
    PersonDetail, PersonSummary, RoleCreate, RoleOut,
};

/// Version reported by the demo backend's health check.
const DEMO_VERSION: &str = env!("CARGO_PKG_VERSION");

enum Backend {
    Http(HttpBackend),
    Demo(RwLock<DemoStore>),
}

/// Typed client for the connectivity API.
pub struct RcpClient {
    config: Config,
    backend: Backend,
}

impl RcpClient {
    pub fn new(config: Config) -> ApiResult<Self> {
        let backend = if config.is_demo() {
            let store = DemoStore::seeded()
                .map_err(|e| ApiError::InvalidResponse(format!("demo dataset: {}", e)))?;
            Backend::Demo(RwLock::new(store))
        } else {
            Backend::Http(HttpBackend::new(&config)?)
        };

        Ok(Self { config, backend })
    }

    /// Demo client over a caller-provided store.
    pub fn with_demo_store(store: DemoStore) -> Self {
        Self {
            config: Config::default(),
            backend: Backend::Demo(RwLock::new(store)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.backend, Backend::Demo(_))
    }

    /// HTTP requests issued so far. Always zero in demo mode.
    pub fn requests_sent(&self) -> usize {
        match &self.backend {
            Backend::Http(http) => http.requests_sent(),
            Backend::Demo(_) => 0,
        }
    }

    // =========================================================================
    // Health
    // =========================================================================

    pub async fn health(&self) -> ApiResult<Health> {
        match &self.backend {
            Backend::Http(http) => http.get("/api/health", &[]).await,
            Backend::Demo(_) => Ok(Health {
                status: "ok".to_string(),
                version: DEMO_VERSION.to_string(),
            }),
        }
    }

    // =========================================================================
    // People
    // =========================================================================

    pub async fn list_people(
        &self,
        q: Option<&str>,
        internal_only: bool,
    ) -> ApiResult<Vec<PersonSummary>> {
        match &self.backend {
            Backend::Http(http) => {
                let mut query = Vec::new();
                if let Some(q) = q {
                    query.push(("q", q.to_string()));
                }
                if internal_only {
                    query.push(("internal_only", "true".to_string()));
                }
                http.get("/api/people", &query).await
            }
            Backend::Demo(store) => Ok(store.read().await.list_people(q, internal_only)),
        }
    }

    pub async fn get_person(&self, id: i64) -> ApiResult<PersonDetail> {
        match &self.backend {
            Backend::Http(http) => http.get(&format!("/api/people/{}", id), &[]).await,
            Backend::Demo(store) => store.read().await.get_person(id),
        }
    }

    pub async fn create_person(&self, person: &PersonCreate) -> ApiResult<PersonDetail> {
        match &self.backend {
            Backend::Http(http) => http.post("/api/people", person).await,
            Backend::Demo(store) => Ok(store.write().await.create_person(person.clone())),
        }
    }

    // =========================================================================
    // Organizations
    // =========================================================================

    pub async fn list_orgs(&self, q: Option<&str>) -> ApiResult<Vec<OrgSummary>> {
        match &self.backend {
            Backend::Http(http) => {
                let query: Vec<_> = q.map(|q| ("q", q.to_string())).into_iter().collect();
                http.get("/api/orgs", &query).await
            }
            Backend::Demo(store) => Ok(store.read().await.list_orgs(q)),
        }
    }

    pub async fn get_org(&self, id: i64) -> ApiResult<OrgDetail> {
        match &self.backend {
            Backend::Http(http) => http.get(&format!("/api/orgs/{}", id), &[]).await,
            Backend::Demo(store) => store.read().await.get_org(id),
        }
    }

    pub async fn create_org(&self, org: &OrgCreate) -> ApiResult<OrgSummary> {
        match &self.backend {
            Backend::Http(http) => http.post("/api/orgs", org).await,
            Backend::Demo(store) => store.write().await.create_org(org.clone()),
        }
    }

    // =========================================================================
    // Connectivity
    // =========================================================================

    /// Internal team members connected to a person, strongest first.
    pub async fn connectivity(&self, target_id: i64) -> ApiResult<ConnectivityResponse> {
        match &self.backend {
            Backend::Http(http) => {
                http.get("/api/connectivity", &[("target_id", target_id.to_string())])
                    .await
            }
            Backend::Demo(store) => store
                .read()
                .await
                .connectivity(target_id, Utc::now().date_naive()),
        }
    }

    /// Team overlaps with everyone at a company, by LinkedIn slug.
    pub async fn company_connectivity(
        &self,
        linkedin_slug: &str,
    ) -> ApiResult<CompanyConnectivityResponse> {
        match &self.backend {
            Backend::Http(http) => {
                http.get(
                    "/api/connectivity/company",
                    &[("linkedin_slug", linkedin_slug.to_string())],
                )
                .await
            }
            Backend::Demo(store) => store
                .read()
                .await
                .company_connectivity(linkedin_slug, Utc::now().date_naive()),
        }
    }

    // =========================================================================
    // Roles & Education
    // =========================================================================

    pub async fn create_role(&self, role: &RoleCreate) -> ApiResult<RoleOut> {
        match &self.backend {
            Backend::Http(http) => http.post("/api/roles", role).await,
            Backend::Demo(store) => store.write().await.create_role(role.clone()),
        }
    }

    pub async fn create_education(&self, education: &EducationCreate) -> ApiResult<EducationOut> {
        match &self.backend {
            Backend::Http(http) => http.post("/api/education", education).await,
            Backend::Demo(store) => store.write().await.create_education(education.clone()),
        }
    }

    // =========================================================================
    // Interactions
    // =========================================================================

    pub async fn list_interactions(
        &self,
        person_id: Option<i64>,
    ) -> ApiResult<Vec<InteractionOut>> {
        match &self.backend {
            Backend::Http(http) => {
                let query: Vec<_> = person_id
                    .map(|id| ("person_id", id.to_string()))
                    .into_iter()
                    .collect();
                http.get("/api/interactions", &query).await
            }
            Backend::Demo(store) => Ok(store.read().await.list_interactions(person_id)),
        }
    }

    pub async fn create_interaction(
        &self,
        interaction: &InteractionCreate,
    ) -> ApiResult<InteractionOut> {
        match &self.backend {
            Backend::Http(http) => http.post("/api/interactions", interaction).await,
            Backend::Demo(store) => store
                .write()
                .await
                .create_interaction(interaction.clone(), Utc::now()),
        }
    }
}
