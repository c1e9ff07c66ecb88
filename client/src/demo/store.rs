//! In-memory store answering API calls in demo mode.
//!
//! Mirrors the backend's query rules (search, ordering, limits, not-found
//! cases) so that a client without a backend behaves like one with it.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

use super::seed::{SeedData, SeedPerson};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    CompanyConnectivityResponse, ConnectivityResponse, EducationCreate, EducationOut,
    InteractionCreate, InteractionOut, OrgCreate, OrgDetail, OrgSummary, OverlapResult,
    PersonCreate, PersonDetail, PersonSummary, RoleCreate, RoleOut,
};
use crate::scoring::compute_connectivity;

/// Maximum rows returned by people and organization searches.
pub const SEARCH_LIMIT: usize = 50;

/// Maximum rows returned by the interaction log.
pub const INTERACTION_LIMIT: usize = 100;

#[derive(Debug, Clone)]
struct PersonRecord {
    id: i64,
    data: PersonCreate,
}

#[derive(Debug, Clone)]
struct OrgRecord {
    id: i64,
    data: OrgCreate,
}

#[derive(Debug, Clone)]
struct RoleRecord {
    id: i64,
    person_id: i64,
    org_id: i64,
    title: Option<String>,
    start_year: Option<i32>,
    end_year: Option<i32>,
    is_board: bool,
    is_current: bool,
}

#[derive(Debug, Clone)]
struct EducationRecord {
    person_id: i64,
    education: EducationOut,
}

/// Demo dataset with backend-equivalent operations.
#[derive(Debug, Clone, Default)]
pub struct DemoStore {
    people: Vec<PersonRecord>,
    orgs: Vec<OrgRecord>,
    roles: Vec<RoleRecord>,
    education: Vec<EducationRecord>,
    interactions: Vec<InteractionOut>,
}

impl DemoStore {
    /// Store loaded with the embedded dataset.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        Ok(Self::from_seed(&SeedData::embedded()?))
    }

    pub fn from_seed(seed: &SeedData) -> Self {
        let mut store = Self::default();
        for person in &seed.team {
            store.seed_person(person, true);
        }
        for person in &seed.externals {
            store.seed_person(person, false);
        }
        store
    }

    fn seed_person(&mut self, seed: &SeedPerson, is_internal: bool) {
        let already_seeded = seed.linkedin_url.is_some()
            && self
                .people
                .iter()
                .any(|p| p.data.linkedin_url == seed.linkedin_url);
        if already_seeded {
            return;
        }

        let person_id = next_id(self.people.iter().map(|p| p.id));
        self.people.push(PersonRecord {
            id: person_id,
            data: PersonCreate {
                full_name: seed.full_name.clone(),
                first_name: seed.first_name.clone(),
                last_name: seed.last_name.clone(),
                linkedin_url: seed.linkedin_url.clone(),
                location: seed.location.clone(),
                current_title: seed.current_title.clone(),
                current_company: seed.current_company.clone(),
                is_internal,
                ..PersonCreate::default()
            },
        });

        for org in &seed.orgs {
            let existing = self.orgs.iter().find(|o| o.data.name == org.name).map(|o| o.id);
            let org_id = match existing {
                Some(id) => id,
                None => {
                    self.insert_org(OrgCreate {
                        name: org.name.clone(),
                        linkedin_slug: org.slug.clone(),
                        ..OrgCreate::default()
                    })
                    .id
                }
            };

            let is_current = org.end.is_none();
            self.roles.push(RoleRecord {
                id: next_id(self.roles.iter().map(|r| r.id)),
                person_id,
                org_id,
                title: if is_current { seed.current_title.clone() } else { None },
                start_year: org.start,
                end_year: org.end,
                is_board: org.board,
                is_current,
            });
        }

        for edu in &seed.education {
            let id = next_id(self.education.iter().map(|e| e.education.id));
            self.education.push(EducationRecord {
                person_id,
                education: EducationOut {
                    id,
                    institution: edu.institution.clone(),
                    degree: edu.degree.clone(),
                    field: None,
                    start_year: edu.start,
                    end_year: edu.end,
                },
            });
        }
    }

    fn insert_org(&mut self, data: OrgCreate) -> &OrgRecord {
        let id = next_id(self.orgs.iter().map(|o| o.id));
        self.orgs.push(OrgRecord { id, data });
        &self.orgs[self.orgs.len() - 1]
    }

    // =========================================================================
    // Views
    // =========================================================================

    fn person(&self, id: i64) -> Option<&PersonRecord> {
        self.people.iter().find(|p| p.id == id)
    }

    fn summary(record: &PersonRecord) -> PersonSummary {
        PersonSummary {
            id: record.id,
            full_name: record.data.full_name.clone(),
            current_title: record.data.current_title.clone(),
            current_company: record.data.current_company.clone(),
            location: record.data.location.clone(),
            linkedin_url: record.data.linkedin_url.clone(),
            is_internal: record.data.is_internal,
        }
    }

    fn detail(&self, record: &PersonRecord) -> PersonDetail {
        PersonDetail {
            summary: Self::summary(record),
            email: record.data.email.clone(),
            bio: record.data.bio.clone(),
            photo_url: None,
            roles: self
                .roles
                .iter()
                .filter(|r| r.person_id == record.id)
                .map(|r| self.role_out(r))
                .collect(),
            education: self
                .education
                .iter()
                .filter(|e| e.person_id == record.id)
                .map(|e| e.education.clone())
                .collect(),
        }
    }

    fn org_summary(record: &OrgRecord) -> OrgSummary {
        OrgSummary {
            id: record.id,
            name: record.data.name.clone(),
            linkedin_slug: record.data.linkedin_slug.clone(),
            hq_location: record.data.hq_location.clone(),
            industry: record.data.industry.clone(),
            is_portfolio: record.data.is_portfolio,
        }
    }

    fn role_out(&self, role: &RoleRecord) -> RoleOut {
        RoleOut {
            id: role.id,
            org_id: role.org_id,
            title: role.title.clone(),
            start_year: role.start_year,
            end_year: role.end_year,
            is_board: role.is_board,
            is_current: role.is_current,
            org_name: self
                .orgs
                .iter()
                .find(|o| o.id == role.org_id)
                .map(|o| o.data.name.clone()),
        }
    }

    fn internal_members(&self) -> Vec<PersonDetail> {
        self.people
            .iter()
            .filter(|p| p.data.is_internal)
            .map(|p| self.detail(p))
            .collect()
    }

    // =========================================================================
    // People
    // =========================================================================

    /// Case-insensitive search on name or current company, ordered by name.
    pub fn list_people(&self, q: Option<&str>, internal_only: bool) -> Vec<PersonSummary> {
        let needle = q.filter(|q| !q.is_empty()).map(str::to_lowercase);

        let mut matches: Vec<&PersonRecord> = self
            .people
            .iter()
            .filter(|p| !internal_only || p.data.is_internal)
            .filter(|p| match &needle {
                None => true,
                Some(n) => {
                    contains_ci(Some(p.data.full_name.as_str()), n)
                        || contains_ci(p.data.current_company.as_deref(), n)
                }
            })
            .collect();
        matches.sort_by(|a, b| a.data.full_name.cmp(&b.data.full_name));

        matches.into_iter().take(SEARCH_LIMIT).map(Self::summary).collect()
    }

    pub fn get_person(&self, id: i64) -> ApiResult<PersonDetail> {
        self.person(id)
            .map(|p| self.detail(p))
            .ok_or_else(|| ApiError::NotFound("Person not found".to_string()))
    }

    pub fn create_person(&mut self, data: PersonCreate) -> PersonDetail {
        let id = next_id(self.people.iter().map(|p| p.id));
        let record = PersonRecord { id, data };
        let detail = self.detail(&record);
        self.people.push(record);
        detail
    }

    // =========================================================================
    // Organizations
    // =========================================================================

    pub fn list_orgs(&self, q: Option<&str>) -> Vec<OrgSummary> {
        let needle = q.filter(|q| !q.is_empty()).map(str::to_lowercase);

        let mut matches: Vec<&OrgRecord> = self
            .orgs
            .iter()
            .filter(|o| {
                needle
                    .as_ref()
                    .map_or(true, |n| contains_ci(Some(o.data.name.as_str()), n))
            })
            .collect();
        matches.sort_by(|a, b| a.data.name.cmp(&b.data.name));

        matches.into_iter().take(SEARCH_LIMIT).map(Self::org_summary).collect()
    }

    pub fn get_org(&self, id: i64) -> ApiResult<OrgDetail> {
        let org = self
            .orgs
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ApiError::NotFound("Organization not found".to_string()))?;

        Ok(OrgDetail {
            summary: Self::org_summary(org),
            domain: org.data.domain.clone(),
            roles: self
                .roles
                .iter()
                .filter(|r| r.org_id == id)
                .map(|r| self.role_out(r))
                .collect(),
        })
    }

    /// LinkedIn slugs are unique across organizations.
    pub fn create_org(&mut self, data: OrgCreate) -> ApiResult<OrgSummary> {
        if let Some(slug) = data.linkedin_slug.as_deref() {
            if self
                .orgs
                .iter()
                .any(|o| o.data.linkedin_slug.as_deref() == Some(slug))
            {
                return Err(ApiError::InvalidInput(format!(
                    "an organization with LinkedIn slug '{}' already exists",
                    slug
                )));
            }
        }
        Ok(Self::org_summary(self.insert_org(data)))
    }

    // =========================================================================
    // Roles & Education
    // =========================================================================

    /// Add a role, creating the organization if no name matches
    /// case-insensitively.
    pub fn create_role(&mut self, role: RoleCreate) -> ApiResult<RoleOut> {
        if self.person(role.person_id).is_none() {
            return Err(ApiError::NotFound("Person not found".to_string()));
        }

        let wanted = role.org_name.to_lowercase();
        let existing = self
            .orgs
            .iter()
            .find(|o| o.data.name.to_lowercase() == wanted)
            .map(|o| o.id);
        let org_id = match existing {
            Some(id) => id,
            None => {
                self.insert_org(OrgCreate {
                    name: role.org_name.clone(),
                    ..OrgCreate::default()
                })
                .id
            }
        };

        let record = RoleRecord {
            id: next_id(self.roles.iter().map(|r| r.id)),
            person_id: role.person_id,
            org_id,
            title: role.title,
            start_year: role.start_year,
            end_year: role.end_year,
            is_board: role.is_board,
            is_current: role.end_year.is_none(),
        };
        let out = self.role_out(&record);
        self.roles.push(record);
        Ok(out)
    }

    pub fn create_education(&mut self, edu: EducationCreate) -> ApiResult<EducationOut> {
        if self.person(edu.person_id).is_none() {
            return Err(ApiError::NotFound("Person not found".to_string()));
        }

        let education = EducationOut {
            id: next_id(self.education.iter().map(|e| e.education.id)),
            institution: edu.institution,
            degree: edu.degree,
            field: edu.field,
            start_year: edu.start_year,
            end_year: edu.end_year,
        };
        self.education.push(EducationRecord {
            person_id: edu.person_id,
            education: education.clone(),
        });
        Ok(education)
    }

    // =========================================================================
    // Interactions
    // =========================================================================

    /// Newest first, optionally only those involving `person_id` on either side.
    pub fn list_interactions(&self, person_id: Option<i64>) -> Vec<InteractionOut> {
        let mut matches: Vec<&InteractionOut> = self
            .interactions
            .iter()
            .filter(|i| {
                person_id.map_or(true, |id| {
                    i.interaction.internal_person_id == id || i.interaction.external_person_id == id
                })
            })
            .collect();
        matches.sort_by(|a, b| b.interaction.occurred_at.cmp(&a.interaction.occurred_at));

        matches.into_iter().take(INTERACTION_LIMIT).cloned().collect()
    }

    pub fn create_interaction(
        &mut self,
        interaction: InteractionCreate,
        now: DateTime<Utc>,
    ) -> ApiResult<InteractionOut> {
        if !(-2..=2).contains(&interaction.sentiment) {
            return Err(ApiError::InvalidInput(format!(
                "sentiment must be between -2 and 2, got {}",
                interaction.sentiment
            )));
        }
        for id in [interaction.internal_person_id, interaction.external_person_id] {
            if self.person(id).is_none() {
                return Err(ApiError::NotFound(format!("Person {} not found", id)));
            }
        }

        let out = InteractionOut {
            id: next_id(self.interactions.iter().map(|i| i.id)),
            interaction,
            created_at: now,
        };
        self.interactions.push(out.clone());
        Ok(out)
    }

    // =========================================================================
    // Connectivity
    // =========================================================================

    /// Every internal member with at least one signal, strongest first.
    pub fn connectivity(
        &self,
        target_id: i64,
        today: NaiveDate,
    ) -> ApiResult<ConnectivityResponse> {
        let target = self
            .person(target_id)
            .map(|p| self.detail(p))
            .ok_or_else(|| ApiError::NotFound("Target person not found".to_string()))?;

        let mut connectors: Vec<_> = self
            .internal_members()
            .iter()
            .map(|member| compute_connectivity(member, &target, &self.interactions, today))
            .filter(|result| !result.signals.is_empty())
            .collect();
        connectors.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(ConnectivityResponse {
            target: target.summary,
            connectors,
        })
    }

    /// Overlaps between the internal team and everyone external at the
    /// organization with this LinkedIn slug.
    pub fn company_connectivity(
        &self,
        linkedin_slug: &str,
        today: NaiveDate,
    ) -> ApiResult<CompanyConnectivityResponse> {
        let org = self
            .orgs
            .iter()
            .find(|o| o.data.linkedin_slug.as_deref() == Some(linkedin_slug))
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "Company '{}' not found. Add it via POST /api/orgs first.",
                    linkedin_slug
                ))
            })?;

        let people_ids: BTreeSet<i64> = self
            .roles
            .iter()
            .filter(|r| r.org_id == org.id)
            .map(|r| r.person_id)
            .collect();
        let targets: Vec<PersonDetail> = people_ids
            .iter()
            .filter_map(|id| self.person(*id))
            .filter(|p| !p.data.is_internal)
            .map(|p| self.detail(p))
            .collect();

        if targets.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No external people found at '{}'.",
                org.data.name
            )));
        }

        let members = self.internal_members();
        let mut overlaps = Vec::new();
        for target in &targets {
            for member in &members {
                let result = compute_connectivity(member, target, &self.interactions, today);
                if result.signals.is_empty() {
                    continue;
                }
                overlaps.push(OverlapResult {
                    sp_member: result.sp_member,
                    target_person: target.summary.clone(),
                    score: result.score,
                    strength: result.strength,
                    signals: result.signals,
                });
            }
        }
        overlaps.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(CompanyConnectivityResponse {
            org: Self::org_summary(org),
            total: overlaps.len(),
            overlaps,
        })
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

fn contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strength;
    use chrono::TimeZone;

    fn store() -> DemoStore {
        DemoStore::seeded().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    fn id_of(store: &DemoStore, name: &str) -> i64 {
        store.list_people(Some(name), false)[0].id
    }

    #[test]
    fn test_seed_counts() {
        let store = store();
        assert_eq!(store.list_people(None, false).len(), 15);
        assert_eq!(store.list_people(None, true).len(), 10);
        // Orgs are shared across people, not duplicated
        let salesforce = store.list_orgs(Some("salesforce"));
        assert_eq!(salesforce.len(), 1);
        assert_eq!(salesforce[0].linkedin_slug.as_deref(), Some("salesforce"));
    }

    #[test]
    fn test_people_search_is_case_insensitive_and_sorted() {
        let store = store();
        let stripe = store.list_people(Some("STRIPE"), false);
        let names: Vec<_> = stripe.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["Dhivya Suryadevara", "Patrick Collison"]);

        let all = store.list_people(None, false);
        let mut sorted = all.clone();
        sorted.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_seeded_roles_title_only_current() {
        let store = store();
        let keith = store.get_person(id_of(&store, "Keith Block")).unwrap();
        assert_eq!(keith.roles.len(), 3);
        let current: Vec<_> = keith.roles.iter().filter(|r| r.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title.as_deref(), Some("Founder & CEO"));
        assert!(keith.roles.iter().filter(|r| !r.is_current).all(|r| r.title.is_none()));
    }

    #[test]
    fn test_get_missing() {
        let store = store();
        assert!(matches!(store.get_person(999), Err(ApiError::NotFound(_))));
        assert!(matches!(store.get_org(999), Err(ApiError::NotFound(_))));
        assert!(matches!(store.connectivity(999, today()), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_connectivity_for_benioff() {
        let store = store();
        let target = id_of(&store, "Marc Benioff");
        let response = store.connectivity(target, today()).unwrap();

        assert_eq!(response.target.full_name, "Marc Benioff");
        let top = &response.connectors[0];
        // Oracle overlap, shared Salesforce board, same city
        assert_eq!(top.sp_member.full_name, "Keith Block");
        assert_eq!(top.score, 12 + 20 + 5);
        assert_eq!(top.strength, Strength::Medium);
        assert!(response.connectors.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(response.connectors.iter().all(|c| !c.signals.is_empty()));
    }

    #[test]
    fn test_company_connectivity() {
        let store = store();
        let response = store.company_connectivity("stripe", today()).unwrap();
        assert_eq!(response.org.name, "Stripe");
        assert_eq!(response.total, response.overlaps.len());
        assert!(response
            .overlaps
            .iter()
            .all(|o| !o.target_person.is_internal && o.sp_member.is_internal));
        // Goldman Sachs alumni
        assert!(response
            .overlaps
            .iter()
            .any(|o| o.sp_member.full_name == "Brooke Kiley Slattery"
                && o.target_person.full_name == "Dhivya Suryadevara"));
    }

    #[test]
    fn test_company_connectivity_errors() {
        let mut store = store();
        let err = store.company_connectivity("nope", today()).unwrap_err();
        assert!(err.to_string().contains("Company 'nope' not found"));

        // Only internal people work here
        let err = store
            .company_connectivity("smith-point-capital", today())
            .unwrap_err();
        assert!(err.to_string().contains("No external people found at 'Smith Point Capital'"));

        store
            .create_org(OrgCreate {
                name: "Empty Co".into(),
                linkedin_slug: Some("empty-co".into()),
                ..OrgCreate::default()
            })
            .unwrap();
        assert!(store.company_connectivity("empty-co", today()).is_err());
    }

    #[test]
    fn test_create_role_upserts_org_case_insensitively() {
        let mut store = store();
        let orgs_before = store.list_orgs(None).len();
        let person = id_of(&store, "Sam Altman");

        let role = store
            .create_role(RoleCreate {
                person_id: person,
                org_name: "ORACLE".into(),
                title: Some("Intern".into()),
                start_year: Some(2001),
                end_year: Some(2002),
                is_board: false,
            })
            .unwrap();
        assert_eq!(role.org_name.as_deref(), Some("Oracle"));
        assert!(!role.is_current);
        assert_eq!(store.list_orgs(None).len(), orgs_before);

        let role = store
            .create_role(RoleCreate {
                person_id: person,
                org_name: "New Venture".into(),
                title: None,
                start_year: Some(2025),
                end_year: None,
                is_board: true,
            })
            .unwrap();
        assert!(role.is_current);
        assert_eq!(store.list_orgs(None).len(), orgs_before + 1);

        let missing = store.create_role(RoleCreate {
            person_id: 999,
            org_name: "X".into(),
            title: None,
            start_year: None,
            end_year: None,
            is_board: false,
        });
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_created_person_is_scored() {
        let mut store = store();
        let person = store.create_person(PersonCreate {
            full_name: "New Contact".into(),
            location: Some("Chicago, IL".into()),
            ..PersonCreate::default()
        });
        assert!(!person.summary.is_internal);

        store
            .create_education(EducationCreate {
                person_id: person.id(),
                institution: "University of Illinois Urbana-Champaign".into(),
                degree: None,
                field: None,
                start_year: Some(1994),
                end_year: Some(1998),
            })
            .unwrap();

        let response = store.connectivity(person.id(), today()).unwrap();
        let tyler = response
            .connectors
            .iter()
            .find(|c| c.sp_member.full_name == "Tyler Prince")
            .unwrap();
        // Same school and years, same city
        assert_eq!(tyler.score, 25);
    }

    #[test]
    fn test_interactions() {
        let mut store = store();
        let keith = id_of(&store, "Keith Block");
        let sam = id_of(&store, "Sam Altman");
        let at = |m| Utc.with_ymd_and_hms(2026, m, 1, 9, 0, 0).unwrap();

        for month in [1, 2] {
            store
                .create_interaction(
                    InteractionCreate {
                        internal_person_id: keith,
                        external_person_id: sam,
                        interaction_type: "meeting".into(),
                        occurred_at: at(month),
                        notes: None,
                        sentiment: 1,
                    },
                    at(month),
                )
                .unwrap();
        }

        let log = store.list_interactions(Some(sam));
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].interaction.occurred_at, at(2));
        assert!(store.list_interactions(Some(id_of(&store, "Bret Taylor"))).is_empty());
        assert_eq!(store.list_interactions(None).len(), 2);

        let response = store.connectivity(sam, today()).unwrap();
        let keith_result = response
            .connectors
            .iter()
            .find(|c| c.sp_member.id == keith)
            .unwrap();
        assert_eq!(
            keith_result
                .signals
                .iter()
                .filter(|s| s.kind == crate::models::SignalKind::Interaction)
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_linkedin_slug_rejected() {
        let mut store = store();
        let orgs_before = store.list_orgs(None).len();

        let err = store
            .create_org(OrgCreate {
                name: "Salesforce Again".into(),
                linkedin_slug: Some("salesforce".into()),
                ..OrgCreate::default()
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(store.list_orgs(None).len(), orgs_before);

        // Orgs without a slug never collide
        for name in ["No Slug A", "No Slug B"] {
            store
                .create_org(OrgCreate {
                    name: name.into(),
                    ..OrgCreate::default()
                })
                .unwrap();
        }
        assert_eq!(store.list_orgs(Some("no slug")).len(), 2);
    }

    #[test]
    fn test_search_results_are_capped() {
        let mut store = DemoStore::default();
        // Inserted in reverse so the cap applies after sorting
        for n in (0..60).rev() {
            store.create_person(PersonCreate {
                full_name: format!("Person {:02}", n),
                current_company: Some("Bulk Co".into()),
                ..PersonCreate::default()
            });
            store
                .create_org(OrgCreate {
                    name: format!("Org {:02}", n),
                    linkedin_slug: Some(format!("org-{:02}", n)),
                    ..OrgCreate::default()
                })
                .unwrap();
        }

        let people = store.list_people(None, false);
        assert_eq!(people.len(), SEARCH_LIMIT);
        assert_eq!(people[0].full_name, "Person 00");
        assert_eq!(people[SEARCH_LIMIT - 1].full_name, "Person 49");
        assert_eq!(store.list_people(Some("bulk"), false).len(), SEARCH_LIMIT);

        let orgs = store.list_orgs(None);
        assert_eq!(orgs.len(), SEARCH_LIMIT);
        assert!(orgs.windows(2).all(|pair| pair[0].name < pair[1].name));
        assert_eq!(orgs[0].name, "Org 00");
        assert_eq!(orgs[SEARCH_LIMIT - 1].name, "Org 49");
        assert_eq!(store.list_orgs(Some("org 5")).len(), 10);
    }

    #[test]
    fn test_interaction_log_is_capped() {
        let mut store = store();
        let keith = id_of(&store, "Keith Block");
        let sam = id_of(&store, "Sam Altman");
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        for day in 0..120 {
            let at = start + chrono::Duration::days(day);
            store
                .create_interaction(
                    InteractionCreate {
                        internal_person_id: keith,
                        external_person_id: sam,
                        interaction_type: "email".into(),
                        occurred_at: at,
                        notes: None,
                        sentiment: 0,
                    },
                    at,
                )
                .unwrap();
        }

        let log = store.list_interactions(None);
        assert_eq!(log.len(), INTERACTION_LIMIT);
        // Newest first, so the 20 oldest fall off
        assert_eq!(log[0].interaction.occurred_at, start + chrono::Duration::days(119));
        assert_eq!(
            log[INTERACTION_LIMIT - 1].interaction.occurred_at,
            start + chrono::Duration::days(20)
        );
        assert_eq!(store.list_interactions(Some(sam)).len(), INTERACTION_LIMIT);
    }

    #[test]
    fn test_interaction_validation() {
        let mut store = store();
        let keith = id_of(&store, "Keith Block");
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut create = InteractionCreate {
            internal_person_id: keith,
            external_person_id: 999,
            interaction_type: "call".into(),
            occurred_at: now,
            notes: None,
            sentiment: 0,
        };
        assert!(matches!(
            store.create_interaction(create.clone(), now),
            Err(ApiError::NotFound(_))
        ));

        create.external_person_id = keith;
        create.sentiment = 3;
        assert!(matches!(
            store.create_interaction(create, now),
            Err(ApiError::InvalidInput(_))
        ));
    }
}
