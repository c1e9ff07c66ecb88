//! Demo mode end to end: an empty base URL must never reach the network.

use chrono::Utc;
use std::io::Write;

use rcp::{
    ApiError, Config, EducationCreate, InteractionCreate, OrgCreate, PersonCreate, RcpClient,
    RoleCreate, API_BASE_VAR,
};

fn demo_client() -> RcpClient {
    let config = Config::from_lookup(|key| (key == API_BASE_VAR).then(String::new)).unwrap();
    assert!(config.is_demo());
    RcpClient::new(config).unwrap()
}

#[tokio::test]
async fn test_every_operation_stays_offline() {
    let client = demo_client();
    assert!(client.is_demo());

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");

    let team = client.list_people(None, true).await.unwrap();
    assert_eq!(team.len(), 10);
    let keith = team.iter().find(|p| p.full_name == "Keith Block").unwrap().id;

    let person = client
        .create_person(&PersonCreate {
            full_name: "Jordan Rivera".into(),
            current_company: Some("Acme Robotics".into()),
            location: Some("San Francisco, CA".into()),
            ..PersonCreate::default()
        })
        .await
        .unwrap();
    assert_eq!(client.get_person(person.id()).await.unwrap().full_name(), "Jordan Rivera");

    let org = client
        .create_org(&OrgCreate {
            name: "Acme Robotics".into(),
            linkedin_slug: Some("acme-robotics".into()),
            ..OrgCreate::default()
        })
        .await
        .unwrap();
    assert_eq!(client.get_org(org.id).await.unwrap().summary.name, "Acme Robotics");
    assert_eq!(client.list_orgs(Some("acme")).await.unwrap().len(), 1);

    let role = client
        .create_role(&RoleCreate {
            person_id: person.id(),
            org_name: "acme robotics".into(),
            title: Some("CEO".into()),
            start_year: Some(2021),
            end_year: None,
            is_board: false,
        })
        .await
        .unwrap();
    assert_eq!(role.org_id, org.id);

    client
        .create_education(&EducationCreate {
            person_id: person.id(),
            institution: "Carnegie Mellon".into(),
            degree: Some("BS".into()),
            field: None,
            start_year: Some(1981),
            end_year: Some(1985),
        })
        .await
        .unwrap();

    client
        .create_interaction(&InteractionCreate {
            internal_person_id: keith,
            external_person_id: person.id(),
            interaction_type: "call".into(),
            occurred_at: Utc::now(),
            notes: Some("Intro call".into()),
            sentiment: 2,
        })
        .await
        .unwrap();
    assert_eq!(client.list_interactions(Some(person.id())).await.unwrap().len(), 1);

    let response = client.connectivity(person.id()).await.unwrap();
    let top = &response.connectors[0];
    // Same school and years, same city, a call today
    assert_eq!(top.sp_member.full_name, "Keith Block");
    assert_eq!(top.score, 20 + 5 + 25);

    let company = client.company_connectivity("acme-robotics").await.unwrap();
    assert_eq!(company.total, company.overlaps.len());
    assert!(company.total >= 1);

    assert_eq!(client.requests_sent(), 0);
}

#[tokio::test]
async fn test_demo_not_found() {
    let client = demo_client();
    let err = client.get_person(10_000).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = client.company_connectivity("no-such-company").await.unwrap_err();
    assert!(err.to_string().contains("no-such-company"));
    assert_eq!(client.requests_sent(), 0);
}

#[tokio::test]
async fn test_salesforce_ceo_connectors() {
    let client = demo_client();
    let marc = client.list_people(Some("Benioff"), false).await.unwrap()[0].id;

    let response = client.connectivity(marc).await.unwrap();
    assert_eq!(response.connectors[0].sp_member.full_name, "Keith Block");
    assert!(response
        .connectors
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn test_env_file_sets_base() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rcp.env");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "RCP_API_BASE=http://localhost:8000/").unwrap();
    writeln!(file, "RCP_TIMEOUT_SECS=12").unwrap();

    // dotenvy never overrides variables that are already set
    std::env::remove_var(API_BASE_VAR);
    std::env::remove_var("RCP_TIMEOUT_SECS");

    let loaded = Config::from_env_file(&path);

    std::env::remove_var(API_BASE_VAR);
    std::env::remove_var("RCP_TIMEOUT_SECS");

    let config = loaded.unwrap();
    assert!(!config.is_demo());
    assert_eq!(config.api_base().as_str(), "http://localhost:8000/");
    assert_eq!(config.timeout().as_secs(), 12);

    let missing = Config::from_env_file(&dir.path().join("missing.env"));
    assert!(matches!(missing, Err(rcp::ConfigError::EnvFile(_))));
}
