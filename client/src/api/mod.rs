//! API client module.
//!
//! [`RcpClient`] is the entry point; [`HttpBackend`] is the network half it
//! uses when a base URL is configured.
//!
//! # Endpoints
//!
//! | Method | Path                          | Client method            |
//! |--------|-------------------------------|--------------------------|
//! | GET    | `/api/health`                 | `health`                 |
//! | GET    | `/api/people`                 | `list_people`            |
//! | GET    | `/api/people/{id}`            | `get_person`             |
//! | POST   | `/api/people`                 | `create_person`          |
//! | GET    | `/api/orgs`                   | `list_orgs`              |
//! | GET    | `/api/orgs/{id}`              | `get_org`                |
//! | POST   | `/api/orgs`                   | `create_org`             |
//! | GET    | `/api/connectivity`           | `connectivity`           |
//! | GET    | `/api/connectivity/company`   | `company_connectivity`   |
//! | POST   | `/api/roles`                  | `create_role`            |
//! | POST   | `/api/education`              | `create_education`       |
//! | GET    | `/api/interactions`           | `list_interactions`      |
//! | POST   | `/api/interactions`           | `create_interaction`     |

pub mod client;
pub mod http;

pub use client::RcpClient;
pub use http::HttpBackend;
