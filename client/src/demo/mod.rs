//! Demo mode.
//!
//! Used when no backend base URL is configured. Every call is answered from
//! an in-memory copy of the embedded dataset; nothing touches the network.

pub mod seed;
pub mod store;

pub use seed::{SeedData, SeedEducation, SeedOrg, SeedPerson};
pub use store::{DemoStore, INTERACTION_LIMIT, SEARCH_LIMIT};
