// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod audit;
pub mod companies;
pub mod security;
pub mod tenant;
pub mod time;

pub use audit::{CapturingFailureSink, FailingAuditRepo, GatedAuditRepo, InMemoryAuditRepo};
pub use companies::InMemoryCompanies;
pub use security::{
    ADMIN_TOKEN, GHOST_ID, GHOST_TOKEN, MEMBER_TOKEN, MockSessionVerifier, ORPHAN_TOKEN, OUTSIDER_TOKEN,
    OWNER_TOKEN,
};
pub use tenant::{
    FailingTenantStore, InMemoryOrganizations, InMemoryPlatformRoles, InMemoryProfiles,
};
pub use time::{FixedClock, fixed_now};
