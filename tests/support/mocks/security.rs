// tests/support/mocks/security.rs
use super::super::helpers::{ADMIN_ID, MEMBER_ID, ORPHAN_ID, OUTSIDER_ID, OWNER_ID};
use abm_core::application::{
    ApplicationResult, dto::Session, error::ApplicationError, ports::security::SessionVerifier,
};
use abm_core::domain::tenant::UserId;
use async_trait::async_trait;
use uuid::Uuid;

pub const OWNER_TOKEN: &str = "owner-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const MEMBER_TOKEN: &str = "member-token";
pub const OUTSIDER_TOKEN: &str = "outsider-token";
pub const ORPHAN_TOKEN: &str = "orphan-token";
/// Valid session for a user without a profile row.
pub const GHOST_TOKEN: &str = "ghost-token";

pub const GHOST_ID: Uuid = Uuid::from_u128(0xffff_ffff_ffff_4fff_8fff_ffff_ffff_ffff);

/// Accepts the fixed tokens above and rejects everything else.
#[derive(Debug, Default, Clone)]
pub struct MockSessionVerifier;

impl MockSessionVerifier {
    pub fn session_for(token: &str) -> Option<Session> {
        let (id, email) = match token {
            OWNER_TOKEN => (OWNER_ID, "owner@example.com"),
            ADMIN_TOKEN => (ADMIN_ID, "admin@example.com"),
            MEMBER_TOKEN => (MEMBER_ID, "member@example.com"),
            OUTSIDER_TOKEN => (OUTSIDER_ID, "outsider@example.com"),
            ORPHAN_TOKEN => (ORPHAN_ID, "orphan@example.com"),
            GHOST_TOKEN => (GHOST_ID, "ghost@example.com"),
            _ => return None,
        };
        Some(Session::new(UserId::new(id).ok()?, Some(email.to_string())))
    }
}

#[async_trait]
impl SessionVerifier for MockSessionVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<Session> {
        Self::session_for(token).ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
