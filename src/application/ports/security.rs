// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::Session};
use async_trait::async_trait;

/// Turns a bearer token issued by the authentication service into a session.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<Session>;
}
