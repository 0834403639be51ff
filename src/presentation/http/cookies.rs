// src/presentation/http/cookies.rs
use crate::domain::tenant::OrganizationId;
use axum::http::HeaderValue;
use std::{sync::Arc, time::Duration};

/// Name and lifetime of the cookie carrying a platform user's tenant selection.
#[derive(Debug, Clone)]
pub struct ActiveOrgCookie {
    name: Arc<str>,
    max_age: Duration,
}

impl ActiveOrgCookie {
    pub fn new(name: impl Into<Arc<str>>, max_age: Duration) -> Self {
        Self {
            name: name.into(),
            max_age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&self, organization_id: OrganizationId) -> Option<HeaderValue> {
        self.build(&organization_id.to_string(), self.max_age.as_secs())
    }

    pub fn clear(&self) -> Option<HeaderValue> {
        self.build("", 0)
    }

    fn build(&self, value: &str, max_age: u64) -> Option<HeaderValue> {
        HeaderValue::from_str(&format!(
            "{}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
            self.name
        ))
        .ok()
    }
}

impl Default for ActiveOrgCookie {
    fn default() -> Self {
        Self::new("active_org_id", Duration::from_secs(60 * 60 * 24 * 30))
    }
}
