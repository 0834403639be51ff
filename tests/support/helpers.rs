// tests/support/helpers.rs
use super::mocks::{
    CapturingFailureSink, InMemoryAuditRepo, InMemoryCompanies, InMemoryOrganizations,
    InMemoryPlatformRoles, InMemoryProfiles, MockSessionVerifier, FixedClock,
};
use abm_core::application::{
    audit::{AuditLogger, AuditWorkerHandle},
    context::{ClientInfo, RequestContext},
    services::{ApplicationServices, Repositories},
    tenant::OrganizationSelectionPolicy,
};
use abm_core::domain::audit::AuditLogEntry;
use abm_core::domain::tenant::{OrganizationId, PlatformRole, UserId};
use abm_core::presentation::http::{
    cookies::ActiveOrgCookie, routes::build_router_with_rate_limiter, state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const ORG_A: Uuid = Uuid::from_u128(0x1111_1111_1111_4111_8111_1111_1111_1111);
pub const ORG_B: Uuid = Uuid::from_u128(0x2222_2222_2222_4222_8222_2222_2222_2222);
/// Exists but has no members.
pub const ORG_C: Uuid = Uuid::from_u128(0x3333_3333_3333_4333_8333_3333_3333_3333);
/// Never stored anywhere.
pub const ORG_UNKNOWN: Uuid = Uuid::from_u128(0x4444_4444_4444_4444_8444_4444_4444_4444);

/// Platform owner, home tenant A.
pub const OWNER_ID: Uuid = Uuid::from_u128(0xaaaa_aaaa_aaaa_4aaa_8aaa_aaaa_aaaa_aaaa);
/// Platform admin, home tenant B.
pub const ADMIN_ID: Uuid = Uuid::from_u128(0xbbbb_bbbb_bbbb_4bbb_8bbb_bbbb_bbbb_bbbb);
/// Plain member of tenant A.
pub const MEMBER_ID: Uuid = Uuid::from_u128(0xcccc_cccc_cccc_4ccc_8ccc_cccc_cccc_cccc);
/// Profile without an organization.
pub const ORPHAN_ID: Uuid = Uuid::from_u128(0xdddd_dddd_dddd_4ddd_8ddd_dddd_dddd_dddd);
/// Plain member of tenant B.
pub const OUTSIDER_ID: Uuid = Uuid::from_u128(0xeeee_eeee_eeee_4eee_8eee_eeee_eeee_eeee);

pub const COOKIE_NAME: &str = "active_org_id";

pub fn org(id: Uuid) -> OrganizationId {
    OrganizationId::new(id).unwrap()
}

pub fn user(id: Uuid) -> UserId {
    UserId::new(id).unwrap()
}

/// In-memory backing stores seeded with three tenants and one user per role.
pub struct TestWorld {
    pub profiles: Arc<InMemoryProfiles>,
    pub roles: Arc<InMemoryPlatformRoles>,
    pub organizations: Arc<InMemoryOrganizations>,
    pub companies: Arc<InMemoryCompanies>,
    pub audit: Arc<InMemoryAuditRepo>,
    pub failures: Arc<CapturingFailureSink>,
}

impl TestWorld {
    pub fn seeded() -> Self {
        let world = Self {
            profiles: Arc::default(),
            roles: Arc::default(),
            organizations: Arc::default(),
            companies: Arc::default(),
            audit: Arc::default(),
            failures: Arc::default(),
        };

        for id in [ORG_A, ORG_B, ORG_C] {
            world.organizations.insert(org(id));
        }
        world.profiles.insert(user(OWNER_ID), Some(org(ORG_A)));
        world.profiles.insert(user(ADMIN_ID), Some(org(ORG_B)));
        world.profiles.insert(user(MEMBER_ID), Some(org(ORG_A)));
        world.profiles.insert(user(OUTSIDER_ID), Some(org(ORG_B)));
        world.profiles.insert(user(ORPHAN_ID), None);
        world.roles.grant(user(OWNER_ID), PlatformRole::PlatformOwner);
        world.roles.grant(user(ADMIN_ID), PlatformRole::PlatformAdmin);
        world
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            profiles: self.profiles.clone(),
            platform_roles: self.roles.clone(),
            organizations: self.organizations.clone(),
            company_write: self.companies.clone(),
            company_read: self.companies.clone(),
            audit_logs: self.audit.clone(),
        }
    }

    pub fn services(
        &self,
        policy: OrganizationSelectionPolicy,
    ) -> (Arc<ApplicationServices>, AuditWorkerHandle) {
        let repos = self.repositories();
        let (logger, worker) = AuditLogger::spawn(
            Arc::clone(&repos.audit_logs),
            self.failures.clone(),
            Arc::new(FixedClock),
            64,
        );
        let services = ApplicationServices::new(
            repos,
            Arc::new(MockSessionVerifier),
            logger,
            Arc::new(FixedClock),
            policy,
        );
        (Arc::new(services), worker)
    }

    pub fn router(&self) -> (axum::Router, AuditWorkerHandle) {
        self.router_with_policy(OrganizationSelectionPolicy::Trusted)
    }

    pub fn router_with_policy(
        &self,
        policy: OrganizationSelectionPolicy,
    ) -> (axum::Router, AuditWorkerHandle) {
        let (services, worker) = self.services(policy);
        let state = HttpState {
            services,
            cookie: ActiveOrgCookie::new(COOKIE_NAME, Duration::from_secs(3600)),
            allowed_origins: vec!["http://localhost:3000".into()],
        };
        (build_router_with_rate_limiter(state, false), worker)
    }

    /// Polls until the background writer has stored `count` entries.
    pub async fn wait_for_audit(&self, count: usize) -> Vec<AuditLogEntry> {
        for _ in 0..200 {
            if self.audit.len() >= count {
                return self.audit.entries();
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!(
            "expected {count} audit entries, found {}",
            self.audit.len()
        );
    }
}

pub fn context(session_token: Option<&str>, cookie: Option<&str>) -> RequestContext {
    RequestContext {
        session: session_token.and_then(MockSessionVerifier::session_for),
        active_organization: cookie.map(str::to_string),
        client: ClientInfo::default(),
    }
}

pub struct RequestSpec<'a> {
    pub method: Method,
    pub uri: &'a str,
    pub token: Option<&'a str>,
    pub cookie: Option<String>,
    pub body: Option<Value>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(method: Method, uri: &'a str) -> Self {
        Self {
            method,
            uri,
            token: None,
            cookie: None,
            body: None,
        }
    }

    pub fn token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    pub fn active_org(mut self, value: impl std::fmt::Display) -> Self {
        self.cookie = Some(format!("{COOKIE_NAME}={value}"));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder()
            .method(self.method)
            .uri(self.uri)
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .header(header::USER_AGENT, "abm-tests");
        if let Some(token) = self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(cookie) = self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match self.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// Asserts the JSON error envelope: status, canonical reason in `error`, and
/// a non-empty `message`.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
