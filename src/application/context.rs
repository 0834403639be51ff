// src/application/context.rs
use crate::application::dto::Session;

/// Request origin details recorded alongside audit entries. Best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Everything the tenant resolver and the audit logger need to know about the
/// current request. Built once per request and passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub session: Option<Session>,
    /// Raw value of the active-organization cookie, if sent.
    pub active_organization: Option<String>,
    pub client: ClientInfo,
}

impl RequestContext {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn audit_context(&self) -> AuditContext {
        AuditContext {
            actor: self.session.clone(),
            client: self.client.clone(),
        }
    }
}

/// Who did it and from where.
#[derive(Debug, Clone, Default)]
pub struct AuditContext {
    pub actor: Option<Session>,
    pub client: ClientInfo,
}

impl AuditContext {
    pub fn system() -> Self {
        Self::default()
    }
}
