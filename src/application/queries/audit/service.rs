use std::sync::Arc;

use crate::{application::tenant::TenantResolver, domain::audit::AuditLogRepository};

pub struct AuditQueryService {
    pub(super) tenant: Arc<TenantResolver>,
    pub(super) repo: Arc<dyn AuditLogRepository>,
}

impl AuditQueryService {
    pub fn new(tenant: Arc<TenantResolver>, repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { tenant, repo }
    }
}
