use std::sync::Arc;

use crate::{application::tenant::TenantResolver, domain::company::CompanyReadRepository};

pub struct CompanyQueryService {
    pub(super) tenant: Arc<TenantResolver>,
    pub(super) read_repo: Arc<dyn CompanyReadRepository>,
}

impl CompanyQueryService {
    pub fn new(tenant: Arc<TenantResolver>, read_repo: Arc<dyn CompanyReadRepository>) -> Self {
        Self { tenant, read_repo }
    }
}
