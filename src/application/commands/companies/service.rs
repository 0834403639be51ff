// src/application/commands/companies/service.rs
use std::sync::Arc;

use crate::{
    application::{audit::AuditLogger, ports::time::Clock, tenant::TenantResolver},
    domain::{
        company::{CompanyDomain, CompanyReadRepository, CompanyWriteRepository},
        errors::DomainResult,
    },
};

pub struct CompanyCommandService {
    pub(super) tenant: Arc<TenantResolver>,
    pub(super) write_repo: Arc<dyn CompanyWriteRepository>,
    pub(super) read_repo: Arc<dyn CompanyReadRepository>,
    pub(super) audit: AuditLogger,
    pub(super) clock: Arc<dyn Clock>,
}

impl CompanyCommandService {
    pub fn new(
        tenant: Arc<TenantResolver>,
        write_repo: Arc<dyn CompanyWriteRepository>,
        read_repo: Arc<dyn CompanyReadRepository>,
        audit: AuditLogger,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tenant,
            write_repo,
            read_repo,
            audit,
            clock,
        }
    }
}

/// Blank strings mean "no value".
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) fn parse_domain(value: Option<String>) -> DomainResult<Option<CompanyDomain>> {
    non_blank(value).map(CompanyDomain::new).transpose()
}
