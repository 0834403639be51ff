// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        audit::AuditLogger,
        commands::{companies::CompanyCommandService, platform_roles::PlatformRoleCommandService},
        ports::{security::SessionVerifier, time::Clock},
        queries::{
            audit::AuditQueryService, companies::CompanyQueryService,
            platform_roles::PlatformRoleQueryService,
        },
        tenant::{OrganizationSelectionPolicy, TenantResolver},
    },
    domain::{
        audit::AuditLogRepository,
        company::{CompanyReadRepository, CompanyWriteRepository},
        tenant::{OrganizationRepository, PlatformRoleRepository, ProfileRepository},
    },
};

/// Storage adapters the application layer is wired against.
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub platform_roles: Arc<dyn PlatformRoleRepository>,
    pub organizations: Arc<dyn OrganizationRepository>,
    pub company_write: Arc<dyn CompanyWriteRepository>,
    pub company_read: Arc<dyn CompanyReadRepository>,
    pub audit_logs: Arc<dyn AuditLogRepository>,
}

pub struct ApplicationServices {
    pub tenant: Arc<TenantResolver>,
    pub company_commands: Arc<CompanyCommandService>,
    pub company_queries: Arc<CompanyQueryService>,
    pub platform_role_commands: Arc<PlatformRoleCommandService>,
    pub platform_role_queries: Arc<PlatformRoleQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    session_verifier: Arc<dyn SessionVerifier>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        session_verifier: Arc<dyn SessionVerifier>,
        audit_logger: AuditLogger,
        clock: Arc<dyn Clock>,
        selection_policy: OrganizationSelectionPolicy,
    ) -> Self {
        let tenant = Arc::new(TenantResolver::new(
            Arc::clone(&repos.profiles),
            Arc::clone(&repos.platform_roles),
            Arc::clone(&repos.organizations),
            selection_policy,
        ));

        let company_commands = Arc::new(CompanyCommandService::new(
            Arc::clone(&tenant),
            Arc::clone(&repos.company_write),
            Arc::clone(&repos.company_read),
            audit_logger,
            Arc::clone(&clock),
        ));
        let company_queries = Arc::new(CompanyQueryService::new(
            Arc::clone(&tenant),
            Arc::clone(&repos.company_read),
        ));

        let platform_role_commands = Arc::new(PlatformRoleCommandService::new(
            Arc::clone(&tenant),
            Arc::clone(&repos.profiles),
            Arc::clone(&repos.platform_roles),
            Arc::clone(&clock),
        ));
        let platform_role_queries = Arc::new(PlatformRoleQueryService::new(
            Arc::clone(&tenant),
            Arc::clone(&repos.platform_roles),
        ));

        let audit_queries = Arc::new(AuditQueryService::new(
            Arc::clone(&tenant),
            Arc::clone(&repos.audit_logs),
        ));

        Self {
            tenant,
            company_commands,
            company_queries,
            platform_role_commands,
            platform_role_queries,
            audit_queries,
            session_verifier,
        }
    }

    pub fn session_verifier(&self) -> Arc<dyn SessionVerifier> {
        Arc::clone(&self.session_verifier)
    }
}
