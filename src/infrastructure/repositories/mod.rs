// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit_log;
mod postgres_company;
mod postgres_tenant;

pub use error::map_sqlx;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_company::{PostgresCompanyReadRepository, PostgresCompanyWriteRepository};
pub use postgres_tenant::{
    PostgresOrganizationRepository, PostgresPlatformRoleRepository, PostgresProfileRepository,
};
