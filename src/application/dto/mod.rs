pub mod audit;
pub mod auth;
pub mod companies;
pub mod pagination;
pub mod tenant;

pub use audit::AuditLogDto;
pub use auth::Session;
pub use companies::CompanyDto;
pub use pagination::{CursorPage, Page};
pub use tenant::{PlatformRoleGrantDto, TenantDto};
