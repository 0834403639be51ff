mod common;
mod list;
mod service;

pub(crate) use common::normalize_limit;
pub use list::ListAuditLogsQuery;
pub use service::AuditQueryService;
