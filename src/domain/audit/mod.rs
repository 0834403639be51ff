pub mod cursor;
pub mod diff;
pub mod entity;
pub mod repository;

pub use cursor::AuditLogCursor;
pub use diff::{ChangeSet, IGNORED_FIELDS, Record, compute_changes, values_equal};
pub use entity::{AuditAction, AuditLogEntry, AuditLogFilter, EntityType, NewAuditLogEntry};
pub use repository::AuditLogRepository;
