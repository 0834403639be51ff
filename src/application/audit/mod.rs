mod logger;
mod worker;

pub use logger::{AuditDispatch, AuditLogger};
pub use worker::{AuditWorkerHandle, DEFAULT_AUDIT_QUEUE_CAPACITY};
