pub mod audit_sink;
pub mod database;
pub mod repositories;
pub mod security;
pub mod time;
