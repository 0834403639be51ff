// src/presentation/http/controllers/mod.rs
pub mod audit;
pub mod companies;
pub mod platform_roles;
pub mod tenant;
