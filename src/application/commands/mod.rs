pub mod companies;
pub mod platform_roles;
