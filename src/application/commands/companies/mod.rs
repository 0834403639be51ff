// src/application/commands/companies/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateCompanyCommand;
pub use delete::DeleteCompanyCommand;
pub use service::CompanyCommandService;
pub use update::UpdateCompanyCommand;
