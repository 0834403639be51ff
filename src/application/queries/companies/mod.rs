mod get;
mod list;
mod service;

pub use get::GetCompanyQuery;
pub use list::ListCompaniesQuery;
pub use service::CompanyQueryService;
