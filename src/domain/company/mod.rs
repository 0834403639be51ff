pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Company, CompanyChanges, NewCompany};
pub use repository::{CompanyListQuery, CompanyReadRepository, CompanyWriteRepository};
pub use value_objects::{CompanyDomain, CompanyId, CompanyName, EmployeeCount};
