mod resolver;

pub use resolver::{OrganizationSelectionPolicy, TenantResolver};
