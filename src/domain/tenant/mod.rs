pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPlatformRoleGrant, PlatformRole, PlatformRoleGrant, Profile};
pub use repository::{OrganizationRepository, PlatformRoleRepository, ProfileRepository};
pub use value_objects::{OrganizationId, UserId};
