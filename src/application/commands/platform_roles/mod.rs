mod grant;
mod revoke;
mod service;

pub use grant::GrantPlatformRoleCommand;
pub use revoke::RevokePlatformRoleCommand;
pub use service::PlatformRoleCommandService;
