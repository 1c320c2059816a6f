pub mod admin_service;
pub mod auth_service;
pub mod roster_service;

pub use admin_service::*;
pub use auth_service::*;
pub use roster_service::*;
