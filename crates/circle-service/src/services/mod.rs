//! Use case services
//!
//! Each service borrows a [`ServiceContext`] and orchestrates domain
//! objects, domain services and repositories for one area.

pub mod circle;
pub mod context;
pub mod error;
pub mod user;

// Re-export all services for convenience
pub use circle::CircleService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
