//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in circle-core.

mod circle;
mod error;
mod user;

pub use circle::PgCircleRepository;
pub use user::PgUserRepository;
