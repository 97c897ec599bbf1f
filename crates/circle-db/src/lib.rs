//! # circle-db
//!
//! Persistence layer implementing the circle-core repository traits.
//!
//! ## Overview
//!
//! - In-memory repositories (`memory`) for tests and single-process use
//! - PostgreSQL connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers that re-validate through the value objects
//! - PostgreSQL repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use circle_common::AppConfig;
//! use circle_db::{create_pool, run_migrations, PgCircleRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     run_migrations(&pool).await?;
//!     let circle_repo = PgCircleRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryCircleRepository, MemoryUserRepository};
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgCircleRepository, PgUserRepository};
