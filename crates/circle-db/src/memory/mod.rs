//! In-memory repository implementations
//!
//! Backed by a `HashMap` behind a `parking_lot::RwLock`: lookups share the
//! read lock, saves and deletes take the write lock. Entities are cloned
//! in and out, so callers never hold a reference into the store.

mod circle;
mod user;

pub use circle::MemoryCircleRepository;
pub use user::MemoryUserRepository;
