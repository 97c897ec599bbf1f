//! Traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{CircleRepository, RepoResult, UserRepository};
