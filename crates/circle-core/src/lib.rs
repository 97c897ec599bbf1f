//! # circle-core
//!
//! Domain layer containing identifiers, value objects, the Circle aggregate,
//! membership policies, domain services and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod services;
pub mod specifications;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Circle, CircleMembers, User};
pub use error::{DomainError, ErrorKind, NameField};
pub use services::{CircleExistenceService, UserExistenceService};
pub use specifications::{
    filter_circles, CapacityTiers, CircleSpecification, MemberLimitPolicy,
    RecommendationCriteria, RecommendedCircleSpecification,
};
pub use traits::{CircleRepository, RepoResult, UserRepository};
pub use value_objects::{CircleId, CircleName, Email, FullName, UserId};
