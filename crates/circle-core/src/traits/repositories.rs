//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Absence is `Ok(None)`; turning it into a "not found" failure is the
//! caller's decision.

use async_trait::async_trait;

use crate::entities::{Circle, User};
use crate::error::DomainError;
use crate::specifications::CircleSpecification;
use crate::value_objects::{CircleId, CircleName, FullName, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Circle Repository
// ============================================================================

#[async_trait]
pub trait CircleRepository: Send + Sync {
    /// Find circle by ID
    async fn find_by_id(&self, id: CircleId) -> RepoResult<Option<Circle>>;

    /// Find circle by exact (normalized) name
    async fn find_by_name(&self, name: &CircleName) -> RepoResult<Option<Circle>>;

    /// List all circles
    async fn find_all(&self) -> RepoResult<Vec<Circle>>;

    /// List circles satisfying `spec`
    ///
    /// Must return the same set as filtering [`find_all`](Self::find_all) in memory.
    async fn find_by_specification(
        &self,
        spec: &dyn CircleSpecification,
    ) -> RepoResult<Vec<Circle>>;

    /// Insert or update a circle together with its full member list
    ///
    /// Readers must observe either the previous or the new member list,
    /// never a mix.
    async fn save(&self, circle: &Circle) -> RepoResult<()>;

    /// Delete a circle and its memberships
    async fn delete(&self, id: CircleId) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by full name
    async fn find_by_name(&self, name: &FullName) -> RepoResult<Option<User>>;

    /// Insert or update a user
    async fn save(&self, user: &User) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: UserId) -> RepoResult<()>;
}
