//! Service context - dependency container for services
//!
//! Holds the repositories and the policy settings the use cases need.

use std::sync::Arc;

use circle_common::PolicyConfig;
use circle_core::{
    CapacityTiers, CircleRepository, MemberLimitPolicy, RecommendationCriteria, UserRepository,
};
use circle_db::{MemoryCircleRepository, MemoryUserRepository, PgCircleRepository, PgPool, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; repositories are shared behind `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    circle_repo: Arc<dyn CircleRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Policies
    capacity: CapacityTiers,
    recommendation: RecommendationCriteria,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        circle_repo: Arc<dyn CircleRepository>,
        user_repo: Arc<dyn UserRepository>,
        capacity: CapacityTiers,
        recommendation: RecommendationCriteria,
    ) -> Self {
        Self {
            circle_repo,
            user_repo,
            capacity,
            recommendation,
        }
    }

    /// Context backed by fresh in-memory repositories
    pub fn in_memory(policy: &PolicyConfig) -> Self {
        Self::new(
            Arc::new(MemoryCircleRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            policy.capacity_tiers(),
            policy.recommendation_criteria(),
        )
    }

    /// Context backed by PostgreSQL repositories sharing `pool`
    pub fn postgres(pool: PgPool, policy: &PolicyConfig) -> Self {
        Self::new(
            Arc::new(PgCircleRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            policy.capacity_tiers(),
            policy.recommendation_criteria(),
        )
    }

    // === Repositories ===

    /// Get the circle repository
    pub fn circle_repo(&self) -> &dyn CircleRepository {
        self.circle_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Policies ===

    pub fn capacity_tiers(&self) -> CapacityTiers {
        self.capacity
    }

    /// Capacity policy built from the configured tiers
    pub fn member_limit_policy(&self) -> MemberLimitPolicy {
        MemberLimitPolicy::new(self.capacity)
    }

    pub fn recommendation_criteria(&self) -> RecommendationCriteria {
        self.recommendation
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("capacity", &self.capacity)
            .field("recommendation", &self.recommendation)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories are required; policies fall back to their defaults.
#[derive(Default)]
pub struct ServiceContextBuilder {
    circle_repo: Option<Arc<dyn CircleRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    capacity: Option<CapacityTiers>,
    recommendation: Option<RecommendationCriteria>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle_repo(mut self, repo: Arc<dyn CircleRepository>) -> Self {
        self.circle_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn capacity_tiers(mut self, tiers: CapacityTiers) -> Self {
        self.capacity = Some(tiers);
        self
    }

    pub fn recommendation_criteria(mut self, criteria: RecommendationCriteria) -> Self {
        self.recommendation = Some(criteria);
        self
    }

    /// Take both policies from loaded configuration
    pub fn policy(self, policy: &PolicyConfig) -> Self {
        self.capacity_tiers(policy.capacity_tiers())
            .recommendation_criteria(policy.recommendation_criteria())
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.circle_repo
                .ok_or_else(|| ServiceError::validation("circle_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.capacity.unwrap_or_default(),
            self.recommendation.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_repositories() {
        let err = ServiceContextBuilder::new()
            .user_repo(Arc::new(MemoryUserRepository::new()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("circle_repo is required"));
    }

    #[test]
    fn test_builder_defaults_policies() {
        let ctx = ServiceContextBuilder::new()
            .circle_repo(Arc::new(MemoryCircleRepository::new()))
            .user_repo(Arc::new(MemoryUserRepository::new()))
            .build()
            .unwrap();
        assert_eq!(ctx.capacity_tiers(), CapacityTiers::default());
        assert_eq!(ctx.recommendation_criteria(), RecommendationCriteria::default());
    }

    #[test]
    fn test_in_memory_uses_policy_config() {
        let policy = PolicyConfig {
            basic_member_limit: 5,
            premium_member_limit: 8,
            ..PolicyConfig::default()
        };
        let ctx = ServiceContext::in_memory(&policy);
        assert_eq!(ctx.capacity_tiers().basic_limit, 5);
        assert_eq!(ctx.member_limit_policy().tiers().premium_limit, 8);
    }
}
