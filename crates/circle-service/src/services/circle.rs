//! Circle service
//!
//! Handles circle creation, membership, renaming and recommendations.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use circle_core::{
    Circle, CircleExistenceService, CircleId, CircleMembers, CircleName, DomainError,
    RecommendedCircleSpecification, UserId,
};

use crate::dto::{
    AddMemberRequest, CircleResponse, CircleWithCapacity, CreateCircleRequest,
    CreateCircleResponse, RecommendedCircleResponse, RenameCircleRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Circle service
pub struct CircleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CircleService<'a> {
    /// Create a new CircleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a circle owned by an existing user
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_circle(
        &self,
        request: CreateCircleRequest,
    ) -> ServiceResult<CreateCircleResponse> {
        let name = CircleName::new(&request.name)?;
        let owner_id = UserId::parse(&request.owner_id)?;

        if self.ctx.user_repo().find_by_id(owner_id).await?.is_none() {
            return Err(DomainError::UserNotFound(owner_id).into());
        }

        let circle = Circle::new(name, owner_id);
        self.ensure_name_available(&circle).await?;

        self.ctx.circle_repo().save(&circle).await?;

        info!(circle_id = %circle.id(), owner_id = %owner_id, "Circle created");

        Ok(CreateCircleResponse {
            circle_id: circle.id().to_string(),
        })
    }

    /// Get circle details with capacity figures
    #[instrument(skip(self))]
    pub async fn get_circle(&self, circle_id: &str) -> ServiceResult<CircleResponse> {
        let circle = self.get_circle_entity(CircleId::parse(circle_id)?).await?;
        let members = self.load_members(&circle).await?;

        let policy = self.ctx.member_limit_policy();
        Ok(CircleResponse::from(CircleWithCapacity::evaluate(
            circle, &members, &policy,
        )))
    }

    /// Get circle entity by ID
    #[instrument(skip(self))]
    pub async fn get_circle_entity(&self, circle_id: CircleId) -> ServiceResult<Circle> {
        Ok(self
            .ctx
            .circle_repo()
            .find_by_id(circle_id)
            .await?
            .ok_or(DomainError::CircleNotFound(circle_id))?)
    }

    /// Add a user to a circle
    ///
    /// Adding a user who is already a member succeeds without changes.
    #[instrument(skip(self, request), fields(circle_id = %request.circle_id, user_id = %request.user_id))]
    pub async fn add_member(&self, request: AddMemberRequest) -> ServiceResult<()> {
        let circle_id = CircleId::parse(&request.circle_id)?;
        let user_id = UserId::parse(&request.user_id)?;

        let mut circle = self.get_circle_entity(circle_id).await?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        if circle.is_owner(user_id) {
            return Err(DomainError::OwnerCannotBeMember(user_id).into());
        }
        if circle.is_member(user_id) {
            debug!("User is already a member");
            return Ok(());
        }

        let members = self.load_members(&circle).await?;
        let policy = self.ctx.member_limit_policy();
        if !policy.can_add_member(&members) {
            let max = policy.max_limit(&members);
            warn!(max, participants = members.total_participants(), "Circle is full");
            return Err(DomainError::CircleFull { max }.into());
        }

        circle.add_member(user_id)?;
        self.ctx.circle_repo().save(&circle).await?;

        info!(
            participants = circle.total_participants(),
            "Member added to circle"
        );

        Ok(())
    }

    /// Remove a member from a circle; removing a non-member is a no-op
    #[instrument(skip(self))]
    pub async fn remove_member(&self, circle_id: &str, user_id: &str) -> ServiceResult<()> {
        let circle_id = CircleId::parse(circle_id)?;
        let user_id = UserId::parse(user_id)?;

        let mut circle = self.get_circle_entity(circle_id).await?;
        if !circle.is_member(user_id) {
            debug!("User is not a member, nothing to remove");
            return Ok(());
        }

        circle.remove_member(user_id);
        self.ctx.circle_repo().save(&circle).await?;

        info!(circle_id = %circle_id, user_id = %user_id, "Member removed from circle");

        Ok(())
    }

    /// Rename a circle; the new name must not belong to another circle
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn rename_circle(
        &self,
        circle_id: &str,
        request: RenameCircleRequest,
    ) -> ServiceResult<CircleResponse> {
        let circle_id = CircleId::parse(circle_id)?;
        let name = CircleName::new(&request.name)?;

        let mut circle = self.get_circle_entity(circle_id).await?;
        circle.change_name(name);
        self.ensure_name_available(&circle).await?;

        self.ctx.circle_repo().save(&circle).await?;

        info!(circle_id = %circle_id, name = %circle.name(), "Circle renamed");

        let members = self.load_members(&circle).await?;
        let policy = self.ctx.member_limit_policy();
        Ok(CircleResponse::from(CircleWithCapacity::evaluate(
            circle, &members, &policy,
        )))
    }

    /// Delete a circle and its memberships
    #[instrument(skip(self))]
    pub async fn delete_circle(&self, circle_id: &str) -> ServiceResult<()> {
        let circle_id = CircleId::parse(circle_id)?;

        self.ctx.circle_repo().delete(circle_id).await?;

        info!(circle_id = %circle_id, "Circle deleted");

        Ok(())
    }

    /// Circles recommended right now
    pub async fn get_recommended_circles(&self) -> ServiceResult<Vec<RecommendedCircleResponse>> {
        self.get_recommended_circles_at(Utc::now()).await
    }

    /// Circles recommended as of `reference_time`
    #[instrument(skip(self))]
    pub async fn get_recommended_circles_at(
        &self,
        reference_time: DateTime<Utc>,
    ) -> ServiceResult<Vec<RecommendedCircleResponse>> {
        let spec = RecommendedCircleSpecification::with_criteria(
            reference_time,
            self.ctx.recommendation_criteria(),
        );

        let circles = self.ctx.circle_repo().find_by_specification(&spec).await?;

        debug!(count = circles.len(), "Recommended circles found");

        Ok(circles.iter().map(RecommendedCircleResponse::from).collect())
    }

    // === Helpers ===

    async fn ensure_name_available(&self, circle: &Circle) -> ServiceResult<()> {
        let existence = CircleExistenceService::new(self.ctx.circle_repo());
        if existence.exists(Some(circle)).await? {
            return Err(DomainError::CircleNameTaken(circle.name().to_string()).into());
        }
        Ok(())
    }

    /// Load the owner and members as full users
    ///
    /// The owner must exist. Member ids the store no longer knows are skipped.
    async fn load_members(&self, circle: &Circle) -> ServiceResult<CircleMembers> {
        let users = self.ctx.user_repo();

        let owner = users
            .find_by_id(circle.owner_id())
            .await?
            .ok_or(DomainError::OwnerNotFound(circle.owner_id()))?;

        let mut members = Vec::with_capacity(circle.member_count());
        for &member_id in circle.member_ids() {
            match users.find_by_id(member_id).await? {
                Some(user) => members.push(user),
                None => warn!(member_id = %member_id, "Circle member not found, skipping"),
            }
        }

        Ok(CircleMembers::new(Some(owner), members))
    }
}
