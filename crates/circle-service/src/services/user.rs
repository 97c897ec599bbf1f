//! User service
//!
//! Handles user registration, profile updates and removal.

use tracing::{info, instrument};

use circle_core::{DomainError, Email, FullName, User, UserExistenceService, UserId};

use crate::dto::{CreateUserRequest, CreateUserResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a user; the full name must be unused
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<CreateUserResponse> {
        let name = FullName::new(&request.first_name, &request.last_name)?;
        let email = Email::new(&request.email)?;

        let user = User::new(name, email, request.is_premium);
        self.ensure_name_available(&user).await?;

        self.ctx.user_repo().save(&user).await?;

        info!(user_id = %user.id(), is_premium = user.is_premium(), "User created");

        Ok(CreateUserResponse {
            user_id: user.id().to_string(),
        })
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(UserId::parse(user_id)?).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    /// Update name and/or email
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.get_user_entity(UserId::parse(user_id)?).await?;

        // Name only changes when both parts are present
        if let (Some(first), Some(last)) = (&request.first_name, &request.last_name) {
            user.change_name(FullName::new(first, last)?);
            self.ensure_name_available(&user).await?;
        }

        if let Some(email) = &request.email {
            user.change_email(Email::new(email)?);
        }

        self.ctx.user_repo().save(&user).await?;

        info!(user_id = %user.id(), "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> ServiceResult<()> {
        let user_id = UserId::parse(user_id)?;

        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "User deleted");

        Ok(())
    }

    async fn ensure_name_available(&self, user: &User) -> ServiceResult<()> {
        let existence = UserExistenceService::new(self.ctx.user_repo());
        if existence.exists(user).await? {
            return Err(DomainError::UserAlreadyExists(user.name().to_string()).into());
        }
        Ok(())
    }
}
