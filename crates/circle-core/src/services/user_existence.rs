//! User full-name uniqueness check

use crate::entities::User;
use crate::traits::{RepoResult, UserRepository};

/// Detects users whose full name is already taken by another user
pub struct UserExistenceService<'a> {
    user_repo: &'a dyn UserRepository,
}

impl<'a> UserExistenceService<'a> {
    pub fn new(user_repo: &'a dyn UserRepository) -> Self {
        Self { user_repo }
    }

    /// True when a different user already has this user's full name
    pub async fn exists(&self, user: &User) -> RepoResult<bool> {
        let found = self.user_repo.find_by_name(user.name()).await?;
        Ok(found.is_some_and(|existing| existing.id() != user.id()))
    }
}
