//! Circle name uniqueness check

use crate::entities::Circle;
use crate::traits::{CircleRepository, RepoResult};

/// Detects circles whose name is already used by a different circle
///
/// Advisory only: nothing stops another writer from saving the same name
/// between this check and the caller's save.
pub struct CircleExistenceService<'a> {
    circle_repo: &'a dyn CircleRepository,
}

impl<'a> CircleExistenceService<'a> {
    pub fn new(circle_repo: &'a dyn CircleRepository) -> Self {
        Self { circle_repo }
    }

    /// True when another circle (different id) already has this circle's name.
    ///
    /// `None` never exists.
    pub async fn exists(&self, circle: Option<&Circle>) -> RepoResult<bool> {
        let Some(circle) = circle else {
            return Ok(false);
        };

        let found = self.circle_repo.find_by_name(circle.name()).await?;
        Ok(found.is_some_and(|existing| existing.id() != circle.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specifications::CircleSpecification;
    use crate::value_objects::{CircleId, CircleName, UserId};
    use async_trait::async_trait;

    /// Repository holding a fixed list of circles
    struct FixedCircles(Vec<Circle>);

    #[async_trait]
    impl CircleRepository for FixedCircles {
        async fn find_by_id(&self, id: CircleId) -> RepoResult<Option<Circle>> {
            Ok(self.0.iter().find(|c| c.id() == id).cloned())
        }

        async fn find_by_name(&self, name: &CircleName) -> RepoResult<Option<Circle>> {
            Ok(self.0.iter().find(|c| c.name() == name).cloned())
        }

        async fn find_all(&self) -> RepoResult<Vec<Circle>> {
            Ok(self.0.clone())
        }

        async fn find_by_specification(
            &self,
            spec: &dyn CircleSpecification,
        ) -> RepoResult<Vec<Circle>> {
            Ok(self.0.iter().filter(|c| spec.is_satisfied_by(c)).cloned().collect())
        }

        async fn save(&self, _circle: &Circle) -> RepoResult<()> {
            Ok(())
        }

        async fn delete(&self, _id: CircleId) -> RepoResult<()> {
            Ok(())
        }
    }

    fn chess_club() -> Circle {
        Circle::new(CircleName::new("Chess Club").unwrap(), UserId::new())
    }

    #[tokio::test]
    async fn test_same_name_different_circle_exists() {
        let existing = chess_club();
        let repo = FixedCircles(vec![existing]);
        let service = CircleExistenceService::new(&repo);

        let candidate = chess_club();
        assert!(service.exists(Some(&candidate)).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_circle_does_not_exist() {
        let existing = chess_club();
        let repo = FixedCircles(vec![existing.clone()]);
        let service = CircleExistenceService::new(&repo);

        assert!(!service.exists(Some(&existing)).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_name_does_not_exist() {
        let repo = FixedCircles(vec![chess_club()]);
        let service = CircleExistenceService::new(&repo);

        let candidate = Circle::new(CircleName::new("Go Club").unwrap(), UserId::new());
        assert!(!service.exists(Some(&candidate)).await.unwrap());
    }

    #[tokio::test]
    async fn test_none_does_not_exist() {
        let repo = FixedCircles(vec![chess_club()]);
        let service = CircleExistenceService::new(&repo);
        assert!(!service.exists(None).await.unwrap());
    }
}
