//! In-memory implementation of CircleRepository

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use circle_core::{
    Circle, CircleId, CircleName, CircleRepository, CircleSpecification, DomainError, RepoResult,
};

/// In-memory circle store
#[derive(Debug, Default)]
pub struct MemoryCircleRepository {
    circles: RwLock<HashMap<CircleId, Circle>>,
}

impl MemoryCircleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored circles
    pub fn len(&self) -> usize {
        self.circles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.read().is_empty()
    }

    // Oldest first so listings are stable across calls.
    fn sorted(mut circles: Vec<Circle>) -> Vec<Circle> {
        circles.sort_by_key(|c| (c.created_at(), c.id()));
        circles
    }
}

#[async_trait]
impl CircleRepository for MemoryCircleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CircleId) -> RepoResult<Option<Circle>> {
        Ok(self.circles.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &CircleName) -> RepoResult<Option<Circle>> {
        Ok(self
            .circles
            .read()
            .values()
            .find(|c| c.name() == name)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Circle>> {
        let circles = self.circles.read().values().cloned().collect();
        Ok(Self::sorted(circles))
    }

    #[instrument(skip(self, spec))]
    async fn find_by_specification(
        &self,
        spec: &dyn CircleSpecification,
    ) -> RepoResult<Vec<Circle>> {
        let circles = self
            .circles
            .read()
            .values()
            .filter(|c| spec.is_satisfied_by(c))
            .cloned()
            .collect();
        Ok(Self::sorted(circles))
    }

    #[instrument(skip(self, circle), fields(circle_id = %circle.id()))]
    async fn save(&self, circle: &Circle) -> RepoResult<()> {
        let mut circles = self.circles.write();

        let taken = circles
            .values()
            .any(|c| c.id() != circle.id() && c.name() == circle.name());
        if taken {
            return Err(DomainError::CircleNameTaken(circle.name().to_string()));
        }

        circles.insert(circle.id(), circle.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CircleId) -> RepoResult<()> {
        self.circles
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CircleNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use circle_core::{filter_circles, UserId};

    fn circle(name: &str) -> Circle {
        Circle::new(CircleName::new(name).unwrap(), UserId::new())
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = MemoryCircleRepository::new();
        let c = circle("Chess Club");
        repo.save(&c).await.unwrap();

        let by_id = repo.find_by_id(c.id()).await.unwrap().unwrap();
        assert_eq!(by_id.name().as_str(), "Chess Club");

        let by_name = repo.find_by_name(c.name()).await.unwrap().unwrap();
        assert_eq!(by_name.id(), c.id());

        assert!(repo.find_by_id(CircleId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_members() {
        let repo = MemoryCircleRepository::new();
        let mut c = circle("Chess Club");
        repo.save(&c).await.unwrap();

        let member = UserId::new();
        c.add_member(member).unwrap();
        repo.save(&c).await.unwrap();

        let stored = repo.find_by_id(c.id()).await.unwrap().unwrap();
        assert_eq!(stored.member_ids(), &[member]);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let repo = MemoryCircleRepository::new();
        repo.save(&circle("Chess Club")).await.unwrap();

        let err = repo.save(&circle("Chess Club")).await.unwrap_err();
        assert!(matches!(err, DomainError::CircleNameTaken(ref n) if n == "Chess Club"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_specification_matches_in_memory_filter() {
        let repo = MemoryCircleRepository::new();
        let mut big = circle("Big Circle");
        for _ in 0..5 {
            big.add_member(UserId::new()).unwrap();
        }
        repo.save(&big).await.unwrap();
        repo.save(&circle("Small Circle")).await.unwrap();

        let spec = |c: &Circle| c.member_count() >= 5;
        let via_repo = repo.find_by_specification(&spec).await.unwrap();
        let via_filter = filter_circles(repo.find_all().await.unwrap(), &spec);

        let ids = |cs: &[Circle]| cs.iter().map(Circle::id).collect::<Vec<_>>();
        assert_eq!(ids(&via_repo), ids(&via_filter));
        assert_eq!(ids(&via_repo), vec![big.id()]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryCircleRepository::new();
        let c = circle("Chess Club");
        repo.save(&c).await.unwrap();

        repo.delete(c.id()).await.unwrap();
        assert!(repo.is_empty());
        assert!(matches!(
            repo.delete(c.id()).await,
            Err(DomainError::CircleNotFound(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_with_same_name() {
        let repo = Arc::new(MemoryCircleRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save(&circle("Chess Club")).await })
            })
            .collect();

        let mut saved = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => saved += 1,
                Err(DomainError::CircleNameTaken(name)) => assert_eq!(name, "Chess Club"),
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(saved, 1);
        assert_eq!(repo.len(), 1);
    }
}
