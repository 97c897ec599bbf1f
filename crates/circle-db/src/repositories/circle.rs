//! PostgreSQL implementation of CircleRepository
//!
//! Circles are always read with their membership in one statement
//! (`circles LEFT JOIN circle_members`), so a reader sees a single
//! snapshot. `save` replaces the membership rows in the same transaction
//! as the circle upsert.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use circle_core::{
    filter_circles, Circle, CircleId, CircleName, CircleRepository, CircleSpecification,
    DomainError, RepoResult,
};

use crate::mappers::circles_from_joined_rows;
use crate::models::CircleMemberRow;

use super::error::{map_db_error, map_unique_violation};

const SELECT_CIRCLES: &str = r"
    SELECT c.id, c.name, c.owner_id, c.created_at,
           m.user_id AS member_id, m.position
    FROM circles c
    LEFT JOIN circle_members m ON m.circle_id = c.id
";

const ORDER_CIRCLES: &str = " ORDER BY c.created_at, c.id, m.position";

/// PostgreSQL implementation of CircleRepository
#[derive(Clone)]
pub struct PgCircleRepository {
    pool: PgPool,
}

impl PgCircleRepository {
    /// Create a new PgCircleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_circle(&self, filter: &str, bind: Bind<'_>) -> RepoResult<Option<Circle>> {
        let sql = format!("{SELECT_CIRCLES} WHERE {filter}{ORDER_CIRCLES}");
        let query = sqlx::query_as::<_, CircleMemberRow>(&sql);
        let query = match bind {
            Bind::Id(id) => query.bind(id),
            Bind::Name(name) => query.bind(name),
        };

        let rows = query.fetch_all(&self.pool).await.map_err(map_db_error)?;
        Ok(circles_from_joined_rows(rows)?.into_iter().next())
    }
}

enum Bind<'a> {
    Id(Uuid),
    Name(&'a str),
}

#[async_trait]
impl CircleRepository for PgCircleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CircleId) -> RepoResult<Option<Circle>> {
        self.fetch_one_circle("c.id = $1", Bind::Id(id.into_inner()))
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &CircleName) -> RepoResult<Option<Circle>> {
        self.fetch_one_circle("c.name = $1", Bind::Name(name.as_str()))
            .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Circle>> {
        let sql = format!("{SELECT_CIRCLES}{ORDER_CIRCLES}");
        let rows = sqlx::query_as::<_, CircleMemberRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        circles_from_joined_rows(rows)
    }

    #[instrument(skip(self, spec))]
    async fn find_by_specification(
        &self,
        spec: &dyn CircleSpecification,
    ) -> RepoResult<Vec<Circle>> {
        let circles = self.find_all().await?;
        let total = circles.len();
        let matching = filter_circles(circles, spec);
        debug!(total, matching = matching.len(), "filtered circles by specification");
        Ok(matching)
    }

    #[instrument(skip(self, circle), fields(circle_id = %circle.id()))]
    async fn save(&self, circle: &Circle) -> RepoResult<()> {
        let member_ids: Vec<Uuid> = circle.member_ids().iter().map(|id| id.into_inner()).collect();
        let count = i32::try_from(member_ids.len()).map_err(|_| {
            DomainError::InternalError(format!("too many members: {}", member_ids.len()))
        })?;
        let positions: Vec<i32> = (0..count).collect();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO circles (id, name, owner_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, updated_at = NOW()
            ",
        )
        .bind(circle.id().into_inner())
        .bind(circle.name().as_str())
        .bind(circle.owner_id().into_inner())
        .bind(circle.created_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::CircleNameTaken(circle.name().to_string()))
        })?;

        sqlx::query("DELETE FROM circle_members WHERE circle_id = $1")
            .bind(circle.id().into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if !member_ids.is_empty() {
            sqlx::query(
                r"
                INSERT INTO circle_members (circle_id, user_id, position)
                SELECT $1, m.user_id, m.position
                FROM UNNEST($2::uuid[], $3::int4[]) AS m(user_id, position)
                ",
            )
            .bind(circle.id().into_inner())
            .bind(&member_ids)
            .bind(&positions)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CircleId) -> RepoResult<()> {
        // circle_members rows go with the circle (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM circles WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CircleNotFound(id));
        }

        Ok(())
    }
}
