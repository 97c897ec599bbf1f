//! Circle database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for circles table
#[derive(Debug, Clone, FromRow)]
pub struct CircleModel {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Database model for circle_members table
#[derive(Debug, Clone, FromRow)]
pub struct CircleMemberModel {
    pub circle_id: Uuid,
    pub user_id: Uuid,
    pub position: i32,
}

/// One row of `circles LEFT JOIN circle_members`
///
/// A circle without members yields a single row with `member_id = NULL`.
#[derive(Debug, Clone, FromRow)]
pub struct CircleMemberRow {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub member_id: Option<Uuid>,
    pub position: Option<i32>,
}

impl CircleMemberRow {
    /// Split into the circle part and the optional membership part
    pub fn split(self) -> (CircleModel, Option<CircleMemberModel>) {
        let member = self
            .member_id
            .zip(self.position)
            .map(|(user_id, position)| CircleMemberModel {
                circle_id: self.id,
                user_id,
                position,
            });
        let circle = CircleModel {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            created_at: self.created_at,
        };
        (circle, member)
    }
}
