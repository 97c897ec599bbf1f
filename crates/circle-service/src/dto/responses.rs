//! Response DTOs
//!
//! Identifiers are serialized in their hyphenated UUID text form.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Circle Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreateCircleResponse {
    pub circle_id: String,
}

/// Circle details with capacity figures
#[derive(Debug, Clone, Serialize)]
pub struct CircleResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub member_ids: Vec<String>,
    pub member_count: usize,
    pub total_participants: usize,
    pub max_participants: usize,
    /// Negative when a stored circle is already over its limit
    pub available_slots: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedCircleResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub member_count: usize,
    pub total_participants: usize,
    /// Creation date as `YYYY-MM-DD`
    pub created_on: String,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_premium: bool,
}
