//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use circle_core::{Circle, CircleMembers, MemberLimitPolicy, User};

use super::responses::{CircleResponse, RecommendedCircleResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            first_name: user.name().first_name().to_string(),
            last_name: user.name().last_name().to_string(),
            email: user.email().to_string(),
            is_premium: user.is_premium(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Circle Mappers
// ============================================================================

/// Circle paired with the capacity figures computed for it
#[derive(Debug)]
pub struct CircleWithCapacity {
    pub circle: Circle,
    pub max_participants: usize,
    pub available_slots: i64,
}

impl CircleWithCapacity {
    /// Evaluate `policy` against the loaded participants of `circle`
    pub fn evaluate(circle: Circle, members: &CircleMembers, policy: &MemberLimitPolicy) -> Self {
        Self {
            circle,
            max_participants: policy.max_limit(members),
            available_slots: policy.available_slots(members),
        }
    }
}

impl From<CircleWithCapacity> for CircleResponse {
    fn from(value: CircleWithCapacity) -> Self {
        let circle = value.circle;
        Self {
            id: circle.id().to_string(),
            name: circle.name().to_string(),
            owner_id: circle.owner_id().to_string(),
            member_ids: circle.member_ids().iter().map(ToString::to_string).collect(),
            member_count: circle.member_count(),
            total_participants: circle.total_participants(),
            max_participants: value.max_participants,
            available_slots: value.available_slots,
            created_at: circle.created_at(),
        }
    }
}

impl From<&Circle> for RecommendedCircleResponse {
    fn from(circle: &Circle) -> Self {
        Self {
            id: circle.id().to_string(),
            name: circle.name().to_string(),
            owner_id: circle.owner_id().to_string(),
            member_count: circle.member_count(),
            total_participants: circle.total_participants(),
            created_on: circle.created_at().format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use circle_core::{CapacityTiers, CircleId, CircleName, Email, FullName, UserId};

    #[test]
    fn test_recommended_response_date() {
        let created = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 23, 15, 0).unwrap();
        let circle = Circle::reconstruct(
            CircleId::new(),
            CircleName::new("Chess Club").unwrap(),
            UserId::new(),
            vec![UserId::new()],
            created,
        );

        let response = RecommendedCircleResponse::from(&circle);
        assert_eq!(response.created_on, "2024-03-09");
        assert_eq!(response.member_count, 1);
        assert_eq!(response.total_participants, 2);
    }

    #[test]
    fn test_circle_response_capacity() {
        let owner = User::new(
            FullName::new("Ada", "Lovelace").unwrap(),
            Email::new("ada@example.com").unwrap(),
            false,
        );
        let circle = Circle::new(CircleName::new("Chess Club").unwrap(), owner.id());
        let members = CircleMembers::for_circle(&circle, [owner]);
        let policy = MemberLimitPolicy::new(CapacityTiers::default());

        let response = CircleResponse::from(CircleWithCapacity::evaluate(circle, &members, &policy));
        assert_eq!(response.max_participants, 30);
        assert_eq!(response.available_slots, 29);
        assert!(response.member_ids.is_empty());
    }
}
