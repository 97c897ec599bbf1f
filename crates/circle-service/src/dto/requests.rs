//! Request DTOs
//!
//! Fields are raw strings; the services build value objects from them, so
//! malformed input fails with the matching `DomainError`.

use serde::Deserialize;

// ============================================================================
// Circle Requests
// ============================================================================

/// Create a circle owned by an existing user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCircleRequest {
    pub name: String,
    pub owner_id: String,
}

/// Add a user to a circle
#[derive(Debug, Clone, Deserialize)]
pub struct AddMemberRequest {
    pub circle_id: String,
    pub user_id: String,
}

/// Rename a circle
#[derive(Debug, Clone, Deserialize)]
pub struct RenameCircleRequest {
    pub name: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Register a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_premium: bool,
}

/// Partial user update
///
/// The name changes only when both `first_name` and `last_name` are given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_premium_defaults_to_false() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert!(!req.is_premium);
    }

    #[test]
    fn test_update_user_fields_are_optional() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"email":"new@example.com"}"#).unwrap();
        assert!(req.first_name.is_none());
        assert_eq!(req.email.as_deref(), Some("new@example.com"));
    }
}
