//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CircleId, UserId};

/// Which part of a [`FullName`](crate::value_objects::FullName) failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    FirstName,
    LastName,
}

impl NameField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
        }
    }
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification attached to every domain error
///
/// Outer layers map this to a transport severity (e.g. an HTTP status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Conflict,
    BusinessRule,
    Infrastructure,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Circle not found: {0}")]
    CircleNotFound(CircleId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Circle owner not found: {0}")]
    OwnerNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{entity} ID cannot be empty")]
    EmptyIdentifier { entity: &'static str },

    #[error("Invalid {entity} ID format: {value}")]
    InvalidIdentifier { entity: &'static str, value: String },

    #[error("Circle name cannot be empty")]
    EmptyCircleName,

    #[error("Circle name must be at least {min} characters: {value}")]
    CircleNameTooShort { min: usize, value: String },

    #[error("Circle name cannot exceed {max} characters: {value}")]
    CircleNameTooLong { max: usize, value: String },

    #[error("{field} cannot be empty")]
    EmptyName { field: NameField },

    #[error("{field} cannot exceed {max} characters: {value}")]
    NameTooLong {
        field: NameField,
        max: usize,
        value: String,
    },

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Circle name already exists: {0}")]
    CircleNameTaken(String),

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Already a member of this circle: {0}")]
    AlreadyMember(UserId),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Circle owner cannot be a member: {0}")]
    OwnerCannotBeMember(UserId),

    #[error("Circle is full: maximum {max} participants (including owner) allowed")]
    CircleFull { max: usize },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CircleNotFound(_) => "UNKNOWN_CIRCLE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::OwnerNotFound(_) => "UNKNOWN_OWNER",

            // Validation
            Self::EmptyIdentifier { .. } => "EMPTY_IDENTIFIER",
            Self::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            Self::EmptyCircleName => "EMPTY_CIRCLE_NAME",
            Self::CircleNameTooShort { .. } => "CIRCLE_NAME_TOO_SHORT",
            Self::CircleNameTooLong { .. } => "CIRCLE_NAME_TOO_LONG",
            Self::EmptyName { .. } => "EMPTY_NAME",
            Self::NameTooLong { .. } => "NAME_TOO_LONG",
            Self::EmptyEmail => "EMPTY_EMAIL",
            Self::InvalidEmail(_) => "INVALID_EMAIL",

            // Conflict
            Self::CircleNameTaken(_) => "CIRCLE_NAME_TAKEN",
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::AlreadyMember(_) => "ALREADY_MEMBER",

            // Business Rules
            Self::OwnerCannotBeMember(_) => "OWNER_CANNOT_BE_MEMBER",
            Self::CircleFull { .. } => "CIRCLE_FULL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CircleNotFound(_) | Self::UserNotFound(_) | Self::OwnerNotFound(_) => {
                ErrorKind::NotFound
            }

            Self::EmptyIdentifier { .. }
            | Self::InvalidIdentifier { .. }
            | Self::EmptyCircleName
            | Self::CircleNameTooShort { .. }
            | Self::CircleNameTooLong { .. }
            | Self::EmptyName { .. }
            | Self::NameTooLong { .. }
            | Self::EmptyEmail
            | Self::InvalidEmail(_) => ErrorKind::Validation,

            Self::CircleNameTaken(_) | Self::UserAlreadyExists(_) | Self::AlreadyMember(_) => {
                ErrorKind::Conflict
            }

            Self::OwnerCannotBeMember(_) | Self::CircleFull { .. } => ErrorKind::BusinessRule,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Infrastructure,
        }
    }

    /// Check if this is a "not found" error
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    #[inline]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is a conflict error
    #[inline]
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    /// Check if this is a business rule violation
    #[inline]
    pub fn is_business_rule(&self) -> bool {
        self.kind() == ErrorKind::BusinessRule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::CircleNotFound(CircleId::new());
        assert_eq!(err.code(), "UNKNOWN_CIRCLE");

        let err = DomainError::CircleFull { max: 30 };
        assert_eq!(err.code(), "CIRCLE_FULL");
    }

    #[test]
    fn test_kinds() {
        assert!(DomainError::UserNotFound(UserId::new()).is_not_found());
        assert!(DomainError::EmptyCircleName.is_validation());
        assert!(DomainError::CircleNameTaken("Chess Club".to_string()).is_conflict());
        assert!(DomainError::OwnerCannotBeMember(UserId::new()).is_business_rule());
        assert_eq!(
            DomainError::DatabaseError("boom".to_string()).kind(),
            ErrorKind::Infrastructure
        );
        assert!(!DomainError::CircleFull { max: 30 }.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CircleFull { max: 50 };
        assert_eq!(
            err.to_string(),
            "Circle is full: maximum 50 participants (including owner) allowed"
        );

        let err = DomainError::NameTooLong {
            field: NameField::LastName,
            max: 50,
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "last name cannot exceed 50 characters: x");

        let err = DomainError::EmptyIdentifier { entity: "circle" };
        assert_eq!(err.to_string(), "circle ID cannot be empty");
    }

    #[test]
    fn test_errors_carry_offending_value() {
        let err = DomainError::CircleNameTooShort {
            min: 3,
            value: "ab".to_string(),
        };
        match err {
            DomainError::CircleNameTooShort { min, value } => {
                assert_eq!(min, 3);
                assert_eq!(value, "ab");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
