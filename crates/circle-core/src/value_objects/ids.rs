//! Entity identifiers - UUID-backed, textual form is the 36-character hyphenated UUID
//!
//! Fresh identifiers are generated with [`CircleId::new`] / [`UserId::new`].
//! Identifiers read back from storage go through `parse`, which rejects
//! empty and malformed input with a typed [`DomainError`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Name of the entity this identifier belongs to, used in errors
            pub const ENTITY: &'static str = $entity;

            /// Generate a new random identifier
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Reconstruct an identifier from its stored textual form
            pub fn parse(value: &str) -> Result<Self, DomainError> {
                if value.is_empty() {
                    return Err(DomainError::EmptyIdentifier { entity: Self::ENTITY });
                }
                // Only the hyphenated form is accepted; it is the only form we emit.
                if value.len() != 36 {
                    return Err(DomainError::InvalidIdentifier {
                        entity: Self::ENTITY,
                        value: value.to_string(),
                    });
                }
                Uuid::try_parse(value)
                    .map(Self)
                    .map_err(|_| DomainError::InvalidIdentifier {
                        entity: Self::ENTITY,
                        value: value.to_string(),
                    })
            }

            /// Wrap an already-typed UUID (e.g. a database column)
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Self::parse(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

uuid_identifier!(
    /// Identifier of a circle
    CircleId,
    "circle"
);

uuid_identifier!(
    /// Identifier of a user
    UserId,
    "user"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(CircleId::new(), CircleId::new());
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn test_textual_form_is_36_chars() {
        let id = CircleId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }

    #[test]
    fn test_round_trip() {
        let id = UserId::new();
        let parsed = UserId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        let circle_id = CircleId::new();
        let parsed: CircleId = circle_id.to_string().parse().unwrap();
        assert_eq!(parsed, circle_id);
    }

    #[test]
    fn test_parse_empty() {
        let err = CircleId::parse("").unwrap_err();
        assert!(matches!(err, DomainError::EmptyIdentifier { entity: "circle" }));
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_malformed() {
        let err = UserId::parse("not-a-uuid").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidIdentifier { entity: "user", ref value } if value == "not-a-uuid"
        ));

        // UUID-shaped but with a non-hex character
        assert!(UserId::parse("zzzzzzzz-e29b-41d4-a716-446655440000").is_err());
        // Simple (unhyphenated) form is not accepted
        assert!(UserId::parse("550e8400e29b41d4a716446655440000").is_err());
    }

    #[test]
    fn test_parse_valid_literal() {
        let id = CircleId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_serialize_as_string() {
        let id = UserId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
