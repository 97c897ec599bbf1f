//! Circle name - trimmed, 3 to 50 characters

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Validated circle name
///
/// Surrounding whitespace is trimmed and the length bounds are checked
/// against the trimmed value, counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircleName(String);

impl CircleName {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 50;

    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCircleName);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DomainError::CircleNameTooLong {
                max: Self::MAX_LENGTH,
                value: trimmed.to_string(),
            });
        }
        if length < Self::MIN_LENGTH {
            return Err(DomainError::CircleNameTooShort {
                min: Self::MIN_LENGTH,
                value: trimmed.to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CircleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CircleName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CircleName> for String {
    fn from(name: CircleName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_is_trimmed() {
        let name = CircleName::new("  Chess Club  ").unwrap();
        assert_eq!(name.as_str(), "Chess Club");
        assert_eq!(name, CircleName::new("Chess Club").unwrap());
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(matches!(CircleName::new(""), Err(DomainError::EmptyCircleName)));
        assert!(matches!(CircleName::new("   \t"), Err(DomainError::EmptyCircleName)));
    }

    #[test]
    fn test_length_bounds() {
        assert!(CircleName::new("abc").is_ok());
        assert!(CircleName::new(&"a".repeat(50)).is_ok());

        assert!(matches!(
            CircleName::new("ab"),
            Err(DomainError::CircleNameTooShort { min: 3, .. })
        ));
        assert!(matches!(
            CircleName::new(&"a".repeat(51)),
            Err(DomainError::CircleNameTooLong { max: 50, .. })
        ));
    }

    #[test]
    fn test_bounds_apply_to_trimmed_value() {
        // Two visible characters padded to length 5 are still too short
        assert!(matches!(
            CircleName::new(" ab  "),
            Err(DomainError::CircleNameTooShort { .. })
        ));

        // Padding does not count against the upper bound
        let padded = format!("  {}  ", "a".repeat(50));
        assert_eq!(CircleName::new(&padded).unwrap().as_str().len(), 50);
    }

    #[test]
    fn test_length_counts_characters() {
        // Three multi-byte characters
        assert!(CircleName::new("囲碁会").is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let name: CircleName = serde_json::from_str("\" Chess Club \"").unwrap();
        assert_eq!(name.as_str(), "Chess Club");
        assert!(serde_json::from_str::<CircleName>("\"ab\"").is_err());
    }
}
