//! Full name - first and last name, each trimmed and non-empty

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, NameField};

/// A person's full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    /// Maximum length of each part, in characters
    pub const MAX_PART_LENGTH: usize = 50;

    pub fn new(first_name: &str, last_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: validate_part(first_name, NameField::FirstName)?,
            last_name: validate_part(last_name, NameField::LastName)?,
        })
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

fn validate_part(value: &str, field: NameField) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName { field });
    }
    if trimmed.chars().count() > FullName::MAX_PART_LENGTH {
        return Err(DomainError::NameTooLong {
            field,
            max: FullName::MAX_PART_LENGTH,
            value: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let name = FullName::new(" Ada ", "Lovelace").unwrap();
        assert_eq!(name.first_name(), "Ada");
        assert_eq!(name.to_string(), "Ada Lovelace");
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(
            FullName::new("Ada", "Lovelace").unwrap(),
            FullName::new("Ada ", " Lovelace").unwrap()
        );
        assert_ne!(
            FullName::new("Ada", "Lovelace").unwrap(),
            FullName::new("Ada", "Byron").unwrap()
        );
    }

    #[test]
    fn test_empty_parts() {
        assert!(matches!(
            FullName::new("  ", "Lovelace"),
            Err(DomainError::EmptyName { field: NameField::FirstName })
        ));
        assert!(matches!(
            FullName::new("Ada", ""),
            Err(DomainError::EmptyName { field: NameField::LastName })
        ));
    }

    #[test]
    fn test_part_too_long() {
        assert!(FullName::new(&"a".repeat(50), "Lovelace").is_ok());
        assert!(matches!(
            FullName::new("Ada", &"b".repeat(51)),
            Err(DomainError::NameTooLong { field: NameField::LastName, max: 50, .. })
        ));
    }
}
