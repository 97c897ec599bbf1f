//! User model -> entity mapper

use circle_core::{DomainError, Email, FullName, User, UserId};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let corrupt =
            |e: DomainError| DomainError::DatabaseError(format!("corrupt user row {}: {e}", model.id));

        let name = FullName::new(&model.first_name, &model.last_name).map_err(corrupt)?;
        let email = Email::new(&model.email).map_err(corrupt)?;

        Ok(User::reconstruct(
            UserId::from_uuid(model.id),
            name,
            email,
            model.is_premium,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn model(email: &str) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: email.to_string(),
            is_premium: true,
        }
    }

    #[test]
    fn test_valid_row() {
        let row = model("grace@example.com");
        let id = row.id;
        let user = User::try_from(row).unwrap();
        assert_eq!(user.id().into_inner(), id);
        assert_eq!(user.name().to_string(), "Grace Hopper");
        assert!(user.is_premium());
    }

    #[test]
    fn test_corrupt_row() {
        let err = User::try_from(model("not-an-email")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
