//! User entity - identity, name, email and premium flag

use crate::value_objects::{Email, FullName, UserId};

/// User entity
///
/// Circles only ever read `id`, `name` and `is_premium`; the rest of the
/// user lifecycle belongs to the user use cases.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: FullName,
    email: Email,
    is_premium: bool,
}

impl User {
    /// Create a new User with a fresh identifier
    pub fn new(name: FullName, email: Email, is_premium: bool) -> Self {
        Self::reconstruct(UserId::new(), name, email, is_premium)
    }

    /// Rebuild a User from stored fields
    pub fn reconstruct(id: UserId, name: FullName, email: Email, is_premium: bool) -> Self {
        Self {
            id,
            name,
            email,
            is_premium,
        }
    }

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &FullName {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn change_name(&mut self, name: FullName) {
        self.name = name;
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}
