//! CircleMembers - loaded owner and members of a circle, for policy evaluation
//!
//! Built fresh by a use case whenever the capacity policy needs premium
//! flags. Never persisted.

use super::{Circle, User};

/// Owner and members of one circle as full [`User`] values
#[derive(Debug, Clone, Default)]
pub struct CircleMembers {
    owner: Option<User>,
    members: Vec<User>,
}

impl CircleMembers {
    /// `owner` is `None` when the owner record could not be loaded
    pub fn new(owner: Option<User>, members: Vec<User>) -> Self {
        Self { owner, members }
    }

    /// Assemble from already-loaded users, keeping only those referenced by `circle`
    ///
    /// Users the store could not find are simply absent, so premium counts
    /// undercount instead of failing.
    pub fn for_circle<I>(circle: &Circle, users: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        let mut owner = None;
        let mut members = Vec::with_capacity(circle.member_count());
        for user in users {
            if circle.is_owner(user.id()) {
                owner = Some(user);
            } else if circle.is_member(user.id()) {
                members.push(user);
            }
        }
        Self { owner, members }
    }

    #[inline]
    pub fn owner(&self) -> Option<&User> {
        self.owner.as_ref()
    }

    #[inline]
    pub fn members(&self) -> &[User] {
        &self.members
    }

    /// Premium owner (if loaded) plus premium members
    pub fn count_premium_members(&self) -> usize {
        let owner = usize::from(self.owner.as_ref().is_some_and(User::is_premium));
        owner + self.members.iter().filter(|m| m.is_premium()).count()
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Owner plus members
    #[inline]
    pub fn total_participants(&self) -> usize {
        1 + self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{CircleName, Email, FullName};

    fn user(premium: bool) -> User {
        User::new(
            FullName::new("Test", "User").unwrap(),
            Email::new("test@example.com").unwrap(),
            premium,
        )
    }

    #[test]
    fn test_counts_owner_and_members() {
        let members = CircleMembers::new(Some(user(true)), vec![user(true), user(false), user(true)]);
        assert_eq!(members.count_premium_members(), 3);
        assert_eq!(members.member_count(), 3);
        assert_eq!(members.total_participants(), 4);
    }

    #[test]
    fn test_missing_owner_undercounts() {
        let members = CircleMembers::new(None, vec![user(true)]);
        assert_eq!(members.count_premium_members(), 1);
        assert_eq!(members.total_participants(), 2);
        assert!(members.owner().is_none());
    }

    #[test]
    fn test_empty() {
        let members = CircleMembers::default();
        assert_eq!(members.count_premium_members(), 0);
        assert_eq!(members.total_participants(), 1);
    }

    #[test]
    fn test_for_circle_sorts_owner_and_members() {
        let owner = user(true);
        let member = user(false);
        let stranger = user(true);

        let mut circle = Circle::new(CircleName::new("Chess Club").unwrap(), owner.id());
        circle.add_member(member.id()).unwrap();

        let members = CircleMembers::for_circle(&circle, vec![stranger, member.clone(), owner.clone()]);
        assert_eq!(members.owner(), Some(&owner));
        assert_eq!(members.members(), &[member]);
        assert_eq!(members.count_premium_members(), 1);
    }
}
