//! Circle entity - aggregate root for a membership group

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{CircleId, CircleName, UserId};

/// Circle aggregate
///
/// The owner is never stored as a member, so the number of participants is
/// always `1 + member_count()`. Capacity is not checked here; callers ask
/// [`MemberLimitPolicy`](crate::specifications::MemberLimitPolicy) first.
#[derive(Debug, Clone)]
pub struct Circle {
    id: CircleId,
    name: CircleName,
    owner_id: UserId,
    member_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
}

impl Circle {
    /// Create a new Circle owned by `owner_id`, with no members
    pub fn new(name: CircleName, owner_id: UserId) -> Self {
        Self {
            id: CircleId::new(),
            name,
            owner_id,
            member_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a Circle from stored fields
    pub fn reconstruct(
        id: CircleId,
        name: CircleName,
        owner_id: UserId,
        member_ids: Vec<UserId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            member_ids,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> CircleId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CircleName {
        &self.name
    }

    #[inline]
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Member identifiers in insertion order (owner excluded)
    #[inline]
    pub fn member_ids(&self) -> &[UserId] {
        &self.member_ids
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.member_ids.len()
    }

    /// Owner plus members
    #[inline]
    pub fn total_participants(&self) -> usize {
        1 + self.member_ids.len()
    }

    pub fn change_name(&mut self, name: CircleName) {
        self.name = name;
    }

    /// Append a member
    ///
    /// Rejects the owner and ids that are already members. Capacity must
    /// have been checked by the caller.
    pub fn add_member(&mut self, user_id: UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            return Err(DomainError::OwnerCannotBeMember(user_id));
        }
        if self.is_member(user_id) {
            return Err(DomainError::AlreadyMember(user_id));
        }
        self.member_ids.push(user_id);
        Ok(())
    }

    /// Remove the first occurrence of `user_id`; does nothing if absent
    pub fn remove_member(&mut self, user_id: UserId) {
        if let Some(pos) = self.member_ids.iter().position(|&id| id == user_id) {
            self.member_ids.remove(pos);
        }
    }

    #[inline]
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.member_ids.contains(&user_id)
    }

    #[inline]
    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Circle {}
