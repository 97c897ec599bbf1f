//! Membership capacity policy
//!
//! The maximum number of participants (owner included) depends on how many
//! of the current participants are premium users:
//!
//! | premium participants | max participants |
//! |----------------------|------------------|
//! | < 10                 | 30               |
//! | >= 10                | 50               |

use crate::entities::CircleMembers;

/// Capacity tiers used by [`MemberLimitPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityTiers {
    /// Max participants below the premium threshold
    pub basic_limit: usize,
    /// Max participants at or above the premium threshold
    pub premium_limit: usize,
    /// Premium participants needed to unlock `premium_limit`
    pub premium_threshold: usize,
}

impl CapacityTiers {
    pub const DEFAULT_BASIC_LIMIT: usize = 30;
    pub const DEFAULT_PREMIUM_LIMIT: usize = 50;
    pub const DEFAULT_PREMIUM_THRESHOLD: usize = 10;
}

impl Default for CapacityTiers {
    fn default() -> Self {
        Self {
            basic_limit: Self::DEFAULT_BASIC_LIMIT,
            premium_limit: Self::DEFAULT_PREMIUM_LIMIT,
            premium_threshold: Self::DEFAULT_PREMIUM_THRESHOLD,
        }
    }
}

/// Decides how many participants a circle may have and whether one more fits
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberLimitPolicy {
    tiers: CapacityTiers,
}

impl MemberLimitPolicy {
    pub fn new(tiers: CapacityTiers) -> Self {
        Self { tiers }
    }

    #[inline]
    pub fn tiers(&self) -> CapacityTiers {
        self.tiers
    }

    pub fn max_limit(&self, members: &CircleMembers) -> usize {
        if members.count_premium_members() >= self.tiers.premium_threshold {
            self.tiers.premium_limit
        } else {
            self.tiers.basic_limit
        }
    }

    /// True while there is room for one more participant.
    ///
    /// Evaluated on the current state, before the candidate is added.
    pub fn is_satisfied_by(&self, members: &CircleMembers) -> bool {
        members.total_participants() < self.max_limit(members)
    }

    #[inline]
    pub fn can_add_member(&self, members: &CircleMembers) -> bool {
        self.is_satisfied_by(members)
    }

    #[inline]
    pub fn is_full(&self, members: &CircleMembers) -> bool {
        !self.is_satisfied_by(members)
    }

    /// `max_limit - total_participants`; negative for over-full stored circles
    pub fn available_slots(&self, members: &CircleMembers) -> i64 {
        self.max_limit(members) as i64 - members.total_participants() as i64
    }
}
