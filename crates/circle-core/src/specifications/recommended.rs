//! Recommended circles - recently created and well attended

use chrono::{DateTime, Months, Utc};

use super::CircleSpecification;
use crate::entities::Circle;

/// Thresholds for [`RecommendedCircleSpecification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationCriteria {
    /// Minimum participants, owner included
    pub min_participants: usize,
    /// Length of the "recently created" window in calendar months
    pub window_months: u32,
}

impl RecommendationCriteria {
    pub const DEFAULT_MIN_PARTICIPANTS: usize = 10;
    pub const DEFAULT_WINDOW_MONTHS: u32 = 1;
}

impl Default for RecommendationCriteria {
    fn default() -> Self {
        Self {
            min_participants: Self::DEFAULT_MIN_PARTICIPANTS,
            window_months: Self::DEFAULT_WINDOW_MONTHS,
        }
    }
}

/// Selects circles worth surfacing to users
///
/// The reference time is injected; the predicate never reads the clock.
#[derive(Debug, Clone, Copy)]
pub struct RecommendedCircleSpecification {
    reference_time: DateTime<Utc>,
    criteria: RecommendationCriteria,
}

impl RecommendedCircleSpecification {
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self::with_criteria(reference_time, RecommendationCriteria::default())
    }

    pub fn with_criteria(reference_time: DateTime<Utc>, criteria: RecommendationCriteria) -> Self {
        Self {
            reference_time,
            criteria,
        }
    }

    #[inline]
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    pub fn is_recommended(&self, circle: &Circle) -> bool {
        self.is_recently_created(circle) && self.has_enough_members(circle)
    }

    /// Start of the window; month subtraction clamps to the end of shorter months
    fn window_start(&self) -> DateTime<Utc> {
        self.reference_time
            .checked_sub_months(Months::new(self.criteria.window_months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn is_recently_created(&self, circle: &Circle) -> bool {
        circle.created_at() > self.window_start()
    }

    fn has_enough_members(&self, circle: &Circle) -> bool {
        circle.total_participants() >= self.criteria.min_participants
    }
}

impl CircleSpecification for RecommendedCircleSpecification {
    fn is_satisfied_by(&self, circle: &Circle) -> bool {
        self.is_recommended(circle)
    }
}
