//! Specifications - business rules as predicate objects
//!
//! A [`CircleSpecification`] can filter circles in memory or be handed to
//! [`CircleRepository::find_by_specification`](crate::traits::CircleRepository::find_by_specification).
//! Closures are specifications too.

mod member_limit;
mod recommended;

pub use member_limit::{CapacityTiers, MemberLimitPolicy};
pub use recommended::{RecommendationCriteria, RecommendedCircleSpecification};

use crate::entities::Circle;

/// Predicate over a circle
pub trait CircleSpecification: Send + Sync {
    fn is_satisfied_by(&self, circle: &Circle) -> bool;
}

impl<F> CircleSpecification for F
where
    F: Fn(&Circle) -> bool + Send + Sync,
{
    fn is_satisfied_by(&self, circle: &Circle) -> bool {
        self(circle)
    }
}

/// Keep the circles that satisfy `spec`, preserving order
pub fn filter_circles<S>(circles: Vec<Circle>, spec: &S) -> Vec<Circle>
where
    S: CircleSpecification + ?Sized,
{
    circles
        .into_iter()
        .filter(|circle| spec.is_satisfied_by(circle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{CircleName, UserId};

    #[test]
    fn test_closure_is_a_specification() {
        let a = Circle::new(CircleName::new("Chess Club").unwrap(), UserId::new());
        let mut b = Circle::new(CircleName::new("Go Club").unwrap(), UserId::new());
        b.add_member(UserId::new()).unwrap();

        let has_members = |c: &Circle| c.member_count() > 0;
        let kept = filter_circles(vec![a, b.clone()], &has_members);
        assert_eq!(kept, vec![b]);
    }

    #[test]
    fn test_dyn_specification() {
        let spec: &dyn CircleSpecification = &|_: &Circle| true;
        let c = Circle::new(CircleName::new("Chess Club").unwrap(), UserId::new());
        assert_eq!(filter_circles(vec![c], spec).len(), 1);
    }
}
