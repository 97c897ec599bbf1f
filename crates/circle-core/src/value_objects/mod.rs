//! Value objects - immutable types that represent domain concepts

mod circle_name;
mod email;
mod full_name;
mod ids;

pub use circle_name::CircleName;
pub use email::Email;
pub use full_name::FullName;
pub use ids::{CircleId, UserId};
