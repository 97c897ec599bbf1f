//! Domain entities - core business objects

mod circle;
mod circle_members;
mod user;

pub use circle::Circle;
pub use circle_members::CircleMembers;
pub use user::User;
