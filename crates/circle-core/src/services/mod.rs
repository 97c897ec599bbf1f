//! Domain services - rules that need a repository to answer

mod circle_existence;
mod user_existence;

pub use circle_existence::CircleExistenceService;
pub use user_existence::UserExistenceService;
