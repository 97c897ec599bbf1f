//! Database models - SQLx-compatible structs for PostgreSQL tables

mod circle;
mod user;

pub use circle::{CircleMemberModel, CircleMemberRow, CircleModel};
pub use user::UserModel;
