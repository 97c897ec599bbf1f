//! Model to entity mappers
//!
//! Stored rows are rebuilt through the value objects, so a row that no
//! longer satisfies the domain rules surfaces as a `DatabaseError`
//! instead of a half-valid entity.

mod circle;
mod user;

pub use circle::{circle_from_rows, circles_from_joined_rows};
