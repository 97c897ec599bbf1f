//! Data transfer objects for use case inputs and outputs
//!
//! This module provides:
//! - Request DTOs carrying raw, unvalidated input
//! - Response DTOs for serializing results
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddMemberRequest, CreateCircleRequest, CreateUserRequest, RenameCircleRequest,
    UpdateUserRequest,
};

pub use responses::{
    CircleResponse, CreateCircleResponse, CreateUserResponse, RecommendedCircleResponse,
    UserResponse,
};

pub use mappers::CircleWithCapacity;
