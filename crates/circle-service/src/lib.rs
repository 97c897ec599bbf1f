//! # circle-service
//!
//! Application layer containing the circle and user use cases and their DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CircleService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
