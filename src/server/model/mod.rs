//! Server-side domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these models, services operate on
//! them, and controllers convert them into DTOs from `crate::model`.

pub mod category;
pub mod comment;
pub mod genre;
pub mod pagination;
pub mod permission;
pub mod review;
pub mod title;
pub mod user;
