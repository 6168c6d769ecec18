//! HTTP request handlers.
//!
//! Each handler extracts path, query and body, runs the `AuthGuard` where the
//! operation needs an authenticated user, converts DTOs to params, calls a service
//! and converts the result back to a DTO.

pub mod auth;
pub mod body;
pub mod category;
pub mod comment;
pub mod genre;
pub mod query;
pub mod review;
pub mod title;
pub mod user;

#[cfg(test)]
mod test;
