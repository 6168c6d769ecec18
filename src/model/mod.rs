//! Request and response DTOs shared by the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models live in
//! `crate::server::model` and convert into these at the controller boundary.

pub mod api;
pub mod auth;
pub mod category;
pub mod comment;
pub mod genre;
pub mod pagination;
pub mod review;
pub mod title;
pub mod user;
