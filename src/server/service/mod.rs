//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, uniqueness rules and object-level permissions
//! - **Orchestration**: Resolving slugs and parent resources across repositories
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Mailing confirmation codes and signing access tokens

pub mod auth;
pub mod category;
pub mod comment;
pub mod genre;
pub mod mail;
pub mod review;
pub mod title;
pub mod user;
