//! SeaORM entities for the review database.
//!
//! One module per table. Relations declare the referential-integrity rules that the
//! migrations create as foreign keys.

pub mod prelude;

pub mod category;
pub mod comment;
pub mod genre;
pub mod review;
pub mod title;
pub mod title_genre;
pub mod user;
