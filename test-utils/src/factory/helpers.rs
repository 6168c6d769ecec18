//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique usernames, emails and slugs across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a review together with its author and title.
///
/// # Returns
/// - `Ok((author, title, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::title::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let title = crate::factory::title::create_title(db).await?;
    let review = crate::factory::review::create_review(db, title.id, author.id).await?;

    Ok((author, title, review))
}

/// Creates a comment together with its review, the review's title and one author
/// for both.
///
/// # Returns
/// - `Ok((author, title, review, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::title::Model,
        entity::review::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (author, title, review) = create_review_with_dependencies(db).await?;
    let comment = crate::factory::comment::create_comment(db, review.id, author.id).await?;

    Ok((author, title, review, comment))
}
