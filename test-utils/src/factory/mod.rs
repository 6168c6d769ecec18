//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories return SeaORM entity models; parents must be
//! created first since the test database enforces foreign keys.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let title = factory::title::create_title(&db).await?;
//!
//!     // Create with all dependencies
//!     let (author, title, review) = factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let moderator = factory::user::UserFactory::new(&db)
//!     .username("mod")
//!     .role(entity::user::Role::Moderator)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `genre` - Create genre entities
//! - `title` - Create title entities and title-genre links
//! - `review` - Create review entities
//! - `comment` - Create comment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod comment;
pub mod genre;
pub mod helpers;
pub mod review;
pub mod title;
pub mod user;

pub use category::create_category;
pub use comment::create_comment;
pub use genre::create_genre;
pub use review::create_review;
pub use title::create_title;
pub use user::create_user;
