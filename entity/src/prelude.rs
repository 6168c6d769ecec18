pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::genre::Entity as Genre;
pub use super::review::Entity as Review;
pub use super::title::Entity as Title;
pub use super::title_genre::Entity as TitleGenre;
pub use super::user::Entity as User;
