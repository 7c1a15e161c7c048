//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main inkwell crate so fixtures and tests read the same.

/// Type alias for the site user database model.
pub type UserModel = entity::site_user::Model;

/// Type alias for the blog post database model.
pub type BlogPostModel = entity::blog_post::Model;

/// Type alias for the book database model.
pub type BookModel = entity::book::Model;
