//! Database model type aliases.
//!
//! Short names for the generated `entity` models used across the server.

/// Type alias for the site user database model.
///
/// # Fields (from `entity::site_user::Model`)
/// - `id` - Primary key, stored in the session after login
/// - `username` - Unique login name
/// - `password_hash` - Argon2id hash in PHC string format
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::site_user::Model;

/// Type alias for the blog post database model.
pub type BlogPostModel = entity::blog_post::Model;

/// Type alias for the book database model.
pub type BookModel = entity::book::Model;
