//! SeaORM entity models for the site's content store.

pub mod prelude;

pub mod blog_post;
pub mod book;
pub mod site_user;
