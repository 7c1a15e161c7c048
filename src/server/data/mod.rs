//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! services can run them against a plain connection or inside a transaction.

pub mod blog_post;
pub mod book;
pub mod user;
