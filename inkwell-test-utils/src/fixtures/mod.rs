//! Test fixture modules for database records.
//!
//! - `user` - site user records with hashed passwords
//! - `content` - blog post and book records, plus in-memory model factories

pub mod content;
pub mod user;
