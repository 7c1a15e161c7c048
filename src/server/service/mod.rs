//! Service layer for business logic.
//!
//! Services validate input, hash and verify passwords, and wrap every mutating operation
//! in its own database transaction so a request either commits all of its writes or none.

pub mod auth;
pub mod blog_post;
pub mod book;
pub mod seed;
pub mod user;
pub mod validation;
