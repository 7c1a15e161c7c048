//! Utility functions for controller request handling.
//!
//! Session lookups shared by every handler behind the admin login, and the path ID extractor
//! shared by the blog post and book routes.

pub mod content_id;
pub mod get_user;
