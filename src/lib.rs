//! Inkwell: a personal website with a blog, a bookshelf, and a single-admin content manager.

pub mod model;
pub mod server;
