//! Server application models.
//!
//! Application state, database model type aliases, session data and validated content
//! input shared by the data, service and controller layers.

pub mod app;
pub mod content;
pub mod db;
pub mod session;
