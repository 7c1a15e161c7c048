//! Small helpers shared across the server.

pub mod time;
