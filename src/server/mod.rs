//! Server application core modules.
//!
//! This module contains all server-side functionality for the site: HTTP routing, the admin
//! session gate, database access, content validation, and the server-rendered pages. Public
//! visitors can read the blog and the bookshelf; the single admin account manages both.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
