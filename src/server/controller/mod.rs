//! HTTP controller endpoints.
//!
//! Axum handlers for the public pages, the login flow and the admin content manager.
//! Handlers extract input, call a service and return a page or a redirect; every failure
//! is returned as [`Error`](crate::server::error::Error) and translated in one place.

pub mod admin;
pub mod auth;
pub mod blog;
pub mod book;
pub mod home;
pub mod util;

use axum::{http::StatusCode, response::IntoResponse};

use crate::server::view;

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, view::error::not_found_page())
}
