//! Error types for the Inkwell server.
//!
//! Every handler returns `Result<_, Error>`, so this module is the single place where
//! failures become HTTP responses: not-found pages, re-rendered forms for validation
//! problems, login redirects, and a generic error page for everything else.

pub mod auth;
pub mod config;
pub mod content;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{auth::AuthError, config::ConfigError, content::ContentError},
    view,
};

/// Main error type for the Inkwell server.
///
/// Aggregates the domain errors and the external library errors into a single type so
/// the `?` operator works across repositories, services and controllers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, rejected credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Content error (unknown blog post or book, invalid submission).
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Internal error indicating a bug in Inkwell's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding the listener, creating the data directory).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the visitor only sees a generic error page.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            view::error::internal_error_page(),
        )
            .into_response()
    }
}
