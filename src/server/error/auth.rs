use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::{error::InternalServerError, view};

/// Message shown for every failed login, whatever the reason.
pub static INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login rejected for username {0:?}")]
    InvalidCredentials(String),
    #[error("Failed to hash or verify password: {0}")]
    PasswordHashError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::warn!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Redirect::to("/login").into_response()
            }
            Self::InvalidCredentials(ref username) => {
                tracing::info!(username = %username, "Failed login attempt");

                (
                    StatusCode::UNAUTHORIZED,
                    view::auth::login_page(Some(INVALID_CREDENTIALS_MESSAGE)),
                )
                    .into_response()
            }
            Self::PasswordHashError(_) => InternalServerError(self).into_response(),
        }
    }
}
