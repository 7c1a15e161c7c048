use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::SessionUserId},
    service::user::UserService,
};

/// Retrieves the logged in user from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserModel)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    // Get user from session
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    // Get user from database
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Extractor for handlers that require a logged in admin.
///
/// Rejects with an [`AuthError`], which redirects to `/login`. Place it before any body
/// extractor so unauthenticated requests are turned away before the body is read.
pub struct AdminUser(pub UserModel);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, reason)| Error::InternalError(reason.to_string()))?;

        get_user_from_session(state, &session).await.map(AdminUser)
    }
}
