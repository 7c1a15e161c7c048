use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    model::form::LoginForm,
    server::{
        controller::util::get_user::AdminUser,
        error::Error,
        model::{app::AppState, session::SessionUserId},
        service::auth::AuthService,
        view,
    },
};

/// Login form
///
/// # Responses
/// - 200 (Success): The login form
/// - 303 (See Other): A user is already logged in, redirect to the admin dashboard
/// - 500 (Internal Server Error): Failed to read the session
pub async fn login_form(session: Session) -> Result<Response, Error> {
    if SessionUserId::get(&session).await?.is_some() {
        return Ok(Redirect::to("/admin").into_response());
    }

    Ok(view::auth::login_page(None).into_response())
}

/// Checks submitted credentials and stores the user in session
///
/// The session ID is cycled on success so an ID issued before login is never authenticated.
///
/// # Responses
/// - 303 (See Other): Successful login, redirect to the admin dashboard
/// - 401 (Unauthorized): Unknown username or wrong password, the login form with a generic message
/// - 500 (Internal Server Error): A database or session error occurred
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(&form.username, &form.password)
        .await?;

    SessionUserId::login(&session, user.id).await?;

    Ok(Redirect::to("/admin"))
}

/// Logs the admin out by flushing their session
///
/// # Responses
/// - 303 (See Other): Logged out, redirect to the home page; or no user in session,
///   redirect to `/login`
/// - 500 (Internal Server Error): Failed to delete the session from the store
pub async fn logout(
    AdminUser(user): AdminUser,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::logout(&session).await?;

    tracing::info!(user_id = %user.id, "User logged out");

    Ok(Redirect::to("/"))
}
