//! Authentication service.
//!
//! Verifies submitted credentials against the stored Argon2id hashes. Failures never reveal
//! whether the username or the password was wrong.

pub mod password;

use std::sync::LazyLock;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::auth::password::{hash_password, verify_password},
};

/// Hash verified against when the username is unknown, so both failure paths do the same work.
static DUMMY_PASSWORD_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("inkwell-dummy-password").ok());

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username and plaintext password.
    ///
    /// # Arguments
    /// - `username` - Submitted username, matched exactly
    /// - `password` - Submitted plaintext password
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials are valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(Error::DbErr)` - Database query failed
    /// - `Err(Error::AuthError(AuthError::PasswordHashError))` - Stored hash is unreadable
    pub async fn login(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let Some(user) = user_repository.find_by_username(username).await? else {
            if let Some(dummy_hash) = DUMMY_PASSWORD_HASH.as_deref() {
                let _ = verify_password(password, dummy_hash);
            }

            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(user)
    }
}
