use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository, error::Error, model::db::UserModel,
    service::auth::password::hash_password,
};

/// Service for the site's user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_by_id(user_id).await?)
    }

    /// Creates the admin account unless a user with `username` already exists.
    ///
    /// An existing account is returned untouched, its password is never reset.
    ///
    /// # Returns
    /// - `Ok((UserModel, true))` - Account was created
    /// - `Ok((UserModel, false))` - Account already existed
    /// - `Err(Error)` - Database or hashing failure
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserModel, bool), Error> {
        let user_repository = UserRepository::new(self.db);

        if let Some(user) = user_repository.find_by_username(username).await? {
            return Ok((user, false));
        }

        let password_hash = hash_password(password)?;
        let user = user_repository.create(username, password_hash).await?;

        tracing::info!(user_id = %user.id, username = %username, "Created admin user");

        Ok((user, true))
    }
}
