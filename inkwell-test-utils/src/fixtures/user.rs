//! Site user fixtures.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is hashed with Argon2id.
    pub async fn insert_user(&self, username: &str, password: &str) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHashError(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::SiteUser::insert(entity::site_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
