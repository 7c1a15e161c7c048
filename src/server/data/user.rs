use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already hashed password
    pub async fn create(
        &self,
        username: &str,
        password_hash: String,
    ) -> Result<entity::site_user::Model, DbErr> {
        let user = entity::site_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::site_user::Model>, DbErr> {
        entity::prelude::SiteUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::site_user::Model>, DbErr> {
        entity::prelude::SiteUser::find()
            .filter(entity::site_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
