use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::server::model::content::BlogPostInput;

pub struct BlogPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogPostRepository<'a, C> {
    /// Creates a new instance of [`BlogPostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new blog post
    ///
    /// The publication timestamp defaults to now when the input carries none.
    pub async fn create(&self, post: BlogPostInput) -> Result<entity::blog_post::Model, DbErr> {
        let post = entity::blog_post::ActiveModel {
            title: ActiveValue::Set(post.title),
            content: ActiveValue::Set(post.content),
            description: ActiveValue::Set(post.description),
            date_posted: ActiveValue::Set(
                post.date_posted
                    .unwrap_or_else(|| Utc::now().naive_utc()),
            ),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        blog_post_id: i32,
    ) -> Result<Option<entity::blog_post::Model>, DbErr> {
        entity::prelude::BlogPost::find_by_id(blog_post_id)
            .one(self.db)
            .await
    }

    /// Lists blog posts newest first, optionally capped at `limit` rows
    ///
    /// Posts sharing a publication timestamp are ordered by descending ID.
    pub async fn get_latest(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<entity::blog_post::Model>, DbErr> {
        entity::prelude::BlogPost::find()
            .order_by_desc(entity::blog_post::Column::DatePosted)
            .order_by_desc(entity::blog_post::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Overwrites every editable field of a loaded blog post
    ///
    /// The publication timestamp is only replaced when the input carries one.
    pub async fn update(
        &self,
        existing: entity::blog_post::Model,
        post: BlogPostInput,
    ) -> Result<entity::blog_post::Model, DbErr> {
        let mut post_am = existing.into_active_model();
        post_am.title = ActiveValue::Set(post.title);
        post_am.content = ActiveValue::Set(post.content);
        post_am.description = ActiveValue::Set(post.description);
        if let Some(date_posted) = post.date_posted {
            post_am.date_posted = ActiveValue::Set(date_posted);
        }

        post_am.update(self.db).await
    }

    /// Deletes a blog post
    ///
    /// Returns OK regardless of the blog post existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, blog_post_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BlogPost::delete_by_id(blog_post_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::BlogPost::find().count(self.db).await
    }
}
