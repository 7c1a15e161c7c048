use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::form::BlogPostForm,
    server::{
        data::blog_post::BlogPostRepository,
        error::{content::ContentError, Error},
        model::db::BlogPostModel,
        service::validation::validate_blog_post,
    },
};

/// Service for blog post operations.
///
/// Every mutating method runs in its own transaction, which rolls back when dropped
/// before commit.
pub struct BlogPostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogPostService<'a> {
    /// Creates a new instance of [`BlogPostService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists blog posts newest first, `limit` of `None` lists all of them
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<BlogPostModel>, Error> {
        Ok(BlogPostRepository::new(self.db).get_latest(limit).await?)
    }

    /// Retrieves a blog post or fails with [`ContentError::BlogPostNotFound`]
    pub async fn get(&self, blog_post_id: i32) -> Result<BlogPostModel, Error> {
        BlogPostRepository::new(self.db)
            .get_by_id(blog_post_id)
            .await?
            .ok_or_else(|| ContentError::BlogPostNotFound(blog_post_id).into())
    }

    /// Validates and persists a new blog post.
    ///
    /// # Returns
    /// - `Ok(BlogPostModel)` - The created blog post
    /// - `Err(Error::ContentError(ContentError::InvalidBlogPost))` - Form failed validation, nothing written
    /// - `Err(Error::DbErr)` - Database operation failed, transaction rolled back
    pub async fn create(&self, form: BlogPostForm) -> Result<BlogPostModel, Error> {
        let input = validate_blog_post(&form).map_err(|errors| ContentError::InvalidBlogPost {
            id: None,
            form,
            errors,
        })?;

        let txn = self.db.begin().await?;
        let post = BlogPostRepository::new(&txn).create(input).await?;
        txn.commit().await?;

        tracing::info!(blog_post_id = %post.id, "Created blog post");

        Ok(post)
    }

    /// Overwrites every editable field of an existing blog post.
    ///
    /// An unknown ID takes precedence over validation problems.
    ///
    /// # Returns
    /// - `Ok(BlogPostModel)` - The updated blog post
    /// - `Err(Error::ContentError(ContentError::BlogPostNotFound))` - No blog post with this ID
    /// - `Err(Error::ContentError(ContentError::InvalidBlogPost))` - Form failed validation, nothing written
    /// - `Err(Error::DbErr)` - Database operation failed, transaction rolled back
    pub async fn update(&self, blog_post_id: i32, form: BlogPostForm) -> Result<BlogPostModel, Error> {
        let txn = self.db.begin().await?;
        let repository = BlogPostRepository::new(&txn);

        let Some(existing) = repository.get_by_id(blog_post_id).await? else {
            return Err(ContentError::BlogPostNotFound(blog_post_id).into());
        };

        let input = validate_blog_post(&form).map_err(|errors| ContentError::InvalidBlogPost {
            id: Some(blog_post_id),
            form,
            errors,
        })?;

        let post = repository.update(existing, input).await?;
        txn.commit().await?;

        tracing::info!(blog_post_id = %post.id, "Updated blog post");

        Ok(post)
    }

    /// Deletes a blog post, failing with [`ContentError::BlogPostNotFound`] if it is already gone
    pub async fn delete(&self, blog_post_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let result = BlogPostRepository::new(&txn).delete(blog_post_id).await?;

        if result.rows_affected == 0 {
            return Err(ContentError::BlogPostNotFound(blog_post_id).into());
        }

        txn.commit().await?;

        tracing::info!(blog_post_id = %blog_post_id, "Deleted blog post");

        Ok(())
    }
}
