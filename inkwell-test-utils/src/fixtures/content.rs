//! Blog post and book fixtures.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{
    error::TestError,
    model::{BlogPostModel, BookModel},
    TestContext,
};

impl TestContext {
    pub fn content(&self) -> ContentFixtures<'_> {
        ContentFixtures { setup: self }
    }
}

pub struct ContentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ContentFixtures<'a> {
    /// Insert a blog post published now.
    pub async fn insert_blog_post(
        &self,
        title: &str,
        content: &str,
        description: Option<&str>,
    ) -> Result<BlogPostModel, TestError> {
        self.insert_blog_post_at(title, content, description, Utc::now().naive_utc())
            .await
    }

    /// Insert a blog post with an explicit publication timestamp.
    pub async fn insert_blog_post_at(
        &self,
        title: &str,
        content: &str,
        description: Option<&str>,
        date_posted: NaiveDateTime,
    ) -> Result<BlogPostModel, TestError> {
        Ok(
            entity::prelude::BlogPost::insert(entity::blog_post::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                content: ActiveValue::Set(content.to_string()),
                description: ActiveValue::Set(description.map(str::to_string)),
                date_posted: ActiveValue::Set(date_posted),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a book added now.
    pub async fn insert_book(
        &self,
        title: &str,
        author: &str,
        notes: Option<&str>,
    ) -> Result<BookModel, TestError> {
        self.insert_book_at(title, author, notes, Utc::now().naive_utc())
            .await
    }

    /// Insert a book with an explicit date added.
    pub async fn insert_book_at(
        &self,
        title: &str,
        author: &str,
        notes: Option<&str>,
        date_added: NaiveDateTime,
    ) -> Result<BookModel, TestError> {
        Ok(entity::prelude::Book::insert(entity::book::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            author: ActiveValue::Set(author.to_string()),
            notes: ActiveValue::Set(notes.map(str::to_string)),
            date_added: ActiveValue::Set(date_added),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Count blog post rows.
    pub async fn count_blog_posts(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::BlogPost::find()
            .count(&self.setup.db)
            .await?)
    }

    /// Count book rows.
    pub async fn count_books(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Book::find().count(&self.setup.db).await?)
    }
}

pub mod factory {
    //! Factory functions for in-memory content models.
    //!
    //! These build model instances without touching the database, for tests that only
    //! need a value to render or compare.

    use chrono::{NaiveDate, NaiveDateTime};

    use crate::model::{BlogPostModel, BookModel};

    /// A fixed timestamp, 2024-01-15 12:00:00 UTC, offset by `hours`.
    pub fn timestamp(hours: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(|t| t + chrono::Duration::hours(hours))
            .unwrap()
    }

    pub fn mock_blog_post_model(id: i32) -> BlogPostModel {
        BlogPostModel {
            id,
            title: format!("Post {}", id),
            content: "Post content".to_string(),
            description: Some("Post description".to_string()),
            date_posted: timestamp(id as i64),
        }
    }

    pub fn mock_book_model(id: i32) -> BookModel {
        BookModel {
            id,
            title: format!("Book {}", id),
            author: "Test Author".to_string(),
            notes: None,
            date_added: timestamp(id as i64),
        }
    }
}
