//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Calls are queued and executed in order during the final `build()` call: tables first, then
//! user fixtures, then content fixtures.

use chrono::NaiveDateTime;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME},
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// content fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_content_tables: bool,

    users: Vec<(String, String)>,                            // (username, password)
    blog_posts: Vec<(String, String, Option<String>, NaiveDateTime)>, // (title, content, description, date_posted)
    books: Vec<(String, String, Option<String>)>,            // (title, author, notes)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_content_tables: false,
            users: Vec::new(),
            blog_posts: Vec::new(),
            books: Vec::new(),
        }
    }

    /// Add every table of the content store: SiteUser, BlogPost and Book.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    ///
    /// ```no_run
    /// use inkwell_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), inkwell_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(SiteUser)
    ///     .with_table(Book)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with a hashed password.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((username.into(), password.into()));
        self
    }

    /// Insert the admin user using [`TEST_ADMIN_USERNAME`] and [`TEST_ADMIN_PASSWORD`].
    pub fn with_admin(self) -> Self {
        self.with_user(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
    }

    /// Insert a blog post with an explicit publication timestamp.
    pub fn with_blog_post(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        description: Option<&str>,
        date_posted: NaiveDateTime,
    ) -> Self {
        self.blog_posts.push((
            title.into(),
            content.into(),
            description.map(str::to_string),
            date_posted,
        ));
        self
    }

    /// Insert a book, `date_added` is set to the time of insertion.
    pub fn with_book(
        mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        notes: Option<&str>,
    ) -> Self {
        self.books
            .push((title.into(), author.into(), notes.map(str::to_string)));
        self
    }

    /// Build the test context, executing every queued step.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_content_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::SiteUser),
                schema.create_table_from_entity(entity::prelude::BlogPost),
                schema.create_table_from_entity(entity::prelude::Book),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (username, password) in self.users {
            setup.user().insert_user(&username, &password).await?;
        }

        for (title, content, description, date_posted) in self.blog_posts {
            setup
                .content()
                .insert_blog_post_at(&title, &content, description.as_deref(), date_posted)
                .await?;
        }

        for (title, author, notes) in self.books {
            setup
                .content()
                .insert_book(&title, &author, notes.as_deref())
                .await?;
        }

        Ok(setup)
    }
}
