use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::server::model::content::BookInput;

pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    /// Creates a new instance of [`BookRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new book, `date_added` is always the current time
    pub async fn create(&self, book: BookInput) -> Result<entity::book::Model, DbErr> {
        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(book.title),
            author: ActiveValue::Set(book.author),
            notes: ActiveValue::Set(book.notes),
            date_added: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        book.insert(self.db).await
    }

    pub async fn get_by_id(&self, book_id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_by_id(book_id).one(self.db).await
    }

    /// Lists books most recently added first, optionally capped at `limit` rows
    pub async fn get_latest(&self, limit: Option<u64>) -> Result<Vec<entity::book::Model>, DbErr> {
        entity::prelude::Book::find()
            .order_by_desc(entity::book::Column::DateAdded)
            .order_by_desc(entity::book::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Overwrites title, author and notes of a loaded book, `date_added` is never changed
    pub async fn update(
        &self,
        existing: entity::book::Model,
        book: BookInput,
    ) -> Result<entity::book::Model, DbErr> {
        let mut book_am = existing.into_active_model();
        book_am.title = ActiveValue::Set(book.title);
        book_am.author = ActiveValue::Set(book.author);
        book_am.notes = ActiveValue::Set(book.notes);

        book_am.update(self.db).await
    }

    /// Deletes a book
    ///
    /// Returns OK regardless of the book existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, book_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Book::delete_by_id(book_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Book::find().count(self.db).await
    }
}
