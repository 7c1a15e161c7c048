use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::form::BookForm,
    server::{
        data::book::BookRepository,
        error::{content::ContentError, Error},
        model::db::BookModel,
        service::validation::validate_book,
    },
};

/// Service for book operations.
///
/// Every mutating method runs in its own transaction, which rolls back when dropped
/// before commit.
pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    /// Creates a new instance of [`BookService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists books most recently added first, `limit` of `None` lists all of them
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<BookModel>, Error> {
        Ok(BookRepository::new(self.db).get_latest(limit).await?)
    }

    /// Retrieves a book or fails with [`ContentError::BookNotFound`]
    pub async fn get(&self, book_id: i32) -> Result<BookModel, Error> {
        BookRepository::new(self.db)
            .get_by_id(book_id)
            .await?
            .ok_or_else(|| ContentError::BookNotFound(book_id).into())
    }

    /// Validates and persists a new book.
    ///
    /// # Returns
    /// - `Ok(BookModel)` - The created book
    /// - `Err(Error::ContentError(ContentError::InvalidBook))` - Form failed validation, nothing written
    /// - `Err(Error::DbErr)` - Database operation failed, transaction rolled back
    pub async fn create(&self, form: BookForm) -> Result<BookModel, Error> {
        let input = validate_book(&form).map_err(|errors| ContentError::InvalidBook {
            id: None,
            form,
            errors,
        })?;

        let txn = self.db.begin().await?;
        let book = BookRepository::new(&txn).create(input).await?;
        txn.commit().await?;

        tracing::info!(book_id = %book.id, "Created book");

        Ok(book)
    }

    /// Overwrites every editable field of an existing book.
    ///
    /// An unknown ID takes precedence over validation problems.
    ///
    /// # Returns
    /// - `Ok(BookModel)` - The updated book
    /// - `Err(Error::ContentError(ContentError::BookNotFound))` - No book with this ID
    /// - `Err(Error::ContentError(ContentError::InvalidBook))` - Form failed validation, nothing written
    /// - `Err(Error::DbErr)` - Database operation failed, transaction rolled back
    pub async fn update(&self, book_id: i32, form: BookForm) -> Result<BookModel, Error> {
        let txn = self.db.begin().await?;
        let repository = BookRepository::new(&txn);

        let Some(existing) = repository.get_by_id(book_id).await? else {
            return Err(ContentError::BookNotFound(book_id).into());
        };

        let input = validate_book(&form).map_err(|errors| ContentError::InvalidBook {
            id: Some(book_id),
            form,
            errors,
        })?;

        let book = repository.update(existing, input).await?;
        txn.commit().await?;

        tracing::info!(book_id = %book.id, "Updated book");

        Ok(book)
    }

    /// Deletes a book, failing with [`ContentError::BookNotFound`] if it is already gone
    pub async fn delete(&self, book_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let result = BookRepository::new(&txn).delete(book_id).await?;

        if result.rows_affected == 0 {
            return Err(ContentError::BookNotFound(book_id).into());
        }

        txn.commit().await?;

        tracing::info!(book_id = %book_id, "Deleted book");

        Ok(())
    }
}
