use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    model::form::BookForm,
    server::{
        controller::util::{content_id::ContentId, get_user::AdminUser},
        error::Error,
        model::app::AppState,
        service::book::BookService,
        view,
    },
};

/// The bookshelf, most recently added first
///
/// # Responses
/// - 200 (Success): All books
/// - 500 (Internal Server Error): A database error occurred
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let books = BookService::new(&state.db).list(None).await?;

    Ok(view::book::book_list_page(books))
}

/// Empty form for a new book
pub async fn new_book_form(_: AdminUser) -> Result<impl IntoResponse, Error> {
    Ok(view::book::book_form_page(None, BookForm::default(), Vec::new()))
}

/// Adds a book to the shelf
///
/// # Responses
/// - 303 (See Other): Created, redirect to the admin dashboard; or no user in session,
///   redirect to `/login`
/// - 422 (Unprocessable Entity): The form re-rendered with the submitted values and errors
/// - 500 (Internal Server Error): A database error occurred
pub async fn create_book(
    State(state): State<AppState>,
    _: AdminUser,
    Form(form): Form<BookForm>,
) -> Result<impl IntoResponse, Error> {
    BookService::new(&state.db).create(form).await?;

    Ok(Redirect::to("/admin"))
}

/// Form pre-filled with an existing book
///
/// # Responses
/// - 200 (Success): The form
/// - 303 (See Other): No user in session, redirect to `/login`
/// - 404 (Not Found): No book with this ID
pub async fn edit_book_form(
    State(state): State<AppState>,
    _: AdminUser,
    ContentId(book_id): ContentId,
) -> Result<impl IntoResponse, Error> {
    let book = BookService::new(&state.db).get(book_id).await?;

    Ok(view::book::book_form_page(
        Some(book.id),
        BookForm::from(&book),
        Vec::new(),
    ))
}

/// Overwrites an existing book, `date_added` is kept
///
/// # Responses
/// - 303 (See Other): Updated, redirect to the admin dashboard; or no user in session,
///   redirect to `/login`
/// - 404 (Not Found): No book with this ID
/// - 422 (Unprocessable Entity): The form re-rendered with the submitted values and errors
/// - 500 (Internal Server Error): A database error occurred
pub async fn update_book(
    State(state): State<AppState>,
    _: AdminUser,
    ContentId(book_id): ContentId,
    Form(form): Form<BookForm>,
) -> Result<impl IntoResponse, Error> {
    BookService::new(&state.db).update(book_id, form).await?;

    Ok(Redirect::to("/admin"))
}

/// Removes a book from the shelf
///
/// # Responses
/// - 303 (See Other): Deleted, redirect to the admin dashboard; or no user in session,
///   redirect to `/login`
/// - 404 (Not Found): No book with this ID
/// - 500 (Internal Server Error): A database error occurred
pub async fn delete_book(
    State(state): State<AppState>,
    _: AdminUser,
    ContentId(book_id): ContentId,
) -> Result<impl IntoResponse, Error> {
    BookService::new(&state.db).delete(book_id).await?;

    Ok(Redirect::to("/admin"))
}
