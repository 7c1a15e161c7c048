use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use inkwell::server::{
    controller::{
        book::delete_book,
        util::{content_id::ContentId, get_user::AdminUser},
    },
    model::app::AppState,
};
use inkwell_test_utils::prelude::*;

use crate::util::{location, TestContextExt};

#[tokio::test]
/// Expect the first delete to redirect and the second to return 404 not found
async fn second_delete_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let book = test.content().insert_book("Dune", "Frank Herbert", None).await?;
    let state = test.to_app_state::<AppState>();

    let first = delete_book(State(state.clone()), AdminUser(admin.0.clone()), ContentId(book.id))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&first), Some("/admin"));
    assert_eq!(test.content().count_books().await?, 0);

    let second = delete_book(State(state), admin, ContentId(book.id))
        .await
        .into_response();

    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    Ok(())
}
