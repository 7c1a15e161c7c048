use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use inkwell::server::{
    controller::{blog::delete_blog_post, util::content_id::ContentId},
    model::app::AppState,
};
use inkwell_test_utils::prelude::*;

use crate::util::{location, TestContextExt};

#[tokio::test]
/// Expect the post removed and a redirect to the dashboard
async fn deletes_post() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let post = test.content().insert_blog_post("Title", "Content", None).await?;
    test.content().insert_blog_post("Other", "Content", None).await?;

    let resp = delete_blog_post(State(test.to_app_state::<AppState>()), admin, ContentId(post.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin"));
    assert_eq!(test.content().count_blog_posts().await?, 1);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ID
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = delete_blog_post(State(test.to_app_state::<AppState>()), admin, ContentId(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
