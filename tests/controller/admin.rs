use axum::{extract::State, http::StatusCode, response::IntoResponse};
use inkwell::server::{controller::admin::dashboard, model::app::AppState};
use inkwell_test_utils::prelude::*;

use crate::util::{body_string, TestContextExt};

#[tokio::test]
/// Expect every post and book listed with its management links
async fn lists_all_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let post = test.content().insert_blog_post("A post", "Content", None).await?;
    let book = test.content().insert_book("A book", "An author", None).await?;

    let resp = dashboard(State(test.to_app_state::<AppState>()), admin)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("A post"));
    assert!(body.contains("A book"));
    assert!(body.contains(&format!("/blog/edit/{}", post.id)));
    assert!(body.contains(&format!("/book/delete/{}", book.id)));

    Ok(())
}
