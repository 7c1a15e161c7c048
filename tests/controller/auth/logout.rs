use axum::{http::StatusCode, response::IntoResponse};
use inkwell::server::{controller::auth::logout, model::session::SessionUserId};
use inkwell_test_utils::prelude::*;

use crate::util::{location, TestContextExt};

#[tokio::test]
/// Expect 303 redirect home with the user removed from session
async fn clears_session_and_redirects_home() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    SessionUserId::login(&test.session, admin.0.id).await.unwrap();

    let resp = logout(admin, test.session.clone()).await.into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_none());

    Ok(())
}
