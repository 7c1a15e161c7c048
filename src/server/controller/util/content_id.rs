use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::{content::ContentError, Error};

/// Numeric ID of a blog post or book taken from the `{id}` path segment.
///
/// A segment that is not an `i32` is rejected with the not found page, the same as an ID
/// with no row behind it.
pub struct ContentId(pub i32);

impl<S> FromRequestParts<S> for ContentId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ContentError::MalformedId(rejection.body_text()))?;

        Ok(ContentId(id))
    }
}
