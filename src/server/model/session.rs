//! Admin login state kept in the session.
//!
//! The session holds nothing but the ID of the logged in admin. Logging in always issues a
//! new session ID and logging out deletes the record from the store, so a cookie captured
//! on either side of a login is never authenticated.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const ADMIN_USER_ID_KEY: &str = "inkwell:admin:user_id";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Authenticates the session as `user_id` under a freshly issued session ID
    pub async fn login(session: &Session, user_id: i32) -> Result<(), Error> {
        session.cycle_id().await?;
        session
            .insert(ADMIN_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// ID of the logged in admin, `None` for anonymous visitors
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionUserId>(ADMIN_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id))
    }

    /// Clears the session and deletes it from the store
    pub async fn logout(session: &Session) -> Result<(), Error> {
        session.flush().await?;

        Ok(())
    }
}
