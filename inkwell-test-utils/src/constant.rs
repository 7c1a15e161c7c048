//! Credentials used by the user fixtures.
//!
//! These are placeholder values for tests only and never reach a running site.

/// Username of the admin account created by [`TestBuilder::with_admin`](crate::TestBuilder::with_admin).
pub static TEST_ADMIN_USERNAME: &str = "admin";

/// Plaintext password of the admin account created by
/// [`TestBuilder::with_admin`](crate::TestBuilder::with_admin).
pub static TEST_ADMIN_PASSWORD: &str = "correct-horse-battery-staple";
