pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME},
        fixtures::content::factory,
        TestBuilder, TestContext, TestError,
    };
}
