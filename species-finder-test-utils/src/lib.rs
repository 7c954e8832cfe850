pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod redis;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_SPECIES, TEST_WOLFRAM_APP_ID},
        fixtures::{wikipedia, wolfram},
        redis::RedisTest,
        TestBuilder, TestContext, TestError,
    };
}
