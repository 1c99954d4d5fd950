//! Shared test harness for the Holocron workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and
//! fixtures a test needs, then `build()` returns a [`TestContext`] backed by an
//! in-memory SQLite database that the test exercises.

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
        constant::{TEST_JWT_SECRET, TEST_PASSWORD},
        fixtures::factory,
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
