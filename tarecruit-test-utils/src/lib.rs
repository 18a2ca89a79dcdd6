//! Test harness for the TA recruitment service.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and records the test
//! needs, then the returned [`TestContext`] exposes the in-memory database, a session, and
//! fixture helpers for anything inserted while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{factory, workflow::ModuleSpec},
        TestBuilder, TestContext, TestError,
    };
}
