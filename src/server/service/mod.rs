//! Service layer for business logic and orchestration.
//!
//! Services implement the application workflow (apply, accept, reject, delete), module and
//! recruitment series administration, and user management. Multi-step operations run inside a
//! database transaction and are retried on transient failures through [`retry::RetryContext`].

pub mod application;
pub mod module;
pub mod recruitment_series;
pub mod retry;
pub mod user;
