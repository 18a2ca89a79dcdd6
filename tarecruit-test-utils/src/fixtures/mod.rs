//! Test fixture modules.
//!
//! - `factory` - in-memory model instances for unit tests that never touch the database
//! - `workflow` - database inserts for users, series, modules, coordinators and applications

pub mod factory;
pub mod workflow;
