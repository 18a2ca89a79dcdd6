//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each and are generic over
//! `ConnectionTrait`, so the same repository runs against the pool or inside a transaction.
//! Counter and hour mutations are single conditional statements: they report whether a row
//! changed and never read-modify-write.

pub mod applied_modules;
pub mod module;
pub mod module_coordinator;
pub mod recruitment_series;
pub mod ta_application;
pub mod user;
