//! SeaORM entities for the TA recruitment service.

pub mod prelude;

pub mod applied_modules;
pub mod applied_modules_entry;
pub mod module;
pub mod module_coordinator;
pub mod recruitment_series;
pub mod ta_application;
pub mod user;
