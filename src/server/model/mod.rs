//! Server application models and type definitions.
//!
//! This module contains the application state shared with handlers, database model type
//! aliases, session data structures, and the domain rules for applicant roles and
//! application status transitions.

pub mod app;
pub mod db;
pub mod role;
pub mod session;
pub mod status;
