//! Utility functions for controller request handling.
//!
//! Session user resolution and role checks shared by the lecturer, admin and applicant
//! controllers.

pub mod get_user;
