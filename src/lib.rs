//! Teaching Assistant recruitment service.
//!
//! Students apply for TA positions on modules within a recruitment series, lecturers review the
//! applications for the modules they coordinate, and administrators manage series and modules.

pub mod model;
pub mod server;
