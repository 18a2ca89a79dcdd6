//! Data transfer objects exchanged with API consumers.
//!
//! All request and response bodies use camelCase field names to match the frontend's
//! expectations. Conversions from database models live beside each DTO.

pub mod api;
pub mod application;
pub mod module;
pub mod recruitment;
pub mod user;
