//! Session data models.
//!
//! The login layer places the authenticated user's ID in the session; handlers read it back
//! through these wrappers.

pub mod user;
