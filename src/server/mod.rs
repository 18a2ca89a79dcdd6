//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, controllers, the
//! application workflow and supporting services, repositories over the SeaORM entities,
//! configuration, startup wiring and notification dispatch.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod notify;
pub mod router;
pub mod service;
pub mod startup;
