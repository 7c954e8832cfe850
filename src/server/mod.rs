//! Server application core modules.
//!
//! This module contains all server-side functionality of the species finder: HTTP
//! routing, configuration, the metadata resolution service, its cache backends and
//! the external knowledge sources it queries.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
