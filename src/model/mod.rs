//! Types shared between the HTTP API and its consumers.

pub mod api;
pub mod species;
