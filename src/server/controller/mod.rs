//! HTTP controller endpoints for the species-finder API.
//!
//! Controllers extract request parameters, call into the service layer and map the
//! result onto an HTTP response. Errors are returned as [`Error`](crate::server::error::Error)
//! which carries its own status mapping.

pub mod species;
