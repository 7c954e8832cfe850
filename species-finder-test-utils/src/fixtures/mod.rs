//! Response bodies and request paths mimicking the external knowledge sources.
//!
//! - `wikipedia` - page summary documents from the Wikipedia REST API
//! - `wolfram` - full results documents from the Wolfram|Alpha API

pub mod wikipedia;
pub mod wolfram;
