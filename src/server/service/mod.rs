//! Service layer for business logic and orchestration.
//!
//! Services coordinate between caches and external knowledge sources. The species
//! finder is the only service: it owns the cache-aside lookup and the concurrent
//! provider fan-out.

pub mod species_finder;
