//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversion_provider;
pub mod phrasing_provider;
pub mod random_source;
