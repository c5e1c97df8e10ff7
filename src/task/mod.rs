//! Task record management.
//!
//! Tasks carry a unique title, an optional description and a due date that
//! may not lie in the past. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Input rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
