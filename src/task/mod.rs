//! Task store for the tracker.
//!
//! Owns the authoritative task collection and enforces its invariants: unique
//! identifiers, non-empty titles, and edits that touch only the comment and
//! status. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
