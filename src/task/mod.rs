//! Task management for Jotter.
//!
//! This module implements the task-management core: creating validated task
//! records with sequentially assigned identifiers, retrieving and listing
//! stored tasks, updating descriptions, deleting tasks, and toggling
//! completion status. Identifiers are never reused within the lifetime of a
//! repository instance, deletions included. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
