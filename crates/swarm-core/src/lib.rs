//! Core types and definitions for the SWARM wave simulation.
//!
//! This crate defines the vocabulary shared by the engine and its hosts:
//! geometry, enemy kinds, tuning constants, configuration, errors and
//! state snapshots. It has no dependency on any rendering or windowing
//! framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use config::WorldConfig;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
