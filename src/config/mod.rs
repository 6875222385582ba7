//! Configuration loading and management for the compensation engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: scope metadata, the compensation bracket table, and the two
//! tax rate tables.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded tables for: {}", config.metadata().organization);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationTableFile, EngineConfig, RateTableFile, ScopeMetadata};
