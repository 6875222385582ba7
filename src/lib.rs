//! Compensation and Progressive Taxation Engine
//!
//! This crate provides the calculation core of an enterprise management
//! portal: bracket-based salary and bonus resolution, progressive (marginal)
//! tax accumulation for corporate and wealth taxes, batch aggregation of
//! revenue entries, and assembly of immutable report snapshots.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
