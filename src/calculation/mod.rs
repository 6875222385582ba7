//! Calculation logic for the Compensation and Progressive Taxation Engine.
//!
//! This module contains all the calculation functions: compensation
//! resolution by bracket interpolation, progressive (marginal) tax
//! accumulation, the legacy flat-bracket tax variant, batch aggregation of
//! revenue entries, and report snapshot assembly.

mod batch;
mod compensation;
mod flat_tax;
mod progressive_tax;
mod rounding;
mod snapshot;

pub use batch::{BatchOutcome, BatchRow, aggregate_batch};
pub use compensation::{CompensationOutcome, resolve_compensation};
pub use flat_tax::flat_bracket_tax;
pub use progressive_tax::accumulate_progressive_tax;
pub use rounding::round_to_unit;
pub use snapshot::{SnapshotFigures, build_report_snapshot};
