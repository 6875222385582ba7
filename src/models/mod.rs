//! Core data models for the Compensation and Progressive Taxation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bracket;
mod entry;
mod report;
mod role;

pub use bracket::{
    Bracket, BracketLookup, BracketTable, CompensationBracket, RateBracket,
};
pub use entry::RevenueEntry;
pub use report::{
    BatchTotals, CompensationResult, ComponentTotals, ReportSnapshot, TaxKind, TaxLine, TaxResult,
};
pub use role::RoleClass;
