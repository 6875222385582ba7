//! Configuration types for the compensation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{BracketTable, CompensationBracket, RateBracket};

/// Metadata about the configuration scope.
///
/// Identifies the organization and organizational unit the bracket tables
/// were drawn up for, and the revision of the tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeMetadata {
    /// The organization the tables apply to.
    pub organization: String,
    /// The organizational unit (e.g., a branch or subsidiary).
    pub unit: String,
    /// The revision of the bracket tables.
    pub version: String,
}

/// Compensation table file structure (compensation.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct CompensationTableFile {
    /// The compensation brackets, in any order.
    pub brackets: Vec<CompensationBracket>,
}

/// Rate table file structure (corporate_tax.yaml, wealth_tax.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableFile {
    /// The rate brackets, in any order.
    pub brackets: Vec<RateBracket>,
}

/// The complete engine configuration loaded from YAML files.
///
/// Aggregates the scope metadata and the three bracket tables. The rate
/// tables are checked for contiguity at construction; the compensation
/// table is only sorted and per-bracket validated, since compensation
/// brackets may legitimately leave sub-unit gaps between ranges.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Scope metadata.
    metadata: ScopeMetadata,
    /// Compensation brackets by revenue range.
    compensation: BracketTable<CompensationBracket>,
    /// Corporate tax brackets over net profit.
    corporate_tax: BracketTable<RateBracket>,
    /// Wealth tax brackets over the declared balance.
    wealth_tax: BracketTable<RateBracket>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NonContiguousBrackets`] when either rate
    /// table has a gap or does not start at zero.
    ///
    /// [`EngineError::NonContiguousBrackets`]: crate::error::EngineError::NonContiguousBrackets
    pub fn new(
        metadata: ScopeMetadata,
        compensation: BracketTable<CompensationBracket>,
        corporate_tax: BracketTable<RateBracket>,
        wealth_tax: BracketTable<RateBracket>,
    ) -> EngineResult<Self> {
        corporate_tax.validate_contiguous()?;
        wealth_tax.validate_contiguous()?;

        Ok(Self {
            metadata,
            compensation,
            corporate_tax,
            wealth_tax,
        })
    }

    /// Returns the scope metadata.
    pub fn metadata(&self) -> &ScopeMetadata {
        &self.metadata
    }

    /// Returns the compensation bracket table.
    pub fn compensation(&self) -> &BracketTable<CompensationBracket> {
        &self.compensation
    }

    /// Returns the corporate tax bracket table.
    pub fn corporate_tax(&self) -> &BracketTable<RateBracket> {
        &self.corporate_tax
    }

    /// Returns the wealth tax bracket table.
    pub fn wealth_tax(&self) -> &BracketTable<RateBracket> {
        &self.wealth_tax
    }
}
