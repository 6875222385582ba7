//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading bracket
//! tables and scope metadata from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{BracketTable, CompensationBracket, RateBracket};

use super::types::{CompensationTableFile, EngineConfig, RateTableFile, ScopeMetadata};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the scope metadata and the bracket tables.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── scope.yaml           # Organization, unit, table revision
/// ├── compensation.yaml    # Compensation brackets by revenue range
/// ├── corporate_tax.yaml   # Corporate tax brackets over net profit
/// └── wealth_tax.yaml      # Wealth tax brackets over declared balance
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Tables revision: {}", loader.metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any bracket violates its own invariants
    /// - A rate table has a gap or does not start at zero
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compensation_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), compensation_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load scope.yaml
        let scope_path = path.join("scope.yaml");
        let metadata = Self::load_yaml::<ScopeMetadata>(&scope_path)?;

        // Load compensation.yaml
        let compensation_path = path.join("compensation.yaml");
        let compensation_file = Self::load_yaml::<CompensationTableFile>(&compensation_path)?;
        let compensation: BracketTable<CompensationBracket> =
            BracketTable::new(compensation_file.brackets)?;

        // Load the two rate tables
        let corporate_tax = Self::load_rate_table(&path.join("corporate_tax.yaml"))?;
        let wealth_tax = Self::load_rate_table(&path.join("wealth_tax.yaml"))?;

        let config = EngineConfig::new(metadata, compensation, corporate_tax, wealth_tax)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads one rate table file into a validated table.
    fn load_rate_table(path: &Path) -> EngineResult<BracketTable<RateBracket>> {
        let file = Self::load_yaml::<RateTableFile>(path)?;
        BracketTable::new(file.brackets)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the scope metadata.
    pub fn metadata(&self) -> &ScopeMetadata {
        self.config.metadata()
    }

    /// Returns the compensation bracket table.
    pub fn compensation(&self) -> &BracketTable<CompensationBracket> {
        self.config.compensation()
    }

    /// Returns the corporate tax bracket table.
    pub fn corporate_tax(&self) -> &BracketTable<RateBracket> {
        self.config.corporate_tax()
    }

    /// Returns the wealth tax bracket table.
    pub fn wealth_tax(&self) -> &BracketTable<RateBracket> {
        self.config.wealth_tax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().organization, "Meridian Holdings");
        assert_eq!(loader.metadata().unit, "default");
    }

    #[test]
    fn test_compensation_table_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.compensation();
        assert_eq!(table.len(), 2);
        assert_eq!(table.brackets()[0].min, dec("0"));
        assert_eq!(table.brackets()[1].min, dec("50001"));
    }

    #[test]
    fn test_compensation_bounds_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let first = loader.compensation().first().unwrap();
        assert_eq!(first.salary_min_employee, dec("2500"));
        assert_eq!(first.salary_max_employee, dec("3500"));
        assert_eq!(first.bonus_min_patron, dec("1000"));
        assert_eq!(first.bonus_max_patron, dec("2000"));
    }

    #[test]
    fn test_corporate_tax_table_is_contiguous() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.corporate_tax();
        assert!(table.validate_contiguous().is_ok());
        assert_eq!(table.first().map(|b| b.min), Some(Decimal::ZERO));
        assert_eq!(table.last().and_then(|b| b.max), None);
    }

    #[test]
    fn test_wealth_tax_table_is_contiguous() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.wealth_tax();
        assert!(table.validate_contiguous().is_ok());
        assert_eq!(table.first().map(|b| b.rate), Some(dec("1")));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scope.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_scope_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.metadata().organization, "Meridian Holdings");
        assert_eq!(loader.metadata().unit, "default");
        assert_eq!(loader.metadata().version, "2026-01-01");
    }
}
