//! Catalog configuration.
//!
//! Points at the policy data document and names the corporate a new
//! session starts on. Defaults suit a data file sitting next to the
//! process. Override via environment variables or explicit construction.

use std::path::PathBuf;

use crate::catalog::PolicyCatalog;
use crate::error::DataLoadError;
use crate::source::CatalogSource;

/// Default data document filename.
pub const DEFAULT_DATA_PATH: &str = "policy_data_structured.json";

/// Configuration for loading the policy catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Path to the JSON or YAML data document.
    pub data_path: PathBuf,
    /// Corporate pre-selected when a session starts, if any.
    pub default_corporate: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_corporate: None,
        }
    }
}

impl CatalogConfig {
    /// Configuration for an explicit data path.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            default_corporate: None,
        }
    }

    /// Set the corporate a new session starts on.
    pub fn with_default_corporate(mut self, name: impl Into<String>) -> Self {
        self.default_corporate = Some(name.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GMC_POLICY_DATA` (default: `policy_data_structured.json`)
    /// - `GMC_DEFAULT_CORPORATE` (default: none; empty means none)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyValue` if `GMC_POLICY_DATA` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = match lookup("GMC_POLICY_DATA") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::EmptyValue("GMC_POLICY_DATA".to_string()))
            }
            Some(raw) => PathBuf::from(raw),
            None => PathBuf::from(DEFAULT_DATA_PATH),
        };
        let default_corporate = lookup("GMC_DEFAULT_CORPORATE").filter(|s| !s.trim().is_empty());
        Ok(Self {
            data_path,
            default_corporate,
        })
    }

    /// The catalog source this configuration points at.
    pub fn source(&self) -> CatalogSource {
        CatalogSource::Path(self.data_path.clone())
    }

    /// Load the catalog from the configured path.
    ///
    /// # Errors
    ///
    /// Propagates any [`DataLoadError`] from [`PolicyCatalog::load`].
    pub fn load_catalog(&self) -> Result<PolicyCatalog, DataLoadError> {
        PolicyCatalog::load(&self.source())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    EmptyValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, CatalogConfig::default());
    }

    #[test]
    fn reads_both_variables() {
        let cfg = CatalogConfig::from_lookup(lookup_from(&[
            ("GMC_POLICY_DATA", "/srv/gmc/policies.yaml"),
            ("GMC_DEFAULT_CORPORATE", "Tata Consultancy Services"),
        ]))
        .unwrap();
        assert_eq!(cfg.data_path, PathBuf::from("/srv/gmc/policies.yaml"));
        assert_eq!(cfg.default_corporate.as_deref(), Some("Tata Consultancy Services"));
    }

    #[test]
    fn empty_default_corporate_means_none() {
        let cfg =
            CatalogConfig::from_lookup(lookup_from(&[("GMC_DEFAULT_CORPORATE", "  ")])).unwrap();
        assert!(cfg.default_corporate.is_none());
    }

    #[test]
    fn empty_data_path_rejected() {
        let err = CatalogConfig::from_lookup(lookup_from(&[("GMC_POLICY_DATA", "")])).unwrap_err();
        assert_eq!(err.to_string(), "GMC_POLICY_DATA is set but empty");
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let cfg = CatalogConfig::new("/nonexistent/gmc/policies.json");
        assert!(matches!(
            cfg.load_catalog(),
            Err(DataLoadError::Unreachable { .. })
        ));
    }
}
