//! # Schema Validation
//!
//! Structural validation of policy data documents against the bundled
//! `policy-catalog.schema.json` (Draft 2020-12).
//!
//! ## Trust Boundary
//!
//! Every document passes through [`CatalogSchema::validate`] before any
//! typed conversion. Failures carry every violation found, each with the
//! instance path, the schema path and a message, so a data author can fix
//! the document in one pass.
//!
//! The schema checks shape only. Constraints that JSON Schema cannot
//! express (grade ids unique within a corporate) are enforced by
//! `gmc_core::Corporate::new`.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::DataLoadError;

/// The catalog schema, embedded at compile time.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../schemas/policy-catalog.schema.json");

/// Filename the schema is reported under.
pub const CATALOG_SCHEMA_NAME: &str = "policy-catalog.schema.json";

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compiled validator for the catalog schema.
///
/// Compiling is cheap enough to do once per load; the validator holds no
/// state between documents.
pub struct CatalogSchema {
    validator: Validator,
}

impl fmt::Debug for CatalogSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSchema")
            .field("schema", &CATALOG_SCHEMA_NAME)
            .finish()
    }
}

impl CatalogSchema {
    /// Compile the bundled schema.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Schema` if the embedded schema is not valid
    /// JSON or does not compile.
    pub fn bundled() -> Result<Self, DataLoadError> {
        let schema: Value = serde_json::from_str(CATALOG_SCHEMA_JSON).map_err(|e| {
            DataLoadError::Schema(format!("{CATALOG_SCHEMA_NAME}: invalid JSON: {e}"))
        })?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| DataLoadError::Schema(format!("{CATALOG_SCHEMA_NAME}: {e}")))?;

        Ok(Self { validator })
    }

    /// Validate a parsed document, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns the full violation list when the document is invalid.
    pub fn validate(&self, instance: &Value) -> Result<(), ValidationViolations> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationViolations { violations })
        }
    }
}
