//! # Load Errors
//!
//! `DataLoadError` is the single failure type of [`PolicyCatalog::load`].
//! Each variant names the source it was loading so the view can show the
//! cause without further context.
//!
//! [`PolicyCatalog::load`]: crate::PolicyCatalog::load

use gmc_core::PolicyError;
use thiserror::Error;

use crate::validate::ValidationViolations;

/// The catalog could not be loaded from its data source.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The source could not be read at all.
    #[error("policy data source '{source_name}' is unreachable: {reason}")]
    Unreachable {
        /// Description of the source (usually a path).
        source_name: String,
        /// Reason the source could not be read.
        reason: String,
    },

    /// The source was read but is not well-formed JSON or YAML.
    #[error("policy data source '{source_name}' is malformed: {reason}")]
    Malformed {
        /// Description of the source.
        source_name: String,
        /// Parser error.
        reason: String,
    },

    /// The document did not conform to the catalog schema.
    #[error("policy data source '{source_name}' failed schema validation:\n{violations}")]
    SchemaInvalid {
        /// Description of the source.
        source_name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The document conformed to the schema but broke a domain invariant.
    #[error("policy data source '{source_name}' is invalid: {error}")]
    Invalid {
        /// Description of the source.
        source_name: String,
        /// The violated invariant.
        #[source]
        error: PolicyError,
    },

    /// The bundled catalog schema failed to compile.
    #[error("catalog schema could not be compiled: {0}")]
    Schema(String),
}
