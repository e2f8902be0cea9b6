//! # gmc-catalog — Policy Catalog Loading
//!
//! Turns a policy data document into an immutable, strongly typed
//! [`PolicyCatalog`]. Loading is the single parse/validate boundary of the
//! workspace: after it, no code inspects raw document shape.
//!
//! ## Sources (`source`)
//!
//! JSON or YAML files, in-memory text, or an already-parsed value. Document
//! order is preserved end to end.
//!
//! ## Validation (`validate`)
//!
//! The bundled `policy-catalog.schema.json` is compiled with `jsonschema`
//! and every violation is reported with its instance path.
//!
//! ## Configuration (`config`)
//!
//! [`CatalogConfig::from_env`] reads `GMC_POLICY_DATA` and
//! `GMC_DEFAULT_CORPORATE`.
//!
//! ## Crate Policy
//!
//! - Depends only on `gmc-core` internally.
//! - Load failures are values ([`DataLoadError`]); retrying means calling
//!   [`PolicyCatalog::load`] again.
//! - Emits `tracing` events; never installs a subscriber.

pub mod catalog;
pub mod config;
pub mod error;
pub mod source;
pub mod validate;

pub use catalog::PolicyCatalog;
pub use config::{CatalogConfig, ConfigError};
pub use error::DataLoadError;
pub use source::CatalogSource;
pub use validate::{CatalogSchema, ValidationViolations, Violation};
