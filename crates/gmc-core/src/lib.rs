//! # gmc-core — Foundational Types for the GMC Decoder
//!
//! Defines the domain model every other crate in the workspace builds on:
//! corporates, their policy grades, and each grade's treatment table.
//! Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated constructors.** A `Corporate` can only be built through
//!    [`Corporate::new`], which rejects empty grade lists and duplicate
//!    grade ids. Code holding a `Corporate` never re-checks its shape.
//!
//! 2. **Opaque coverage values.** Caps and copays (`"₹40,000"`, `"12.5%"`)
//!    are display strings. Nothing in the workspace parses or computes
//!    with them.
//!
//! 3. **Ordered treatment tables.** `TreatmentTable` keeps document order,
//!    since first-match semantics depend on it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gmc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod format;
pub mod policy;

pub use error::{LookupError, PolicyError};
pub use format::format_treatment_name;
pub use policy::{Corporate, Grade, GradeId, TreatmentTable, TreatmentTerm};
