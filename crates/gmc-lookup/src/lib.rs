//! # gmc-lookup — Lookup Engine
//!
//! Pure lookups over a loaded [`PolicyCatalog`](gmc_catalog::PolicyCatalog),
//! plus the caller-owned [`LookupSession`] that threads a user's selections
//! through them.
//!
//! ## Operations
//!
//! - [`find_matching_corporates`]: corporate suggestions for typed text.
//! - [`resolve_grade_selection`]: auto-select a grade or ask for a choice.
//! - [`match_treatment`]: bidirectional substring treatment matching.
//! - [`suggest_treatments`]: treatment dropdown contents.
//! - [`LookupSession::select_treatment`]: commit a picked suggestion by exact key.
//! - [`LookupSession::decode`]: the [`BenefitsReport`] for the current
//!   selection.
//!
//! ## Crate Policy
//!
//! - Every free function here is pure and synchronous.
//! - "Nothing matched" is a value ([`TreatmentOutcome::NoMatch`]); asking
//!   for a lookup the selection cannot answer is a `LookupError`.
//! - Rendering, navigation and input throttling (such as waiting for two
//!   typed characters before suggesting) belong to the view.

pub mod corporate;
pub mod report;
pub mod session;
pub mod treatment;

pub use corporate::{find_matching_corporates, resolve_grade_selection, GradeSelection};
pub use gmc_core::format_treatment_name;
pub use report::BenefitsReport;
pub use session::LookupSession;
pub use treatment::{
    match_treatment, resolve_treatment, suggest_treatments, TreatmentChoice, TreatmentMatch,
    TreatmentOutcome,
};
