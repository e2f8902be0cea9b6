//! # Error Types
//!
//! Domain errors shared across the workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations and are returned
//! as values; lookups never unwind.
//!
//! - [`PolicyError`] is raised while building domain types from input data.
//! - [`LookupError`] is a caller error: the caller asked for something the
//!   catalog or the current selection cannot answer.

use thiserror::Error;

/// A domain invariant was violated while constructing policy types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A corporate was declared with no grades at all.
    #[error("corporate '{corporate}' has an empty grade list")]
    EmptyGradeList {
        /// Corporate name.
        corporate: String,
    },

    /// A grade carried an empty id.
    #[error("corporate '{corporate}' has a grade with an empty id")]
    EmptyGradeId {
        /// Corporate name.
        corporate: String,
    },

    /// Two grades of the same corporate share an id.
    #[error("corporate '{corporate}' declares grade id '{grade_id}' more than once")]
    DuplicateGradeId {
        /// Corporate name.
        corporate: String,
        /// The repeated grade id.
        grade_id: String,
    },
}

/// A lookup could not be answered from the catalog or current selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The named corporate is not in the catalog.
    #[error("unknown corporate: '{name}'")]
    UnknownCorporate {
        /// The name that was looked up.
        name: String,
    },

    /// The corporate has no grade with this id.
    #[error("corporate '{corporate}' has no grade '{grade_id}'")]
    UnknownGrade {
        /// Corporate name.
        corporate: String,
        /// The grade id that was looked up.
        grade_id: String,
    },

    /// An operation needed an active corporate and none was selected.
    #[error("no corporate selected")]
    NoCorporateSelected,

    /// An operation needed an active grade and the corporate's grade
    /// has not been chosen yet.
    #[error("corporate '{corporate}' requires a grade to be selected first")]
    GradeNotSelected {
        /// Corporate name.
        corporate: String,
    },

    /// The active grade has no treatment with this exact key.
    #[error("grade '{grade_id}' has no treatment '{treatment}'")]
    UnknownTreatment {
        /// The active grade id.
        grade_id: String,
        /// The treatment key that was picked.
        treatment: String,
    },
}
