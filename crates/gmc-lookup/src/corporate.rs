//! # Corporate and Grade Resolution
//!
//! Suggesting corporates from a typed prefix, and deciding whether a
//! corporate's grade can be picked automatically.
//!
//! ## Auto-selection Rule
//!
//! A corporate's first grade is selected without asking when the
//! `hasGrades` flag is false **or** the grade list has exactly one entry.
//! Both conditions are checked: the flag says "don't force a choice", the
//! length check covers single-entry lists flagged as multi-grade.

use gmc_catalog::PolicyCatalog;
use gmc_core::{Corporate, Grade};
use serde::Serialize;

/// Outcome of resolving a corporate's grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "grades", rename_all = "snake_case")]
pub enum GradeSelection<'a> {
    /// The single applicable grade; no user choice needed.
    AutoSelected(&'a Grade),
    /// The caller must pick one of these grades, in catalog order.
    RequiresUserChoice(&'a [Grade]),
}

impl<'a> GradeSelection<'a> {
    /// The auto-selected grade, if any.
    pub fn auto_selected(&self) -> Option<&'a Grade> {
        match *self {
            Self::AutoSelected(grade) => Some(grade),
            Self::RequiresUserChoice(_) => None,
        }
    }
}

/// Corporate names containing `query`, case-insensitively, in catalog order.
///
/// An empty query yields no suggestions rather than every corporate. The
/// query is not trimmed.
pub fn find_matching_corporates<'c>(catalog: &'c PolicyCatalog, query: &str) -> Vec<&'c str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .corporates()
        .iter()
        .map(Corporate::name)
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

/// Decide whether the corporate's grade is automatic or needs a choice.
pub fn resolve_grade_selection(corporate: &Corporate) -> GradeSelection<'_> {
    if !corporate.has_multiple_grades() || corporate.grades().len() == 1 {
        GradeSelection::AutoSelected(corporate.first_grade())
    } else {
        GradeSelection::RequiresUserChoice(corporate.grades())
    }
}
