//! # Treatment Matching
//!
//! Resolves a free-text treatment query against a grade's treatment table.
//!
//! ## Matching Rule
//!
//! The query is trimmed and lower-cased. In table order, the first entry
//! whose lower-cased key contains the query, **or** is contained in the
//! query, wins. The bidirectional test favours recall: `"replacement"`
//! finds `"Joint Replacement-single"`, and `"cataract surgery consult"`
//! still finds `"Cataract"`. The cost is that very short queries match
//! broadly (a one-letter query matches the first key containing that
//! letter). Callers wanting stricter matching must check query length
//! before calling.
//!
//! ## Outcomes
//!
//! [`TreatmentOutcome`] separates three results a view renders
//! differently: a match, no match, and the user explicitly declaring the
//! treatment absent from the list.

use gmc_core::{format_treatment_name, TreatmentTable, TreatmentTerm};
use serde::Serialize;

/// A treatment table entry selected by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreatmentMatch<'a> {
    /// The table key as written in the data document.
    pub key: &'a str,
    /// Coverage terms for the key.
    pub term: &'a TreatmentTerm,
}

impl<'a> TreatmentMatch<'a> {
    /// Maximum coverage display string.
    pub fn cap(&self) -> &'a str {
        &self.term.cap
    }

    /// Copay display string.
    pub fn copay(&self) -> &'a str {
        &self.term.copay
    }

    /// The key formatted for display.
    pub fn display_name(&self) -> String {
        format_treatment_name(self.key)
    }
}

/// Result of a treatment lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "treatment", rename_all = "snake_case")]
pub enum TreatmentOutcome<'a> {
    /// A table entry satisfied the query.
    Matched(TreatmentMatch<'a>),
    /// Nothing satisfied the query. A valid negative result, not an error.
    NoMatch,
    /// The user declared the treatment not in the list.
    ExplicitlyAbsent,
}

impl<'a> TreatmentOutcome<'a> {
    /// The match, if any.
    pub fn matched(&self) -> Option<TreatmentMatch<'a>> {
        match *self {
            Self::Matched(m) => Some(m),
            Self::NoMatch | Self::ExplicitlyAbsent => None,
        }
    }
}

/// What the user asked for in the treatment field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TreatmentChoice {
    /// Nothing entered yet.
    #[default]
    Empty,
    /// Free text, matched with [`match_treatment`].
    Query(String),
    /// A key picked from the suggestions, looked up exactly.
    Selected(String),
    /// The "not in list" option.
    NotInList,
}

impl TreatmentChoice {
    /// Returns true if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Match a free-text query against a treatment table.
///
/// Returns [`TreatmentOutcome::NoMatch`] for an empty table, a blank query,
/// or when no key satisfies the bidirectional substring test.
pub fn match_treatment<'a>(table: &'a TreatmentTable, query: &str) -> TreatmentOutcome<'a> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || table.is_empty() {
        return TreatmentOutcome::NoMatch;
    }
    table
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            key.contains(&query) || query.contains(&key)
        })
        .map_or(TreatmentOutcome::NoMatch, |(key, term)| {
            TreatmentOutcome::Matched(TreatmentMatch { key, term })
        })
}

/// Resolve a user's treatment choice against a table.
///
/// `Empty` and blank queries resolve to `NoMatch`; `NotInList` always
/// resolves to `ExplicitlyAbsent`. A `Selected` key bypasses substring
/// matching, so an earlier key contained in it cannot win.
pub fn resolve_treatment<'a>(
    table: &'a TreatmentTable,
    choice: &TreatmentChoice,
) -> TreatmentOutcome<'a> {
    match choice {
        TreatmentChoice::Empty => TreatmentOutcome::NoMatch,
        TreatmentChoice::Query(query) => match_treatment(table, query),
        TreatmentChoice::Selected(key) => table
            .get_key_value(key)
            .map_or(TreatmentOutcome::NoMatch, |(key, term)| {
                TreatmentOutcome::Matched(TreatmentMatch { key, term })
            }),
        TreatmentChoice::NotInList => TreatmentOutcome::ExplicitlyAbsent,
    }
}

/// Keys containing `query`, case-insensitively, in table order.
///
/// One-directional, unlike [`match_treatment`]. An empty query lists every
/// key. The "not in list" option is not included; views append it.
pub fn suggest_treatments<'a>(table: &'a TreatmentTable, query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    table
        .keys()
        .filter(|key| needle.is_empty() || key.to_lowercase().contains(&needle))
        .collect()
}
