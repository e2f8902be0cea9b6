//! # Lookup Session
//!
//! Caller-owned selection state: the active corporate, the active grade and
//! the current treatment choice. Each view owns one session and passes
//! user actions into it; the catalog it borrows is never mutated.
//!
//! ## State Rules
//!
//! - Selecting a corporate clears the treatment choice. An auto-selected
//!   grade becomes active immediately; a multi-grade corporate leaves the
//!   grade unselected until [`LookupSession::select_grade`].
//! - A failed selection leaves the session unchanged.
//! - Treatment operations need an active grade and fail with
//!   `LookupError::GradeNotSelected` otherwise. They never fall back to
//!   `NoMatch`.

use gmc_catalog::{CatalogConfig, PolicyCatalog};
use gmc_core::{Corporate, Grade, LookupError};

use crate::corporate::{find_matching_corporates, resolve_grade_selection, GradeSelection};
use crate::report::BenefitsReport;
use crate::treatment::{
    match_treatment, resolve_treatment, suggest_treatments, TreatmentChoice, TreatmentMatch,
    TreatmentOutcome,
};

/// Selection state for one user working through the lookup flow.
#[derive(Debug, Clone)]
pub struct LookupSession<'c> {
    catalog: &'c PolicyCatalog,
    corporate: Option<&'c Corporate>,
    grade: Option<&'c Grade>,
    treatment: TreatmentChoice,
}

impl<'c> LookupSession<'c> {
    /// A session with nothing selected.
    pub fn new(catalog: &'c PolicyCatalog) -> Self {
        Self {
            catalog,
            corporate: None,
            grade: None,
            treatment: TreatmentChoice::Empty,
        }
    }

    /// A session starting on the configured default corporate, if any.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownCorporate` if the configured default is
    /// not in the catalog.
    pub fn from_config(
        catalog: &'c PolicyCatalog,
        config: &CatalogConfig,
    ) -> Result<Self, LookupError> {
        let mut session = Self::new(catalog);
        if let Some(name) = config.default_corporate.as_deref() {
            session.select_corporate(name)?;
        }
        Ok(session)
    }

    /// The catalog this session reads from.
    pub fn catalog(&self) -> &'c PolicyCatalog {
        self.catalog
    }

    /// Corporate suggestions for a partially typed name.
    pub fn suggest_corporates(&self, query: &str) -> Vec<&'c str> {
        find_matching_corporates(self.catalog, query)
    }

    /// Make `name` the active corporate.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownCorporate` if the name is not in the
    /// catalog; the session is left unchanged.
    pub fn select_corporate(&mut self, name: &str) -> Result<GradeSelection<'c>, LookupError> {
        let corporate = self.catalog.require_corporate(name)?;
        let selection = resolve_grade_selection(corporate);
        self.corporate = Some(corporate);
        self.grade = selection.auto_selected();
        self.treatment = TreatmentChoice::Empty;
        tracing::debug!(
            corporate = corporate.name(),
            auto_grade = self.grade.map(|g| g.id.as_str()),
            "corporate selected"
        );
        Ok(selection)
    }

    /// Make the grade with `grade_id` active.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NoCorporateSelected` without an active
    /// corporate, and `LookupError::UnknownGrade` if the corporate has no
    /// such grade.
    pub fn select_grade(&mut self, grade_id: &str) -> Result<&'c Grade, LookupError> {
        let corporate = self.corporate.ok_or(LookupError::NoCorporateSelected)?;
        let grade = corporate
            .grade(grade_id)
            .ok_or_else(|| LookupError::UnknownGrade {
                corporate: corporate.name().to_string(),
                grade_id: grade_id.to_string(),
            })?;
        self.grade = Some(grade);
        tracing::debug!(corporate = corporate.name(), grade = grade_id, "grade selected");
        Ok(grade)
    }

    /// Drop the grade choice (the "-- Select Grade --" option).
    pub fn clear_grade(&mut self) {
        self.grade = None;
    }

    /// The active corporate.
    pub fn corporate(&self) -> Option<&'c Corporate> {
        self.corporate
    }

    /// The active grade.
    pub fn grade(&self) -> Option<&'c Grade> {
        self.grade
    }

    /// The current treatment choice.
    pub fn treatment_choice(&self) -> &TreatmentChoice {
        &self.treatment
    }

    /// Record free text typed into the treatment field.
    pub fn set_treatment_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.treatment = if query.is_empty() {
            TreatmentChoice::Empty
        } else {
            TreatmentChoice::Query(query)
        };
    }

    /// Commit a treatment key picked from the suggestions.
    ///
    /// The key is looked up exactly, never through substring matching.
    ///
    /// # Errors
    ///
    /// Fails with `NoCorporateSelected` or `GradeNotSelected` without an
    /// active grade, and `UnknownTreatment` if the active grade has no such
    /// key. The recorded choice is unchanged on error.
    pub fn select_treatment(&mut self, picked: &str) -> Result<TreatmentMatch<'c>, LookupError> {
        let (_, grade) = self.require_grade()?;
        let (key, term) = grade
            .treatments
            .get_key_value(picked)
            .ok_or_else(|| LookupError::UnknownTreatment {
                grade_id: grade.id.to_string(),
                treatment: picked.to_string(),
            })?;
        self.treatment = TreatmentChoice::Selected(key.to_string());
        tracing::debug!(grade = grade.id.as_str(), treatment = key, "treatment selected");
        Ok(TreatmentMatch { key, term })
    }

    /// Record that the user picked "not in list".
    pub fn declare_not_in_list(&mut self) {
        self.treatment = TreatmentChoice::NotInList;
    }

    fn require_grade(&self) -> Result<(&'c Corporate, &'c Grade), LookupError> {
        let corporate = self.corporate.ok_or(LookupError::NoCorporateSelected)?;
        let grade = self.grade.ok_or_else(|| LookupError::GradeNotSelected {
            corporate: corporate.name().to_string(),
        })?;
        Ok((corporate, grade))
    }

    /// Match `query` against the active grade's treatments.
    ///
    /// # Errors
    ///
    /// Fails with `NoCorporateSelected` or `GradeNotSelected` when there is
    /// no treatment table to match against.
    pub fn match_treatment(&self, query: &str) -> Result<TreatmentOutcome<'c>, LookupError> {
        let (_, grade) = self.require_grade()?;
        Ok(match_treatment(&grade.treatments, query))
    }

    /// Resolve the recorded treatment choice against the active grade.
    ///
    /// # Errors
    ///
    /// Same as [`match_treatment`](Self::match_treatment).
    pub fn lookup_treatment(&self) -> Result<TreatmentOutcome<'c>, LookupError> {
        let (_, grade) = self.require_grade()?;
        Ok(resolve_treatment(&grade.treatments, &self.treatment))
    }

    /// Treatment names of the active grade containing `query`.
    ///
    /// # Errors
    ///
    /// Same as [`match_treatment`](Self::match_treatment).
    pub fn treatment_suggestions(&self, query: &str) -> Result<Vec<&'c str>, LookupError> {
        let (_, grade) = self.require_grade()?;
        Ok(suggest_treatments(&grade.treatments, query))
    }

    /// Assemble the benefits summary for the current selection.
    ///
    /// # Errors
    ///
    /// Fails with `NoCorporateSelected` or `GradeNotSelected` until both a
    /// corporate and a grade are active.
    pub fn decode(&self) -> Result<BenefitsReport<'c>, LookupError> {
        let (corporate, grade) = self.require_grade()?;
        let treatment = if self.treatment.is_empty() {
            None
        } else {
            Some(resolve_treatment(&grade.treatments, &self.treatment))
        };
        Ok(BenefitsReport {
            corporate: corporate.name(),
            grade,
            treatment,
        })
    }

    /// Navigate back from the results: the treatment choice is cleared,
    /// corporate and grade are kept.
    pub fn return_to_selection(&mut self) {
        self.treatment = TreatmentChoice::Empty;
    }

    /// Clear all selection state.
    pub fn reset(&mut self) {
        self.corporate = None;
        self.grade = None;
        self.treatment = TreatmentChoice::Empty;
    }
}
