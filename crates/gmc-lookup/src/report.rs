//! The decoded benefits summary handed to the view.

use gmc_core::Grade;
use serde::Serialize;

use crate::treatment::TreatmentOutcome;

/// Everything a view needs to render a grade's benefits.
///
/// `treatment` is `None` when the user entered no treatment; otherwise it
/// holds the match, `NoMatch`, or `ExplicitlyAbsent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsReport<'a> {
    /// The selected corporate's name.
    pub corporate: &'a str,
    /// The selected grade.
    pub grade: &'a Grade,
    /// Outcome of the treatment lookup, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<TreatmentOutcome<'a>>,
}

impl<'a> BenefitsReport<'a> {
    /// Display label of the grade.
    pub fn grade_name(&self) -> &'a str {
        &self.grade.name
    }

    /// Room rent eligibility.
    pub fn room_rent(&self) -> &'a str {
        &self.grade.room_rent
    }

    /// General copay.
    pub fn general_copay(&self) -> &'a str {
        &self.grade.general_copay
    }

    /// Copay applied when the TPA is not intimated in time.
    pub fn intimation_copay(&self) -> &'a str {
        &self.grade.intimation_copay
    }

    /// Pre- and post-hospitalization windows.
    pub fn hospitalization_windows(&self) -> (&'a str, &'a str) {
        (self.grade.pre_op.as_str(), self.grade.post_op.as_str())
    }

    /// Refractive eye surgery power limit.
    pub fn refractive_power(&self) -> &'a str {
        &self.grade.refractive_power
    }

    /// Grade-specific exclusions, if any.
    pub fn exclusions(&self) -> Option<&'a str> {
        self.grade.exclusions()
    }

    /// Grade-specific inclusions, if any.
    pub fn inclusions(&self) -> Option<&'a str> {
        self.grade.inclusions()
    }

    /// Free-text remarks, if any.
    pub fn remarks(&self) -> Option<&'a str> {
        self.grade.remarks()
    }
}
