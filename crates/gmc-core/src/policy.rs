//! # Policy Domain Types
//!
//! Corporates, grades and treatment tables as loaded from a policy data
//! document.
//!
//! ## Invariants
//!
//! - A `Corporate` has at least one grade, and grade ids are non-empty and
//!   unique within the corporate. Both are checked by [`Corporate::new`];
//!   there is no other way to build one.
//! - A `TreatmentTable` preserves insertion order. Inserting an existing key
//!   replaces its term in place (last write wins).
//! - Optional free-text fields holding an empty string read as absent.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PolicyError;

/// Identifier of a grade, unique within its corporate but not globally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeId(pub String);

impl GradeId {
    /// Wrap a raw grade id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GradeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Coverage terms for one treatment. Both values are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentTerm {
    /// Maximum reimbursement, e.g. `"₹40,000"` or `"50% of bill"`.
    pub cap: String,
    /// Employee copay, e.g. `"10%"`.
    pub copay: String,
}

impl TreatmentTerm {
    /// Build a term from its cap and copay.
    pub fn new(cap: impl Into<String>, copay: impl Into<String>) -> Self {
        Self {
            cap: cap.into(),
            copay: copay.into(),
        }
    }
}

/// Ordered mapping from treatment name to its coverage terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatmentTable {
    entries: Vec<(String, TreatmentTerm)>,
}

impl TreatmentTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a treatment. An existing key keeps its position and takes the
    /// new term.
    pub fn insert(&mut self, name: impl Into<String>, term: TreatmentTerm) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = term,
            None => self.entries.push((name, term)),
        }
    }

    /// Exact (case-sensitive) lookup by key.
    pub fn get(&self, name: &str) -> Option<&TreatmentTerm> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, term)| term)
    }

    /// Exact-key lookup returning the stored key alongside its terms.
    pub fn get_key_value(&self, name: &str) -> Option<(&str, &TreatmentTerm)> {
        self.iter().find(|(key, _)| *key == name)
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreatmentTerm)> {
        self.entries.iter().map(|(key, term)| (key.as_str(), term))
    }

    /// Iterate keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of treatments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no treatments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TreatmentTerm)> for TreatmentTable {
    fn from_iter<I: IntoIterator<Item = (K, TreatmentTerm)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, term) in iter {
            table.insert(name, term);
        }
        table
    }
}

impl Serialize for TreatmentTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, term) in &self.entries {
            map.serialize_entry(key, term)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TreatmentTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = TreatmentTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of treatment name to {cap, copay}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = TreatmentTable::new();
                while let Some((name, term)) = access.next_entry::<String, TreatmentTerm>()? {
                    table.insert(name, term);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// One policy tier of a corporate's GMC scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    /// Id, unique within the corporate.
    pub id: GradeId,
    /// Display label, e.g. `"Platinum Plus"`.
    pub name: String,
    /// Room rent eligibility rule.
    pub room_rent: String,
    /// Copay applied to every claim.
    pub general_copay: String,
    /// Copay applied when the TPA is not intimated in time.
    pub intimation_copay: String,
    /// Pre-hospitalization window.
    pub pre_op: String,
    /// Post-hospitalization window.
    pub post_op: String,
    /// Refractive eye surgery power limit.
    pub refractive_power: String,
    /// Free-text exclusions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<String>,
    /// Free-text inclusions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<String>,
    /// Free-text remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Treatment-specific coverage.
    pub treatments: TreatmentTable,
}

impl Grade {
    /// Exclusions, if present and non-empty.
    pub fn exclusions(&self) -> Option<&str> {
        non_empty(&self.exclusions)
    }

    /// Inclusions, if present and non-empty.
    pub fn inclusions(&self) -> Option<&str> {
        non_empty(&self.inclusions)
    }

    /// Remarks, if present and non-empty.
    pub fn remarks(&self) -> Option<&str> {
        non_empty(&self.remarks)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// An employer and its ordered, non-empty list of grades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corporate {
    name: String,
    #[serde(rename = "hasGrades")]
    has_multiple_grades: bool,
    grades: Vec<Grade>,
}

impl Corporate {
    /// Build a corporate, enforcing the grade-list invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::EmptyGradeList`] if `grades` is empty,
    /// [`PolicyError::EmptyGradeId`] if any grade id is empty, and
    /// [`PolicyError::DuplicateGradeId`] if two grades share an id.
    pub fn new(
        name: impl Into<String>,
        has_multiple_grades: bool,
        grades: Vec<Grade>,
    ) -> Result<Self, PolicyError> {
        let name = name.into();
        if grades.is_empty() {
            return Err(PolicyError::EmptyGradeList { corporate: name });
        }
        for (i, grade) in grades.iter().enumerate() {
            if grade.id.as_str().is_empty() {
                return Err(PolicyError::EmptyGradeId { corporate: name });
            }
            if grades[..i].iter().any(|earlier| earlier.id == grade.id) {
                return Err(PolicyError::DuplicateGradeId {
                    corporate: name,
                    grade_id: grade.id.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            has_multiple_grades,
            grades,
        })
    }

    /// Corporate name, the catalog key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `hasGrades` flag from the data document.
    pub fn has_multiple_grades(&self) -> bool {
        self.has_multiple_grades
    }

    /// All grades in document order. Never empty.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// The first grade, used whenever no user choice is required.
    pub fn first_grade(&self) -> &Grade {
        // Non-empty by construction.
        &self.grades[0]
    }

    /// Look up a grade by id.
    pub fn grade(&self, id: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.id.as_str() == id)
    }
}
