//! # Policy Catalog
//!
//! The immutable, validated set of corporates loaded once per session.
//!
//! ## Load Pipeline
//!
//! 1. [`CatalogSource::read`] turns the source into a JSON value.
//! 2. [`CatalogSchema::validate`] checks structure against the bundled schema.
//! 3. Each corporate entry is deserialized with `serde` and built through
//!    `Corporate::new`, which enforces the grade-list invariants.
//!
//! Nothing after this boundary re-checks document shape.

use std::collections::HashMap;

use gmc_core::{Corporate, Grade, LookupError};
use serde::Deserialize;
use serde_json::Value;

use crate::error::DataLoadError;
use crate::source::CatalogSource;
use crate::validate::CatalogSchema;

/// Body of one corporate entry in the data document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CorporateDocument {
    has_grades: bool,
    grades: Vec<Grade>,
}

/// All corporates, in document order, with a name index.
#[derive(Debug, Clone)]
pub struct PolicyCatalog {
    corporates: Vec<Corporate>,
    by_name: HashMap<String, usize>,
}

impl PolicyCatalog {
    /// Load, validate and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`DataLoadError`] naming the source and the cause when the
    /// source is unreachable, malformed, fails schema validation or breaks a
    /// domain invariant.
    pub fn load(source: &CatalogSource) -> Result<Self, DataLoadError> {
        let result = Self::load_inner(source);
        match &result {
            Ok(catalog) => tracing::info!(
                source = %source,
                corporates = catalog.len(),
                "policy catalog loaded"
            ),
            Err(e) => tracing::warn!(source = %source, error = %e, "policy catalog load failed"),
        }
        result
    }

    fn load_inner(source: &CatalogSource) -> Result<Self, DataLoadError> {
        let document = source.read()?;
        let schema = CatalogSchema::bundled()?;
        schema
            .validate(&document)
            .map_err(|violations| DataLoadError::SchemaInvalid {
                source_name: source.to_string(),
                violations,
            })?;
        Self::from_validated(source, document)
    }

    /// Build from a document that already passed schema validation.
    fn from_validated(source: &CatalogSource, document: Value) -> Result<Self, DataLoadError> {
        let Value::Object(entries) = document else {
            return Err(DataLoadError::Malformed {
                source_name: source.to_string(),
                reason: "top-level value is not an object".to_string(),
            });
        };

        let mut corporates = Vec::with_capacity(entries.len());
        for (name, body) in entries {
            let doc: CorporateDocument =
                serde_json::from_value(body).map_err(|e| DataLoadError::Malformed {
                    source_name: source.to_string(),
                    reason: format!("corporate '{name}': {e}"),
                })?;
            let corporate = Corporate::new(name, doc.has_grades, doc.grades).map_err(|error| {
                DataLoadError::Invalid {
                    source_name: source.to_string(),
                    error,
                }
            })?;
            tracing::debug!(
                corporate = corporate.name(),
                grades = corporate.grades().len(),
                "corporate accepted"
            );
            corporates.push(corporate);
        }

        Ok(Self::from_corporates(corporates))
    }

    /// Build a catalog directly from domain values. Later entries with a
    /// repeated name replace earlier ones in place.
    pub fn from_corporates(corporates: impl IntoIterator<Item = Corporate>) -> Self {
        let mut list: Vec<Corporate> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for corporate in corporates {
            match by_name.get(corporate.name()) {
                Some(&i) => list[i] = corporate,
                None => {
                    by_name.insert(corporate.name().to_string(), list.len());
                    list.push(corporate);
                }
            }
        }
        Self {
            corporates: list,
            by_name,
        }
    }

    /// Corporate names in document order.
    pub fn corporate_names(&self) -> Vec<&str> {
        self.corporates.iter().map(Corporate::name).collect()
    }

    /// All corporates in document order.
    pub fn corporates(&self) -> &[Corporate] {
        &self.corporates
    }

    /// Exact, case-sensitive lookup by name.
    pub fn get_corporate(&self, name: &str) -> Option<&Corporate> {
        self.by_name.get(name).map(|&i| &self.corporates[i])
    }

    /// Like [`get_corporate`](Self::get_corporate), failing explicitly.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownCorporate` if the name is not in the
    /// catalog.
    pub fn require_corporate(&self, name: &str) -> Result<&Corporate, LookupError> {
        self.get_corporate(name)
            .ok_or_else(|| LookupError::UnknownCorporate {
                name: name.to_string(),
            })
    }

    /// Number of corporates.
    pub fn len(&self) -> usize {
        self.corporates.len()
    }

    /// Returns true if the catalog holds no corporates.
    pub fn is_empty(&self) -> bool {
        self.corporates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmc_core::PolicyError;
    use serde_json::json;

    fn grade(id: &str) -> Value {
        json!({
            "id": id,
            "name": id,
            "roomRent": "Twin Sharing A/C Room",
            "generalCopay": "0%",
            "intimationCopay": "0%",
            "preOp": "30 days",
            "postOp": "60 days",
            "refractivePower": "±7.0",
            "treatments": {}
        })
    }

    fn load_json(text: &str) -> Result<PolicyCatalog, DataLoadError> {
        PolicyCatalog::load(&CatalogSource::Json(text.to_string()))
    }

    #[test]
    fn loads_in_document_order() {
        let doc = json!({
            "Reliance Retail Limited": {
                "hasGrades": true,
                "grades": [grade("supervisory"), grade("executive")]
            },
            "Infosys Limited": { "hasGrades": false, "grades": [grade("default")] }
        });
        let catalog = load_json(&doc.to_string()).unwrap();
        assert_eq!(
            catalog.corporate_names(),
            vec!["Reliance Retail Limited", "Infosys Limited"]
        );
        assert_eq!(catalog.len(), 2);
        let reliance = catalog.get_corporate("Reliance Retail Limited").unwrap();
        assert!(reliance.has_multiple_grades());
        assert_eq!(reliance.grades().len(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let doc = json!({
            "Infosys Limited": { "hasGrades": false, "grades": [grade("default")] }
        });
        let catalog = load_json(&doc.to_string()).unwrap();
        assert!(catalog.get_corporate("infosys limited").is_none());
        assert_eq!(
            catalog.require_corporate("Wipro").unwrap_err(),
            LookupError::UnknownCorporate {
                name: "Wipro".to_string()
            }
        );
    }

    #[test]
    fn duplicate_grade_ids_rejected() {
        let doc = json!({
            "Acme": { "hasGrades": true, "grades": [grade("gold"), grade("gold")] }
        });
        let err = load_json(&doc.to_string()).unwrap_err();
        match err {
            DataLoadError::Invalid { error, .. } => assert_eq!(
                error,
                PolicyError::DuplicateGradeId {
                    corporate: "Acme".to_string(),
                    grade_id: "gold".to_string()
                }
            ),
            other => panic!("Expected Invalid, got: {other}"),
        }
    }

    #[test]
    fn empty_grade_list_rejected_by_schema() {
        let doc = json!({ "Acme": { "hasGrades": false, "grades": [] } });
        let err = load_json(&doc.to_string()).unwrap_err();
        assert!(
            matches!(err, DataLoadError::SchemaInvalid { .. }),
            "Expected SchemaInvalid, got: {err}"
        );
    }

    #[test]
    fn missing_required_field_rejected() {
        let doc = json!({ "Acme": { "grades": [grade("default")] } });
        let err = load_json(&doc.to_string()).unwrap_err();
        match err {
            DataLoadError::SchemaInvalid { violations, .. } => {
                assert!(violations
                    .violations()
                    .iter()
                    .any(|v| v.message.contains("hasGrades")));
            }
            other => panic!("Expected SchemaInvalid, got: {other}"),
        }
    }

    #[test]
    fn unknown_extra_fields_tolerated() {
        let mut g = grade("default");
        g["ambulance"] = json!("1% of SI");
        let doc = json!({ "Acme": { "hasGrades": false, "grades": [g], "tpa": "Mediassist" } });
        assert!(load_json(&doc.to_string()).is_ok());
    }

    #[test]
    fn loads_in_memory_value() {
        let doc = json!({ "Acme": { "hasGrades": false, "grades": [grade("default")] } });
        let catalog = PolicyCatalog::load(&CatalogSource::Value(doc)).unwrap();
        assert_eq!(catalog.corporate_names(), vec!["Acme"]);
    }

    #[test]
    fn from_corporates_replaces_repeated_name() {
        let g: Grade = serde_json::from_value(grade("default")).unwrap();
        let mut g2 = g.clone();
        g2.name = "Replacement".to_string();
        let catalog = PolicyCatalog::from_corporates([
            Corporate::new("Acme", false, vec![g]).unwrap(),
            Corporate::new("Beta", false, vec![g2.clone()]).unwrap(),
            Corporate::new("Acme", false, vec![g2]).unwrap(),
        ]);
        assert_eq!(catalog.corporate_names(), vec!["Acme", "Beta"]);
        assert_eq!(
            catalog.get_corporate("Acme").unwrap().first_grade().name,
            "Replacement"
        );
    }
}
