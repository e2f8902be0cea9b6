//! End-to-end lookups: load a catalog through `gmc-catalog`, then drive the
//! selection flow a view would, through the public API only.

use std::path::PathBuf;

use gmc_catalog::{CatalogSource, PolicyCatalog};
use gmc_core::LookupError;
use gmc_lookup::{
    find_matching_corporates, format_treatment_name, match_treatment, resolve_grade_selection,
    GradeSelection, LookupSession, TreatmentOutcome,
};
use serde_json::json;

fn grade(id: &str, treatments: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "name": id,
        "roomRent": "Single A/C Room",
        "generalCopay": "10%",
        "intimationCopay": "10% if not done within 3 days",
        "preOp": "30 days",
        "postOp": "60 days",
        "refractivePower": "±7.5",
        "treatments": treatments
    })
}

fn acme_beta() -> PolicyCatalog {
    let doc = json!({
        "Acme": {
            "hasGrades": false,
            "grades": [grade("default", json!({ "cataract": { "cap": "₹40,000", "copay": "10%" } }))]
        },
        "Beta": {
            "hasGrades": true,
            "grades": [
                grade("grade1", json!({ "cataract": { "cap": "₹35,000", "copay": "10%" } })),
                grade("grade2", json!({ "cataract": { "cap": "₹60,000", "copay": "0%" } }))
            ]
        }
    });
    PolicyCatalog::load(&CatalogSource::Value(doc)).unwrap()
}

fn sample_catalog() -> PolicyCatalog {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // crates/
    path.pop(); // repo root
    let data = path.join("data/policy_data_structured.json");
    PolicyCatalog::load(&CatalogSource::path(data)).unwrap()
}

#[test]
fn test_single_grade_corporate_flow() {
    let catalog = acme_beta();
    let acme = catalog.require_corporate("Acme").unwrap();
    let selection = resolve_grade_selection(acme);
    let default = match selection {
        GradeSelection::AutoSelected(grade) => grade,
        other => panic!("Expected AutoSelected, got: {other:?}"),
    };
    assert_eq!(default.id.as_str(), "default");

    let m = match_treatment(&default.treatments, "cata").matched().unwrap();
    assert_eq!(m.key, "cataract");
    assert_eq!(m.cap(), "₹40,000");
    assert_eq!(m.copay(), "10%");
}

#[test]
fn test_multi_grade_corporate_requires_choice() {
    let catalog = acme_beta();
    let beta = catalog.require_corporate("Beta").unwrap();
    match resolve_grade_selection(beta) {
        GradeSelection::RequiresUserChoice(grades) => {
            let ids: Vec<&str> = grades.iter().map(|g| g.id.as_str()).collect();
            assert_eq!(ids, vec!["grade1", "grade2"]);
        }
        other => panic!("Expected RequiresUserChoice, got: {other:?}"),
    }

    let mut session = LookupSession::new(&catalog);
    session.select_corporate("Beta").unwrap();
    assert_eq!(
        session.match_treatment("cata").unwrap_err(),
        LookupError::GradeNotSelected {
            corporate: "Beta".to_string()
        }
    );

    session.select_grade("grade2").unwrap();
    let outcome = session.match_treatment("cata").unwrap();
    assert_eq!(outcome.matched().map(|m| m.cap()), Some("₹60,000"));
}

#[test]
fn test_unknown_corporate_fails_explicitly() {
    let catalog = acme_beta();
    assert!(matches!(
        catalog.require_corporate("Gamma"),
        Err(LookupError::UnknownCorporate { .. })
    ));
    assert!(find_matching_corporates(&catalog, "").is_empty());
}

#[test]
fn test_sample_document_flow() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let catalog = sample_catalog();
    assert_eq!(
        find_matching_corporates(&catalog, "limited"),
        vec!["Reliance Retail Limited", "Infosys Limited"]
    );

    let mut session = LookupSession::new(&catalog);
    let selection = session.select_corporate("Tata Consultancy Services").unwrap();
    assert!(matches!(selection, GradeSelection::RequiresUserChoice(g) if g.len() == 3));

    session.select_grade("platinum-plus").unwrap();
    assert_eq!(
        session.treatment_suggestions("joint").unwrap(),
        vec!["Joint Replacement-single", "Joint Replacement-double"]
    );

    session.set_treatment_query("Knee joint replacement-single surgery");
    let report = session.decode().unwrap();
    assert_eq!(report.corporate, "Tata Consultancy Services");
    assert_eq!(report.grade_name(), "Platinum Plus");
    assert_eq!(report.general_copay(), "0%");
    assert_eq!(report.hospitalization_windows(), ("30 days", "60 days"));
    assert!(report.exclusions().is_some_and(|e| e.contains("Cosmetic")));
    let m = report.treatment.and_then(|t| t.matched()).unwrap();
    assert_eq!(m.key, "Joint Replacement-single");
    assert_eq!(m.cap(), "₹2.5 Lakhs");
    assert_eq!(m.display_name(), "Joint Replacement-single");

    session.return_to_selection();
    session.declare_not_in_list();
    assert_eq!(
        session.decode().unwrap().treatment,
        Some(TreatmentOutcome::ExplicitlyAbsent)
    );

    let selection = session.select_corporate("Infosys Limited").unwrap();
    assert_eq!(selection.auto_selected().map(|g| g.name.as_str()), Some("Default"));
    session.set_treatment_query("MATERNITY");
    let report = session.decode().unwrap();
    assert_eq!(
        report.treatment.and_then(|t| t.matched()).map(|m| m.cap()),
        Some("₹80,000")
    );
}

#[test]
fn test_report_serializes_for_view() {
    let catalog = acme_beta();
    let mut session = LookupSession::new(&catalog);
    session.select_corporate("Acme").unwrap();
    session.set_treatment_query("cataract");
    let value = serde_json::to_value(session.decode().unwrap()).unwrap();
    assert_eq!(value["corporate"], "Acme");
    assert_eq!(value["grade"]["roomRent"], "Single A/C Room");
    assert_eq!(value["treatment"]["kind"], "matched");
    assert_eq!(value["treatment"]["treatment"]["term"]["copay"], "10%");
}

#[test]
fn test_format_treatment_name() {
    assert_eq!(format_treatment_name("robotic surgeries"), "Robotic Surgeries");
    assert_eq!(format_treatment_name(""), "");
}
