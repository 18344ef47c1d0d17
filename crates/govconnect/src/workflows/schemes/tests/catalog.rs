use std::io::Cursor;

use super::common::*;
use crate::workflows::schemes::catalog::{CatalogImportError, CatalogImporter, StoredScheme};
use crate::workflows::schemes::domain::EligibilityRule;
use crate::workflows::schemes::seed_catalog;

#[test]
fn seed_catalog_ships_six_active_schemes_in_publication_order() {
    let schemes = seed_catalog();

    let ids: Vec<&str> = schemes.iter().map(|scheme| scheme.id.0.as_str()).collect();
    assert_eq!(ids, ["pm-kisan", "pmjay", "pmay", "nsap", "pmmy", "bbbp"]);
    assert!(schemes.iter().all(|scheme| scheme.is_active));
}

#[test]
fn seed_rules_capture_published_criteria() {
    let schemes = seed_catalog();

    let nsap = schemes
        .iter()
        .find(|scheme| scheme.id.0 == "nsap")
        .expect("nsap seeded");
    assert_eq!(nsap.eligibility.min_age, Some(60));
    assert_eq!(nsap.eligibility.income_limit, Some(120_000.0));

    let bbbp = schemes
        .iter()
        .find(|scheme| scheme.id.0 == "bbbp")
        .expect("bbbp seeded");
    assert_eq!(bbbp.eligibility.gender, Some(vec!["female".to_string()]));
    assert_eq!(bbbp.eligibility.max_age, Some(18));

    let pm_kisan = schemes
        .iter()
        .find(|scheme| scheme.id.0 == "pm-kisan")
        .expect("pm-kisan seeded");
    let occupations = pm_kisan
        .eligibility
        .occupation
        .clone()
        .expect("occupation rule");
    assert!(occupations.contains(&"farmer".to_string()));
}

#[test]
fn stored_rows_round_trip_through_list_encoding() {
    for scheme in seed_catalog() {
        let stored = StoredScheme::from_scheme(&scheme);
        assert_eq!(stored.decode(), scheme, "round trip for {}", scheme.id);
    }
}

#[test]
fn malformed_list_columns_decode_as_unrestricted() {
    let mut stored = StoredScheme::from_scheme(&scheme("relief-fund", EligibilityRule::default()));
    stored.gender = Some("not-json".to_string());
    stored.occupation = Some("[]".to_string());
    stored.caste = Some("   ".to_string());

    let decoded = stored.decode();
    assert_eq!(decoded.eligibility.gender, None);
    assert_eq!(decoded.eligibility.occupation, None);
    assert_eq!(decoded.eligibility.caste, None);
}

#[test]
fn csv_import_deduplicates_and_keeps_inactive_rows() {
    let csv = "id,title,description,benefits,department,application_process,required_documents,min_age,max_age,gender,occupation,caste,state,income_limit,is_active\n\
widow-pension,Widow Pension,State widow pension,Monthly pension,Social Welfare,Apply at the taluk office,\"[\"\"Aadhaar Card\"\",\"\"Death Certificate\"\"]\",40,,\"[\"\"female\"\"]\",,,,120000,true\n\
widow-pension,Duplicate Row,ignored,ignored,ignored,ignored,,,,,,,,,false\n\
student-grant,Student Grant,Merit grant,Annual grant,Education,Apply online,,,18,,,,,,false\n";

    let schemes = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

    assert_eq!(schemes.len(), 2);
    assert_eq!(schemes[0].id.0, "widow-pension");
    assert_eq!(schemes[0].title, "Widow Pension");
    assert_eq!(schemes[0].eligibility.min_age, Some(40));
    assert_eq!(schemes[0].eligibility.income_limit, Some(120_000.0));
    assert_eq!(
        schemes[0].eligibility.gender,
        Some(vec!["female".to_string()])
    );
    assert_eq!(
        schemes[0].required_documents,
        vec!["Aadhaar Card", "Death Certificate"]
    );
    assert!(schemes[0].is_active);

    assert_eq!(schemes[1].id.0, "student-grant");
    assert!(!schemes[1].is_active);
    assert_eq!(schemes[1].eligibility.max_age, Some(18));
    assert!(schemes[1].required_documents.is_empty());
}

#[test]
fn import_from_missing_path_reports_io_error() {
    let error = CatalogImporter::from_path("./does-not-exist.csv").expect_err("expected io error");

    match error {
        CatalogImportError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn unparsable_rows_report_csv_errors() {
    let csv = "id,title,description,benefits,department,application_process,required_documents,min_age,max_age,gender,occupation,caste,state,income_limit,is_active\n\
pension,Pension,desc,benefit,dept,process,,not-a-number,,,,,,,true\n";

    let error = CatalogImporter::from_reader(Cursor::new(csv)).expect_err("expected csv error");

    match error {
        CatalogImportError::Csv(_) => {}
        other => panic!("expected csv error, got {other:?}"),
    }
}
