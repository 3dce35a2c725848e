use std::io::Write;

use medscan::application::ports::{DatasetError, MedicineStore};
use medscan::domain::MedicineRecord;
use medscan::infrastructure::dataset::MedicineCatalog;

fn record(name: &str, generic: &str, brand: &str, category: &str) -> MedicineRecord {
    MedicineRecord {
        name: name.to_string(),
        generic_name: generic.to_string(),
        brand_name: brand.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

fn sample_catalog() -> MedicineCatalog {
    MedicineCatalog::from_records(vec![
        record("Paracetamol Extra", "Acetaminophen", "Panadol Extra", "Analgesic"),
        record("Paracetamol", "Acetaminophen", "Tylenol", "Analgesic"),
        record("Aspirin", "Acetylsalicylic acid", "Disprin", "NSAID"),
        record("Ibuprofen", "Ibuprofen", "Advil", "NSAID"),
    ])
}

#[test]
fn given_mixed_case_query_when_find_by_name_then_lookup_is_case_insensitive() {
    let catalog = sample_catalog();

    let upper = catalog.find_by_name("Aspirin").unwrap();
    let lower = catalog.find_by_name("aspirin").unwrap();

    assert_eq!(upper, lower);
    assert_eq!(upper.name, "Aspirin");
}

#[test]
fn given_exact_and_substring_candidates_when_find_by_name_then_exact_match_wins() {
    let catalog = sample_catalog();

    // "Paracetamol Extra" comes first in dataset order, but the exact pass
    // must pick plain "Paracetamol".
    let found = catalog.find_by_name("paracetamol").unwrap();

    assert_eq!(found.brand_name, "Tylenol");
}

#[test]
fn given_partial_query_when_find_by_name_then_falls_back_to_substring_match() {
    let catalog = sample_catalog();

    let found = catalog.find_by_name("buprof").unwrap();

    assert_eq!(found.name, "Ibuprofen");
}

#[test]
fn given_unknown_query_when_find_by_name_then_returns_none() {
    let catalog = sample_catalog();

    assert!(catalog.find_by_name("unobtanium").is_none());
}

#[test]
fn given_brand_name_query_when_find_fuzzy_then_matches_across_name_fields() {
    let catalog = sample_catalog();

    let found = catalog.find_fuzzy("tylenol").unwrap();

    assert_eq!(found.name, "Paracetamol");
}

#[test]
fn given_more_matches_than_limit_when_suggest_then_caps_at_limit_in_dataset_order() {
    let records = (0..8)
        .map(|i| record(&format!("Cetirizine {}", i), "Cetirizine", "Zyrtec", "Antihistamine"))
        .collect();
    let catalog = MedicineCatalog::from_records(records);

    let suggestions = catalog.suggest("cetirizine", 5);

    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0].name, "Cetirizine 0");
    assert_eq!(suggestions[4].name, "Cetirizine 4");
}

#[test]
fn given_generic_name_query_when_suggest_then_projection_has_four_fields() {
    let catalog = sample_catalog();

    let suggestions = catalog.suggest("acetylsalicylic", 5);

    assert_eq!(suggestions.len(), 1);
    let s = &suggestions[0];
    assert_eq!(s.name, "Aspirin");
    assert_eq!(s.generic_name, "Acetylsalicylic acid");
    assert_eq!(s.brand_name, "Disprin");
    assert_eq!(s.category, "NSAID");
}

#[test]
fn given_json_dataset_file_when_loaded_then_records_are_queryable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"medicines": [{{"name": "Loratadine", "generic_name": "Loratadine", "brand_name": "Claritin", "category": "Antihistamine"}}]}}"#
    )
    .unwrap();

    let catalog = MedicineCatalog::from_json_file(file.path()).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_by_name("loratadine").unwrap().brand_name, "Claritin");
}

#[test]
fn given_missing_dataset_file_when_loaded_then_signals_unavailable() {
    let result = MedicineCatalog::from_json_file("/nonexistent/medicines.json");

    assert!(matches!(result, Err(DatasetError::Unavailable(_))));
}

#[test]
fn given_malformed_json_when_loaded_then_signals_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "this is not json").unwrap();

    let result = MedicineCatalog::from_json_file(file.path());

    assert!(matches!(result, Err(DatasetError::Malformed(_))));
}

#[test]
fn given_csv_dataset_when_loaded_then_empty_cells_become_empty_strings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "name,generic_name,brand_name,manufacturer,category,description,uses,side_effects,dosage,storage,precautions,interactions,how_to_use"
    )
    .unwrap();
    writeln!(file, "Paracetamol,Acetaminophen,Tylenol,,Analgesic,,,,,,,,").unwrap();

    let catalog = MedicineCatalog::from_csv_file(file.path()).unwrap();
    let found = catalog.find_fuzzy("tylenol").unwrap();

    assert_eq!(found.name, "Paracetamol");
    assert_eq!(found.manufacturer, "");
    assert_eq!(found.dosage, "");
}

#[test]
fn given_missing_csv_file_when_loaded_then_signals_unavailable() {
    let result = MedicineCatalog::from_csv_file("/nonexistent/medicine_dataset.csv");

    assert!(matches!(result, Err(DatasetError::Unavailable(_))));
}

#[test]
fn given_record_with_empty_fields_when_serialized_then_empty_fields_are_omitted() {
    let record = record("Paracetamol", "Acetaminophen", "Tylenol", "Analgesic");

    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.get("name").unwrap(), "Paracetamol");
    assert!(!object.contains_key("manufacturer"));
    assert!(!object.contains_key("dosage"));
}
