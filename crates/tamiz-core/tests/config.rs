use std::io::Write;

use tamiz_core::config::{load_schema, parse_schema, CURRENT_VERSION};
use tamiz_core::{CoreError, InstrumentId};

const DEMO_SCHEMA: &str = include_str!("../../../demos/config.json");

fn minimal_evaluations() -> &'static str {
    r#"{
        "aq10": {"title": "AQ-10", "questions": ["a1","a2","a3","a4","a5","a6","a7","a8","a9","a10"]},
        "asrs": {"title": "ASRS", "questions": ["b1","b2","b3","b4","b5","b6"]},
        "vinegrad": {"title": "Vinegrad", "questions": ["c1"]}
    }"#
}

#[test]
fn demo_schema_loads_with_all_capabilities() {
    let schema = parse_schema(DEMO_SCHEMA).unwrap();
    assert_eq!(schema.config_version, CURRENT_VERSION);
    assert_eq!(schema.sections.len(), 3);
    assert!(schema.demographics.is_some());
    assert_eq!(schema.findings.as_ref().map(|f| f.groups.len()), Some(3));
    assert_eq!(schema.derived_fields.len(), 1);
    assert_eq!(schema.evaluations.get(InstrumentId::Vinegrad).questions.len(), 20);
    assert_eq!(
        schema.column_mapping.display_text("aq10_1"),
        Some("Suelo notar pequeños sonidos cuando otros no lo hacen")
    );
}

#[test]
fn v0_schema_migrates_pdf_styles() {
    let json = format!(
        r#"{{ "sections": [], "evaluations": {}, "column_mapping": {{}},
             "pdf_styles": {{ "header_text": "Tamizaje 2024" }} }}"#,
        minimal_evaluations()
    );
    let schema = parse_schema(&json).unwrap();
    assert_eq!(schema.config_version, 1);
    assert_eq!(schema.styles.header_text, "Tamizaje 2024");
    // Untouched style fields keep their defaults.
    assert_eq!(schema.styles.results_title, "Resultados de Tamizajes");
}

#[test]
fn optional_capabilities_default_to_absent() {
    let json = format!(r#"{{ "config_version": 1, "evaluations": {} }}"#, minimal_evaluations());
    let schema = parse_schema(&json).unwrap();
    assert!(schema.sections.is_empty());
    assert!(schema.demographics.is_none());
    assert!(schema.findings.is_none());
    assert!(schema.column_mapping.is_empty());
}

#[test]
fn missing_instrument_is_rejected() {
    let json = r#"{ "config_version": 1, "evaluations": {
        "aq10": {"title": "AQ-10", "questions": ["a1"]},
        "asrs": {"title": "ASRS", "questions": ["b1"]}
    } }"#;
    assert!(matches!(parse_schema(json), Err(CoreError::Serialization(_))));
}

#[test]
fn newer_version_is_rejected() {
    let json = format!(r#"{{ "config_version": 99, "evaluations": {} }}"#, minimal_evaluations());
    assert!(matches!(
        parse_schema(&json),
        Err(CoreError::UnsupportedVersion { found: 99, supported: 1 })
    ));
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_schema(&dir.path().join("config.json")).unwrap_err();
    assert!(matches!(err, CoreError::SchemaNotFound(_)));
}

#[test]
fn load_schema_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DEMO_SCHEMA.as_bytes()).unwrap();
    let schema = load_schema(file.path()).unwrap();
    assert_eq!(
        schema.styles.header_text,
        "Programa Institucional de Tamizaje - Reporte Confidencial"
    );
}

#[test]
fn instrument_ids_parse_from_their_keys() {
    assert_eq!("asrs".parse::<InstrumentId>().unwrap(), InstrumentId::Asrs);
    assert!(matches!(
        "phq9".parse::<InstrumentId>(),
        Err(CoreError::UnknownInstrument(_))
    ));
}

#[test]
fn column_mapping_keeps_document_order_through_parse() {
    let json = format!(
        r#"{{ "config_version": 1, "evaluations": {},
             "column_mapping": {{
                 "Zeta: carrera primero": "carrera",
                 "Alfa: carrera segundo": "carrera",
                 "Edad": "edad"
             }} }}"#,
        minimal_evaluations()
    );
    let schema = parse_schema(&json).unwrap();
    let raw: Vec<_> = schema.column_mapping.entries().map(|(raw, _)| raw).collect();
    assert_eq!(raw, ["Zeta: carrera primero", "Alfa: carrera segundo", "Edad"]);
    assert_eq!(schema.column_mapping.display_text("carrera"), Some("Zeta: carrera primero"));
}

#[test]
fn duplicate_question_text_fails_the_load() {
    let json = format!(
        r#"{{ "config_version": 1, "evaluations": {},
             "column_mapping": {{ "Edad": "edad", "Edad": "edad_2" }} }}"#,
        minimal_evaluations()
    );
    assert!(matches!(parse_schema(&json), Err(CoreError::InvalidSchema(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    assert!(matches!(load_schema(file.path()), Err(CoreError::InvalidSchema(_))));
}

#[test]
fn v0_schema_keeps_mapping_order() {
    let json = format!(
        r#"{{ "evaluations": {},
             "column_mapping": {{ "Sexo": "sexo", "Clave": "clave_unica" }},
             "pdf_styles": {{}} }}"#,
        minimal_evaluations()
    );
    let schema = parse_schema(&json).unwrap();
    let keys: Vec<_> = schema.column_mapping.entries().map(|(_, key)| key).collect();
    assert_eq!(keys, ["sexo", "clave_unica"]);
}
