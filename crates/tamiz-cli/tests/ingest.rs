use tamiz_cli::ingest::{read_records, read_records_from_path};
use tamiz_cli::BatchError;
use tamiz_core::config::parse_schema;
use tamiz_core::Schema;

fn schema() -> Schema {
    parse_schema(include_str!("../../../demos/config.json")).unwrap()
}

#[test]
fn headers_are_renamed_through_the_mapping() {
    let csv = "Clave Única,Nombre completo, Edad ,Columna libre\n184523.0,Ana López,19,extra\n";
    let records = read_records(csv.as_bytes(), &schema()).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.get("clave_unica"), Some("184523.0"));
    assert_eq!(record.get("nombre_completo"), Some("Ana López"));
    assert_eq!(record.get("edad"), Some("19"));
    assert_eq!(record.get("Columna libre"), Some("extra"));
}

#[test]
fn short_rows_leave_fields_absent() {
    let csv = "Clave Única,Nombre completo,Edad\n1001\n";
    let records = read_records(csv.as_bytes(), &schema()).unwrap();
    assert_eq!(records[0].get("clave_unica"), Some("1001"));
    assert_eq!(records[0].get("edad"), None);
}

#[test]
fn derived_field_takes_the_first_filled_matching_column() {
    let csv = "Clave Única,Facultad de Ingeniería,Coordinación Académica Región Altiplano\n\
               1,,Ingeniería Agroindustrial\n\
               2,Ingeniería Civil,Ingeniería Mecánica\n\
               3,,\n";
    let records = read_records(csv.as_bytes(), &schema()).unwrap();
    assert_eq!(records[0].get("carrera"), Some("Ingeniería Agroindustrial"));
    assert_eq!(records[1].get("carrera"), Some("Ingeniería Civil"));
    assert_eq!(records[2].answered("carrera"), None);
}

#[test]
fn derived_field_falls_back_without_source_columns() {
    let csv = "Clave Única\n1\n";
    let records = read_records(csv.as_bytes(), &schema()).unwrap();
    assert_eq!(records[0].get("carrera"), Some("No especificada"));
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_records_from_path(&dir.path().join("respuestas.csv"), &schema()).unwrap_err();
    assert!(matches!(err, BatchError::InputNotFound(_)));
}

#[test]
fn malformed_csv_is_fatal() {
    // Invalid UTF-8 cannot be read into string records.
    let bytes: &[u8] = b"Clave \xC3\x28nica\n1\n";
    assert!(matches!(read_records(bytes, &schema()), Err(BatchError::Csv(_))));
}
