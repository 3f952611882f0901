use tamiz_core::mapping::{fallback_label, ColumnMapping};
use tamiz_core::CoreError;

#[test]
fn forward_lookup_ignores_surrounding_whitespace() {
    let mapping = ColumnMapping::from_entries([("Edad", "edad")]).unwrap();
    assert_eq!(mapping.key_for("  Edad "), Some("edad"));
    assert_eq!(mapping.key_for("Sexo"), None);
}

#[test]
fn reverse_lookup_returns_first_entry_in_document_order() {
    let json = r#"{
        "¿Cuál es tu carrera?": "carrera",
        "Carrera (texto libre)": "carrera",
        "Edad": "edad"
    }"#;
    let mapping: ColumnMapping = serde_json::from_str(json).unwrap();

    assert_eq!(mapping.display_text("carrera"), Some("¿Cuál es tu carrera?"));
    assert_eq!(mapping.len(), 3);
    let raw: Vec<_> = mapping.entries().map(|(raw, _)| raw).collect();
    assert_eq!(raw, ["¿Cuál es tu carrera?", "Carrera (texto libre)", "Edad"]);
}

#[test]
fn unmapped_key_gets_derived_label() {
    let mapping = ColumnMapping::default();
    assert_eq!(mapping.label_for("vive_con_FAMILIA"), "Vive con familia");
}

#[test]
fn fallback_label_handles_empty_and_accented_keys() {
    assert_eq!(fallback_label(""), "");
    assert_eq!(fallback_label("édad_actual"), "Édad actual");
}

#[test]
fn duplicate_raw_text_is_rejected() {
    let err = ColumnMapping::from_entries([("Edad", "edad"), ("Edad ", "edad_2")]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidSchema(_)));
}

#[test]
fn serializes_back_in_original_order() {
    let mapping = ColumnMapping::from_entries([("Zeta", "z"), ("Alfa", "a")]).unwrap();
    let json = serde_json::to_string(&mapping).unwrap();
    assert_eq!(json, r#"{"Zeta":"z","Alfa":"a"}"#);
}
