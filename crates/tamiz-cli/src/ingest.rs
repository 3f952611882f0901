use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tamiz_core::models::record::is_no_answer;
use tamiz_core::schema::DerivedField;
use tamiz_core::{ColumnMapping, Schema, SubjectRecord};

use crate::error::BatchError;

pub fn read_records_from_path(path: &Path, schema: &Schema) -> Result<Vec<SubjectRecord>, BatchError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BatchError::InputNotFound(path.to_path_buf())
        } else {
            BatchError::Csv(e.into())
        }
    })?;
    let records = read_records(file, schema)?;
    tracing::info!(path = %path.display(), records = records.len(), "source data loaded");
    Ok(records)
}

/// Parse a CSV export with one row per subject.
///
/// Headers are renamed through the schema's `column_mapping`; unmapped
/// headers are kept verbatim. Short rows are accepted and their missing
/// cells are simply absent from the record.
pub fn read_records<R: Read>(reader: R, schema: &Schema) -> Result<Vec<SubjectRecord>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = normalize_headers(csv_reader.headers()?, &schema.column_mapping);
    let unmapped = csv_reader
        .headers()?
        .iter()
        .filter(|h| schema.column_mapping.key_for(h).is_none())
        .count();
    if unmapped > 0 {
        tracing::debug!(unmapped, "columns without column_mapping entry kept verbatim");
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = SubjectRecord::new();
        for (key, value) in headers.iter().zip(row.iter()) {
            // Two headers may map to one key; keep the first filled value.
            if record.answered(key).is_none() {
                record.insert(key.as_str(), value);
            }
        }
        for derived in &schema.derived_fields {
            record.insert(derived.key.as_str(), derive_value(derived, &headers, &row));
        }
        records.push(record);
    }

    Ok(records)
}

fn normalize_headers(raw: &StringRecord, mapping: &ColumnMapping) -> Vec<String> {
    raw.iter()
        .map(|header| mapping.key_for(header).unwrap_or(header).to_string())
        .collect()
}

/// First filled cell among the columns matching any marker, in column order.
fn derive_value(derived: &DerivedField, headers: &[String], row: &StringRecord) -> String {
    let mut candidates = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| derived.source_markers.iter().any(|m| h.contains(m.as_str())))
        .peekable();

    if candidates.peek().is_none() {
        return derived.fallback.clone();
    }

    candidates
        .filter_map(|(i, _)| row.get(i))
        .find(|value| !is_no_answer(value))
        .unwrap_or("")
        .to_string()
}
