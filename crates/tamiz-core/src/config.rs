use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;
use crate::mapping::{ColumnMapping, RawEntries};
use crate::schema::Schema;

/// Current schema version. Bump this when changing the file's shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Load, migrate and validate the schema file at `path`.
pub fn load_schema(path: &Path) -> Result<Schema, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreError::SchemaNotFound(path.to_path_buf())
        } else {
            CoreError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let schema = parse_schema(&contents)?;
    tracing::info!(
        path = %path.display(),
        sections = schema.sections.len(),
        mapped_columns = schema.column_mapping.len(),
        "schema loaded"
    );
    Ok(schema)
}

pub fn parse_schema(contents: &str) -> Result<Schema, CoreError> {
    // Parse as raw JSON so migrations run before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let mut migrated = migrate(json, on_disk_version)?;

    // `Value` objects are sorted and keep only the last duplicate, so the
    // mapping is read from the source text instead.
    let column_mapping = read_column_mapping(contents)?;
    if let Some(obj) = migrated.as_object_mut() {
        obj.remove("column_mapping");
    }

    let mut schema: Schema = serde_json::from_value(migrated)?;
    schema.column_mapping = column_mapping;
    schema.validate()?;
    Ok(schema)
}

/// The top-level `column_mapping` object, in document order.
fn read_column_mapping(contents: &str) -> Result<ColumnMapping, CoreError> {
    #[derive(Deserialize)]
    struct MappingOnly {
        #[serde(default)]
        column_mapping: RawEntries,
    }

    let MappingOnly { column_mapping } = serde_json::from_str(contents)?;
    ColumnMapping::from_entries(column_mapping.0)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `pdf_styles` became `styles`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| CoreError::InvalidSchema("schema is not a JSON object".to_string()))?;
        if let Some(legacy) = obj.remove("pdf_styles") {
            obj.entry("styles").or_insert(legacy);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated schema v0 → v1 (pdf_styles renamed to styles)");
    }

    Ok(json)
}
