use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Mapping from the raw question text found in the source spreadsheet to
/// the normalized key used everywhere else.
///
/// Entries keep the order they had in the schema file. The reverse
/// direction (key → display text) resolves to the *first* entry carrying
/// that key; both directions are indexed once at construction.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    entries: Vec<(String, String)>,
    forward: HashMap<String, usize>,
    reverse: HashMap<String, usize>,
}

impl ColumnMapping {
    pub fn from_entries<I, R, K>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (R, K)>,
        R: Into<String>,
        K: Into<String>,
    {
        let mut mapping = Self::default();
        for (raw, key) in entries {
            mapping.push(raw.into(), key.into())?;
        }
        Ok(mapping)
    }

    fn push(&mut self, raw: String, key: String) -> Result<(), CoreError> {
        let idx = self.entries.len();
        let lookup = raw.trim().to_string();
        if self.forward.insert(lookup, idx).is_some() {
            return Err(CoreError::InvalidSchema(format!(
                "duplicate column_mapping entry for question '{raw}'"
            )));
        }
        self.reverse.entry(key.clone()).or_insert(idx);
        self.entries.push((raw, key));
        Ok(())
    }

    /// Normalized key for a raw column header, if the header is mapped.
    pub fn key_for(&self, raw: &str) -> Option<&str> {
        self.forward
            .get(raw.trim())
            .map(|&idx| self.entries[idx].1.as_str())
    }

    /// Original question text for a normalized key.
    pub fn display_text(&self, key: &str) -> Option<&str> {
        self.reverse
            .get(key)
            .map(|&idx| self.entries[idx].0.as_str())
    }

    /// Display text for a key, or a label derived from the key itself.
    pub fn label_for<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.display_text(key) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(fallback_label(key)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.reverse.contains_key(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(r, k)| (r.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `carrera_o_unidad` → `Carrera o unidad`.
pub fn fallback_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (raw, key) in &self.entries {
            map.serialize_entry(raw, key)?;
        }
        map.end()
    }
}

/// `column_mapping` entries exactly as written, in document order and with
/// duplicates kept, so [`ColumnMapping::from_entries`] can reject them.
#[derive(Debug, Clone, Default)]
pub struct RawEntries(pub Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping question text to a normalized key")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<'de> Deserialize<'de> for ColumnMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawEntries(entries) = RawEntries::deserialize(deserializer)?;
        ColumnMapping::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
