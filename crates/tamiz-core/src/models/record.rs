use std::collections::HashMap;

/// Token the spreadsheet export leaves in empty numeric cells.
pub const NO_VALUE_SENTINEL: &str = "nan";

/// One subject's answers, keyed by normalized question key.
///
/// Values are kept exactly as ingested; numeric and date cells arrive
/// already stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectRecord {
    fields: HashMap<String, String>,
}

impl SubjectRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Raw answer text, empty when the key is absent.
    pub fn answer(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// The answer, unless it is blank or the no-value sentinel.
    pub fn answered(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !is_no_answer(value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub fn is_no_answer(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_VALUE_SENTINEL)
}

impl<K, V> FromIterator<(K, V)> for SubjectRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
