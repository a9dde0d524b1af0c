use std::collections::HashMap;

use csv::StringRecord;

/// Column name to trimmed raw value, for one data line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, String>
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs each header with the value at the same position.
    pub fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let fields = headers.iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.trim().to_string()))
            .collect();

        Self { fields }
    }

    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.fields.insert(column.to_string(), value.into().trim().to_string());
        self
    }

    /// Returns the value for `column`, treating an empty value as absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
