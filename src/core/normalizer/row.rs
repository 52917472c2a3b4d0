//! Raw row access by column name

use csv::StringRecord;
use std::collections::HashMap;

/// Position of each header name within a row
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Index a header row; surrounding whitespace is ignored and the first
    /// occurrence of a duplicated name wins
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            positions.entry(name.trim().to_string()).or_insert(i);
        }
        Self { positions }
    }

    /// Position of `column`, if the file has it
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Whether the file has `column`
    pub fn contains(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Number of distinct columns
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the header row was empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One data row viewed through its header index
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    headers: &'a HeaderIndex,
    record: &'a StringRecord,
    row_number: usize,
}

impl<'a> RawRow<'a> {
    /// `row_number` is the 1-based position among data rows
    pub fn new(headers: &'a HeaderIndex, record: &'a StringRecord, row_number: usize) -> Self {
        Self {
            headers,
            record,
            row_number,
        }
    }

    /// Raw value of `column`; `None` when the file lacks the column or the
    /// row is shorter than the header
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .position(column)
            .and_then(|i| self.record.get(i))
    }

    /// Raw value of `column`, or `""` when absent
    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }

    /// 1-based position among data rows
    pub fn row_number(&self) -> usize {
        self.row_number
    }
}
