use std::fmt;

/// Column names of the PROPKA summary table, in field order.
pub const COLUMN_NAMES: [&str; 4] = ["Resname", "Resid", "Chain", "pKa"];

const MAX_FIELDS: usize = COLUMN_NAMES.len();

/// One row of the PROPKA summary table, kept as text.
///
/// A row holds at most four fields; lines with fewer tokens produce a short
/// record whose missing fields read as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryRecord {
    fields: Vec<String>,
}

impl SummaryRecord {
    /// Splits a line on runs of whitespace and keeps the first four tokens.
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line
                .split_whitespace()
                .take(MAX_FIELDS)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn new(residue_name: &str, residue_id: &str, chain: &str, pka: &str) -> Self {
        Self {
            fields: vec![
                residue_name.to_string(),
                residue_id.to_string(),
                chain.to_string(),
                pka.to_string(),
            ],
        }
    }

    pub fn residue_name(&self) -> Option<&str> {
        self.field(0)
    }

    pub fn residue_id(&self) -> Option<&str> {
        self.field(1)
    }

    pub fn chain(&self) -> Option<&str> {
        self.field(2)
    }

    pub fn pka(&self) -> Option<&str> {
        self.field(3)
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_complete(&self) -> bool {
        self.fields.len() == MAX_FIELDS
    }
}

impl fmt::Display for SummaryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(" "))
    }
}
