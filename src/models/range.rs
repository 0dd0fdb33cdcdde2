use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the Sheets API interprets written values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ValueInputOption {
    /// Parsed as if typed into the UI (dates, formulas, numbers)
    #[default]
    UserEntered,
    /// Stored exactly as given
    Raw,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::UserEntered => "USER_ENTERED",
            ValueInputOption::Raw => "RAW",
        }
    }
}

/// Rows of values to overwrite a range with.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeUpdate {
    pub range: String,
    pub rows: Vec<Vec<String>>,
    pub input_option: ValueInputOption,
}

impl RangeUpdate {
    pub fn new(range: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            range: range.into(),
            rows,
            input_option: ValueInputOption::default(),
        }
    }

    pub fn with_input_option(mut self, input_option: ValueInputOption) -> Self {
        self.input_option = input_option;
        self
    }

    /// Number of cells the update writes.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub(crate) fn to_values(&self) -> Vec<Vec<Value>> {
        self.rows
            .iter()
            .map(|row| row.iter().cloned().map(Value::String).collect())
            .collect()
    }
}

impl Default for RangeUpdate {
    fn default() -> Self {
        RangeUpdate::new(
            "A1",
            vec![vec!["1".to_string(), "2".to_string(), "3".to_string()]],
        )
    }
}
