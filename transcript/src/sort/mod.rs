//! Orderings of the courses table.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::str::FromStr;

use termtable::{Row, RowComparator};

use crate::report::column;
use crate::{Grade, Result, TranscriptError};

/// Order of the rows in the courses table.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "snake_case")]
pub enum SortMode {
    /// Lexicographically ascending by name.
    Name,
    /// Descending by grade weight. Grades without a weight come last.
    Grade,
    /// Ascending by date.
    #[default]
    Date,
}

impl SortMode {
    pub fn from_name(name: &str) -> Result<Self> {
        SortMode::from_str(name).map_err(|_| TranscriptError::InvalidSortMode {
            mode: name.to_string(),
        })
    }

    /// Compares two course rows.
    pub fn compare(self, a: &Row, b: &Row) -> Ordering {
        match self {
            SortMode::Name => cell(a, column::NAME).cmp(cell(b, column::NAME)),
            SortMode::Grade => weight(b).cmp(&weight(a)),
            // ISO dates order the same as their text.
            SortMode::Date => cell(a, column::DATE).cmp(cell(b, column::DATE)),
        }
    }

    pub fn comparator(self) -> RowComparator {
        Box::new(move |a, b| self.compare(a, b))
    }
}

fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).unwrap_or_default()
}

fn weight(row: &Row) -> Option<u32> {
    Grade::new(cell(row, column::GRADE)).weight().ok()
}
