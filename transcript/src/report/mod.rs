//! Table rows and tables for the console report.


use owo_colors::Style;
use serde::Serialize;
use termtable::{Column, ReportTable, Row, Theme};

use crate::{PersonalInfo, Record, Result, SortMode, Statistic};

/// Column names of the report tables.
pub mod column {
    pub const NAME: &str = "Name";
    pub const SCOPE: &str = "Scope";
    pub const GRADE: &str = "Grade";
    pub const DATE: &str = "Date";
    pub const INFO: &str = "Info";
    pub const VALUE: &str = "Value";
    pub const STATISTIC: &str = "Statistic";
}

/// One line of the personal info table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InfoEntry {
    pub info: String,
    pub value: String,
}

impl InfoEntry {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with(column::INFO, self.info.as_str())
            .with(column::VALUE, self.value.as_str())
    }
}

impl PersonalInfo {
    /// Labelled entries, leaving out the verification code when there is none.
    pub fn entries(&self) -> Vec<InfoEntry> {
        let mut entries = vec![
            entry("Name", &self.name),
            entry("Identity number", &self.identity_number),
        ];
        if let Some(code) = &self.verification_code {
            entries.push(entry("Verification code", code));
        }
        entries
    }
}

fn entry(info: &str, value: &str) -> InfoEntry {
    InfoEntry {
        info: info.to_string(),
        value: value.to_string(),
    }
}

impl Record {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with(column::NAME, self.name.as_str())
            .with(column::SCOPE, self.scope.to_string())
            .with(column::GRADE, self.grade.as_str())
            .with(column::DATE, self.date.format("%Y-%m-%d").to_string())
    }
}

impl Statistic {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with(column::STATISTIC, self.label.as_str())
            .with(column::VALUE, self.value.as_str())
    }
}

/// Courses table holding `records`, kept in `sort_mode` order.
pub fn courses_table(
    records: &[Record],
    sort_mode: SortMode,
    theme: &Theme,
) -> Result<ReportTable> {
    let mut table = ReportTable::new(
        vec![
            Column::left(column::NAME),
            Column::center(column::SCOPE),
            Column::center(column::GRADE),
            Column::center(column::DATE),
        ],
        *theme,
    )
    .sorted_by(sort_mode.comparator());
    table.add_all(records.iter().map(Record::to_row))?;
    Ok(table)
}

pub fn info_table(info: &PersonalInfo, theme: &Theme) -> Result<ReportTable> {
    let mut table = ReportTable::new(
        vec![Column::left(column::INFO), Column::center(column::VALUE)],
        *theme,
    );
    table.add_all(info.entries().iter().map(InfoEntry::to_row))?;
    Ok(table)
}

pub fn stats_table(stats: &[Statistic], theme: &Theme) -> Result<ReportTable> {
    let mut table = ReportTable::new(
        vec![Column::left(column::STATISTIC), Column::center(column::VALUE)],
        *theme,
    );
    table.add_all(stats.iter().map(Statistic::to_row))?;
    Ok(table)
}

/// Themes of the report tables.
#[derive(Clone, Copy, Debug)]
pub struct ReportTheme {
    pub courses: Theme,
    /// Personal info and statistics.
    pub details: Theme,
}

impl ReportTheme {
    pub fn plain() -> Self {
        Self {
            courses: Theme::plain(),
            details: Theme::plain(),
        }
    }
}

impl Default for ReportTheme {
    fn default() -> Self {
        let details = Theme::default();
        Self {
            courses: Theme::new(Style::new().white().on_red(), details.even, details.odd),
            details,
        }
    }
}
