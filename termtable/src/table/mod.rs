#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt::{Display, Write};

use hashbrown::HashMap;

use crate::{Row, Theme};

/// Orders two rows of a [ReportTable].
pub type RowComparator = Box<dyn Fn(&Row, &Row) -> Ordering>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("row has no value for column {column:?}")]
    MissingColumn { column: String },
}

/// Horizontal alignment of the values within a [Column].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alignment {
    Left,
    Center,
}

impl Alignment {
    fn pad(self, value: &str, width: usize) -> String {
        match self {
            Alignment::Left => format!("{value:<width$}"),
            Alignment::Center => {
                // An odd margin puts its extra space on the left when the width is odd too.
                let margin = width.saturating_sub(text_width(value));
                let left = margin / 2 + (margin & width & 1);
                format!("{}{value}{}", " ".repeat(left), " ".repeat(margin - left))
            }
        }
    }
}

/// Declared column of a [ReportTable]. The name is used as-is for the header, and
/// case-insensitively to look up values in each [Row].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: String,
    pub alignment: Alignment,
}

impl Column {
    pub fn new<S>(name: S, alignment: Alignment) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            alignment,
        }
    }

    pub fn left<S: Into<String>>(name: S) -> Self {
        Self::new(name, Alignment::Left)
    }

    pub fn center<S: Into<String>>(name: S) -> Self {
        Self::new(name, Alignment::Center)
    }

    fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Incrementally built table that renders as aligned, styled lines of text.
///
/// The rows are kept sorted by the comparator (if any) after every insertion, and column widths
/// are the widest value seen so far plus padding. Padding is applied uniformly to all columns: 2
/// characters if any column is centered, otherwise 1.
pub struct ReportTable {
    columns: Vec<Column>,
    theme: Theme,
    comparator: Option<RowComparator>,
    padding: usize,
    widths: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl ReportTable {
    pub fn new<C>(columns: C, theme: Theme) -> Self
    where
        C: IntoIterator<Item = Column>,
    {
        let columns: Vec<Column> = columns.into_iter().collect();
        let padding = if columns.iter().any(|c| c.alignment == Alignment::Center) {
            2
        } else {
            1
        };
        let widths = columns
            .iter()
            .map(|column| (column.key(), text_width(&column.name) + padding))
            .collect();

        Self {
            columns,
            theme,
            comparator: None,
            padding,
            widths,
            rows: Vec::new(),
        }
    }

    /// Keeps the rows ordered by `comparator`. The sort is stable, so rows that compare equal stay
    /// in insertion order.
    pub fn sorted_by<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&Row, &Row) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self.sort();
        self
    }

    /// Adds a row, which must have a value for every declared column.
    pub fn add_one(&mut self, row: Row) -> Result<(), TableError> {
        if let Some(missing) = self.columns.iter().find(|column| !row.contains(&column.name)) {
            return Err(TableError::MissingColumn {
                column: missing.name.clone(),
            });
        }

        for column in &self.columns {
            let value_width = row.get(&column.name).map(text_width).unwrap_or_default();
            let width = self.widths.entry(column.key()).or_default();
            *width = (*width).max(value_width + self.padding);
        }

        self.rows.push(row);
        self.sort();
        Ok(())
    }

    /// Adds the rows in order, stopping at the first that is rejected.
    pub fn add_all<I>(&mut self, rows: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = Row>,
    {
        for row in rows {
            self.add_one(row)?;
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current display width of the named column, including padding.
    pub fn width(&self, column: &str) -> Option<usize> {
        self.widths.get(&column.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn sort(&mut self) {
        if let Some(comparator) = &self.comparator {
            self.rows.sort_by(|a, b| comparator(a, b));
        }
    }

    fn aligned(&self, column: &Column, value: &str) -> String {
        let width = self.widths.get(&column.key()).copied().unwrap_or_default();
        column.alignment.pad(value, width)
    }

    fn header_line(&self) -> String {
        let header: String = self
            .columns
            .iter()
            .map(|column| self.aligned(column, &column.name))
            .collect();
        self.theme.paint(&self.theme.header, &header)
    }

    fn row_line(&self, row_index: usize, row: &Row) -> String {
        let mut line = String::new();
        for (column_index, column) in self.columns.iter().enumerate() {
            let value = row.get(&column.name).unwrap_or_default();
            let style = self.theme.cell_style(row_index, column_index);
            line.push_str(&self.theme.paint(style, &self.aligned(column, value)));
        }
        line
    }
}

impl Display for ReportTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header_line())?;
        for (row_index, row) in self.rows.iter().enumerate() {
            f.write_char('\n')?;
            f.write_str(&self.row_line(row_index, row))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ReportTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportTable")
            .field("columns", &self.columns)
            .field("sorted", &self.comparator.is_some())
            .field("rows", &self.rows)
            .finish()
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}
