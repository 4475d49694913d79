//! Column-aligned, optionally sorted and styled tables for terminal output.
//!
//! A [ReportTable] is built incrementally from [Row]s, which map column names to display strings.
//! Column widths only ever grow as rows are added, and presentation is controlled entirely by the
//! [Theme] supplied by the caller.

mod row;
mod table;
mod theme;

pub use row::Row;
pub use table::{Alignment, Column, ReportTable, RowComparator, TableError};
pub use theme::{Striping, Theme};
