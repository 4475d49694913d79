use googletest::prelude::*;
use owo_colors::Style;
use test_casing::test_casing;

use crate::{Alignment, Column, ReportTable, Row, Striping, TableError, Theme};

fn name_value_columns() -> Vec<Column> {
    vec![Column::left("Name"), Column::center("Value")]
}

fn name_value_row(name: &str, value: &str) -> Row {
    Row::new().with("name", name).with("value", value)
}

#[test_casing(3, [
    (Some("name"), "Value"),
    (Some("value"), "Name"),
    (None, "Name"),
])]
#[gtest]
fn test_add_one_rejects_missing_column(present: Option<&str>, missing: &str) {
    let mut table = ReportTable::new(name_value_columns(), Theme::plain());
    let row: Row = present.map(|column| (column, "x")).into_iter().collect();

    expect_that!(
        table.add_one(row),
        err(eq(&TableError::MissingColumn {
            column: missing.to_string(),
        }))
    );
    expect_that!(table.is_empty(), eq(true));
}

#[gtest]
fn test_add_one_matches_columns_case_insensitively() {
    let mut table = ReportTable::new(name_value_columns(), Theme::plain());

    expect_that!(
        table.add_one(Row::new().with("NAME", "a").with("vAlUe", "b")),
        ok(eq(&()))
    );
    expect_that!(table.len(), eq(1));
}

#[gtest]
fn test_widths_start_from_header_with_padding() {
    // GIVEN: a centered column, so padding is 2 for every column.
    let centered = ReportTable::new(name_value_columns(), Theme::plain());
    expect_that!(centered.width("Name"), some(eq(6)));
    expect_that!(centered.width("value"), some(eq(7)));

    // GIVEN: only left aligned columns, so padding is 1.
    let left_only = ReportTable::new(
        [Column::left("Name"), Column::new("Value", Alignment::Left)],
        Theme::plain(),
    );
    expect_that!(left_only.width("name"), some(eq(5)));
    expect_that!(left_only.width("value"), some(eq(6)));
    expect_that!(left_only.width("missing"), none());
}

#[gtest]
fn test_widths_never_shrink() -> Result<()> {
    let mut table = ReportTable::new(name_value_columns(), Theme::plain());

    table.add_one(name_value_row("A much longer name", "1"))?;
    expect_that!(table.width("name"), some(eq(20)));

    table.add_one(name_value_row("Short", "2"))?;
    expect_that!(table.width("name"), some(eq(20)));
    expect_that!(table.width("value"), some(eq(7)));

    Ok(())
}

#[gtest]
fn test_rows_stay_sorted_after_each_insert() -> Result<()> {
    let mut table = ReportTable::new(name_value_columns(), Theme::plain())
        .sorted_by(|a, b| a.get("value").cmp(&b.get("value")));

    table.add_one(name_value_row("first", "3"))?;
    table.add_one(name_value_row("second", "1"))?;
    expect_that!(
        table.rows().iter().map(|row| row.get("name")).collect::<Vec<_>>(),
        eq(&vec![Some("second"), Some("first")])
    );

    // Equal keys keep insertion order.
    table.add_all([name_value_row("third", "1"), name_value_row("fourth", "2")])?;
    expect_that!(
        table.rows().iter().map(|row| row.get("name")).collect::<Vec<_>>(),
        eq(&vec![
            Some("second"),
            Some("third"),
            Some("fourth"),
            Some("first"),
        ])
    );

    Ok(())
}

#[gtest]
fn test_add_all_stops_at_first_rejected_row() {
    let mut table = ReportTable::new(name_value_columns(), Theme::plain());

    let result = table.add_all([
        name_value_row("kept", "1"),
        Row::new().with("name", "rejected"),
        name_value_row("never added", "2"),
    ]);

    expect_that!(result, err(anything()));
    expect_that!(table.len(), eq(1));
}

#[gtest]
fn test_display_plain() -> Result<()> {
    let mut table = ReportTable::new(name_value_columns(), Theme::plain());
    table.add_one(name_value_row("Alice", "42"))?;

    expect_that!(table.to_string(), eq("Name    Value \nAlice     42  "));

    Ok(())
}

#[test_casing(4, [
    ("30hp", "  30hp "),
    ("7.5hp", " 7.5hp "),
    ("3", "   3   "),
    ("10", "   10  "),
])]
#[gtest]
fn test_center_puts_odd_margin_left_on_odd_width(value: &str, expected: &str) {
    expect_that!(Alignment::Center.pad(value, 7), eq(expected));
}

#[gtest]
fn test_center_puts_odd_margin_right_on_even_width() {
    expect_that!(Alignment::Center.pad("3.75", 8), eq("  3.75  "));
    expect_that!(Alignment::Center.pad("7.5hp", 8), eq(" 7.5hp  "));
}

#[gtest]
fn test_display_header_only_when_empty() {
    let table = ReportTable::new(name_value_columns(), Theme::plain());

    expect_that!(table.to_string(), eq("Name   Value "));
}

fn test_theme(striping: Striping) -> Theme {
    Theme::new(
        Style::new().white().on_red(),
        Style::new().white().on_bright_black(),
        Style::new().black().on_white(),
    )
    .with_striping(striping)
}

fn render_two_rows(theme: Theme) -> std::result::Result<Vec<String>, TableError> {
    let mut table = ReportTable::new([Column::left("A"), Column::left("B")], theme);
    table.add_all([
        Row::new().with("a", "1").with("b", "2"),
        Row::new().with("a", "3").with("b", "4"),
    ])?;
    Ok(table.to_string().lines().map(str::to_string).collect())
}

#[gtest]
fn test_display_stripes_by_column() -> Result<()> {
    let theme = test_theme(Striping::Columns);
    let lines = render_two_rows(theme)?;

    let even = |s: &str| theme.even.style(s).to_string();
    let odd = |s: &str| theme.odd.style(s).to_string();
    expect_that!(
        lines,
        elements_are![
            eq(&theme.header.style("A B ").to_string()),
            eq(&format!("{}{}", even("1 "), odd("2 "))),
            eq(&format!("{}{}", even("3 "), odd("4 "))),
        ]
    );

    Ok(())
}

#[gtest]
fn test_display_stripes_by_row() -> Result<()> {
    let theme = test_theme(Striping::Rows);
    let lines = render_two_rows(theme)?;

    let even = |s: &str| theme.even.style(s).to_string();
    let odd = |s: &str| theme.odd.style(s).to_string();
    expect_that!(
        lines,
        elements_are![
            eq(&theme.header.style("A B ").to_string()),
            eq(&format!("{}{}", even("1 "), even("2 "))),
            eq(&format!("{}{}", odd("3 "), odd("4 "))),
        ]
    );

    Ok(())
}
