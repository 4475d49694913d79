use std::cmp::Ordering;

use googletest::prelude::*;
use strum::VariantNames;
use termtable::Row;
use test_casing::test_casing;

use crate::{SortMode, TranscriptError};

fn course(name: &str, grade: &str, date: &str) -> Row {
    Row::new()
        .with("Name", name)
        .with("Scope", "7.5hp")
        .with("Grade", grade)
        .with("Date", date)
}

fn sorted_names(mode: SortMode, mut rows: Vec<Row>) -> Vec<String> {
    let comparator = mode.comparator();
    rows.sort_by(|a, b| comparator(a, b));
    rows.iter()
        .map(|row| row.get("name").unwrap_or_default().to_string())
        .collect()
}

fn courses() -> Vec<Row> {
    vec![
        course("Linear algebra", "3", "2020-03-20"),
        course("Bachelor thesis", "G", "2021-06-05"),
        course("Algorithms", "5", "2019-10-25"),
        course("Discrete mathematics", "U", "2020-01-15"),
    ]
}

#[test_casing(3, [
    ("name", SortMode::Name),
    ("grade", SortMode::Grade),
    ("date", SortMode::Date),
])]
#[gtest]
fn test_from_name(name: &str, expected: SortMode) {
    expect_that!(SortMode::from_name(name), ok(eq(&expected)));
    expect_that!(expected.to_string(), eq(name));
}

#[test_casing(3, ["Name", "size", ""])]
#[gtest]
fn test_from_name_invalid(name: &str) {
    expect_that!(
        SortMode::from_name(name),
        err(eq(&TranscriptError::InvalidSortMode {
            mode: name.to_string(),
        }))
    );
}

#[gtest]
fn test_variant_names() {
    expect_that!(SortMode::VARIANTS, eq(&["name", "grade", "date"]));
    expect_that!(SortMode::default(), eq(SortMode::Date));
}

#[gtest]
fn test_sort_by_name_ascending() {
    expect_that!(
        sorted_names(SortMode::Name, courses()),
        eq(&vec![
            "Algorithms".to_string(),
            "Bachelor thesis".to_string(),
            "Discrete mathematics".to_string(),
            "Linear algebra".to_string(),
        ])
    );
}

#[gtest]
fn test_sort_by_grade_descending() {
    expect_that!(
        sorted_names(SortMode::Grade, courses()),
        eq(&vec![
            "Algorithms".to_string(),
            "Linear algebra".to_string(),
            "Bachelor thesis".to_string(),
            "Discrete mathematics".to_string(),
        ])
    );
}

#[gtest]
fn test_sort_by_date_ascending() {
    expect_that!(
        sorted_names(SortMode::Date, courses()),
        eq(&vec![
            "Algorithms".to_string(),
            "Discrete mathematics".to_string(),
            "Linear algebra".to_string(),
            "Bachelor thesis".to_string(),
        ])
    );
}

#[gtest]
fn test_grade_without_weight_sorts_last() {
    let unweighted = course("Unweighted", "VG", "2020-01-01");
    let failed = course("Failed", "U", "2020-01-01");

    expect_that!(
        SortMode::Grade.compare(&unweighted, &failed),
        eq(Ordering::Greater)
    );
    expect_that!(
        SortMode::Grade.compare(&failed, &unweighted),
        eq(Ordering::Less)
    );
}
