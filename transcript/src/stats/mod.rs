//! Aggregates over course records.


use serde::Serialize;

use crate::record::format_number;
use crate::{Record, Result, Scope, TranscriptError};

const AVERAGE_DECIMALS: i32 = 5;

/// Labelled value shown in the statistics table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Statistic {
    #[serde(rename = "statistic")]
    pub label: String,
    pub value: String,
}

impl Statistic {
    pub const AVERAGE: &str = "Average grade";
    pub const COUNT: &str = "Number of courses";
    pub const TOTAL_SCOPE: &str = "Total scope";

    pub fn new<L, V>(label: L, value: V) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

pub fn total_scope(records: &[Record]) -> f64 {
    // Folding from positive zero, as an empty `f64` sum is `-0.0`.
    records
        .iter()
        .fold(0.0, |total, record| total + record.scope.value())
}

/// Scope-weighted mean of the grade weights, rounded to 5 decimals.
pub fn compute_average(records: &[Record]) -> Result<f64> {
    let mut weighted = 0.0;
    for record in records {
        weighted += record.scope.value() * f64::from(record.grade.weight()?);
    }
    let scope = total_scope(records);
    if scope == 0.0 {
        return Err(TranscriptError::DivisionByZero);
    }
    Ok(round(weighted / scope, AVERAGE_DECIMALS))
}

fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Statistics to report for the records. The average is left out (and not computed) when
/// `ignore_average` is set, and the count and total scope are only included when `verbose`.
pub fn statistics(
    records: &[Record],
    verbose: bool,
    ignore_average: bool,
) -> Result<Vec<Statistic>> {
    let mut stats = Vec::new();
    if !ignore_average {
        let average = compute_average(records)?;
        log::info!("Average grade over {} courses is {average}.", records.len());
        stats.push(Statistic::new(Statistic::AVERAGE, format_number(average)));
    }
    if verbose {
        stats.push(Statistic::new(Statistic::COUNT, records.len().to_string()));
        stats.push(Statistic::new(
            Statistic::TOTAL_SCOPE,
            Scope::new(total_scope(records)).to_string(),
        ));
    }
    Ok(stats)
}
