//! Parsing of individual course lines into [Record]s.


use chrono::NaiveDate;
use lazy_regex::regex_captures;
use serde::Serialize;

use crate::{Grade, LocaleConfig, Result, TranscriptError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One course entry of a transcript.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub scope: Scope,
    pub grade: Grade,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

/// Prints the record in the layout of a primary locale course line, so that [parse_record] reads
/// it back to an equal [Record].
impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.scope,
            self.grade,
            self.date.format(DATE_FORMAT)
        )
    }
}

/// Workload of a course in higher education credits ("högskolepoäng", hp).
///
/// A scope read from a course line keeps its text as written there, apart from a decimal comma
/// becoming a point, so `30hp` stays `30hp` and `7,50hp` becomes `7.50hp`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scope {
    value: f64,
    text: String,
}

impl Scope {
    pub const UNIT: &str = "hp";

    /// Scope of `value` credits, written with at least one decimal.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            text: format!("{}{}", format_number(value), Self::UNIT),
        }
    }

    /// Reads a scope token such as `7,5hp`: a decimal number directly followed by a two letter
    /// unit.
    pub fn parse(token: &str) -> Option<Self> {
        let (_, magnitude) = regex_captures!(r"^([0-9]+(?:[.,][0-9]+)?)\p{L}{2}$", token)?;
        Some(Self {
            value: magnitude.replace(',', ".").parse().ok()?,
            text: token.replace(',', "."),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Scope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Formats a number like `7.5` or `30.0`, always with at least one decimal.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Parses a single course line.
///
/// The line is anchored on its trailing `<scope><unit> <grade> <date>` tokens, with everything
/// before them being the name. Tokens are separated by single spaces. Anything following the date
/// (the note column) is ignored.
pub fn parse_record(line: &str, config: &LocaleConfig) -> Result<Record> {
    let (_, name, scope, grade, date) = regex_captures!(
        r"^(.+?) ([0-9]+(?:[.,][0-9]+)?\p{L}{2}) (\S+) ([0-9]{4}-[0-9]{1,2}-[0-9]{1,2})(?: .*)?$",
        line
    )
    .ok_or_else(|| TranscriptError::malformed_record(line))?;

    let scope = Scope::parse(scope).ok_or_else(|| TranscriptError::malformed_record(line))?;
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| TranscriptError::malformed_record(line))?;

    Ok(Record {
        name: config.course_code.strip(name).to_string(),
        scope,
        grade: Grade::new(grade),
        date,
    })
}

/// Parses every line of a course block, in order. Pass-only graded courses are dropped unless
/// `include_pass_only` is set.
pub fn get_records<S>(
    lines: &[S],
    config: &LocaleConfig,
    include_pass_only: bool,
) -> Result<Vec<Record>>
where
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        let record = parse_record(line.as_ref(), config)?;
        if !include_pass_only && record.grade.is_pass_only() {
            log::debug!("Skipping pass-only course {:?}.", record.name);
            continue;
        }
        records.push(record);
    }
    log::info!(
        "Read {} of {} course lines as records.",
        records.len(),
        lines.len()
    );
    Ok(records)
}
