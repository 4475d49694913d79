//! Builds the report for a transcript from its lines.


use anyhow::{Context, Result};
use serde::Serialize;
use transcript::report::{self, InfoEntry, ReportTheme};
use transcript::{PersonalInfo, Record, SortMode, Statistic, Transcript, statistics};

/// What to include in the report.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub verbose: bool,
    pub sort_mode: SortMode,
    pub include_pass_only: bool,
    pub ignore_average: bool,
}

/// Everything read and derived from one transcript.
#[derive(Debug)]
pub struct Report {
    pub info: PersonalInfo,
    /// In document order.
    pub courses: Vec<Record>,
    pub stats: Vec<Statistic>,
}

/// JSON form of a [Report].
#[derive(Serialize)]
pub struct ReportDump<'a> {
    pub info: Vec<InfoEntry>,
    pub courses: &'a [Record],
    pub stats: &'a [Statistic],
}

impl Report {
    pub fn from_lines<S>(lines: &[S], options: &Options) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let transcript = Transcript::new(lines).with_context(|| "reading transcript")?;
        log::info!("Reading {:?} transcript.", transcript.locale());

        let courses = transcript
            .records(options.include_pass_only)
            .with_context(|| "reading courses")?;
        let info = transcript
            .personal_info()
            .with_context(|| "reading personal info")?;
        let stats = statistics(&courses, options.verbose, options.ignore_average)
            .with_context(|| "computing statistics")?;

        Ok(Self {
            info,
            courses,
            stats,
        })
    }

    pub fn dump(&self) -> ReportDump<'_> {
        ReportDump {
            info: self.info.entries(),
            courses: &self.courses,
            stats: &self.stats,
        }
    }

    /// Renders the tables to print, in order. Only the statistics are included unless
    /// `options.verbose` is set, and empty statistics are left out entirely.
    pub fn render(&self, options: &Options, theme: &ReportTheme) -> Result<Vec<String>> {
        let mut tables = Vec::new();

        if options.verbose {
            tables.push(report::info_table(&self.info, &theme.details)?.to_string());
            tables.push(
                report::courses_table(&self.courses, options.sort_mode, &theme.courses)?
                    .to_string(),
            );
        }

        if self.stats.is_empty() {
            log::debug!("No statistics to print.");
        } else {
            tables.push(report::stats_table(&self.stats, &theme.details)?.to_string());
        }

        Ok(tables)
    }
}
