//! Locating the blocks of a transcript within its lines.


use std::ops::Range;

use serde::Serialize;

use crate::{Locale, LocaleConfig, Record, Result, TranscriptError, get_records};

/// Lines from the credits header to the line ending with the verification code.
const VERIFICATION_OFFSET: usize = 3;

/// Returns the index of the first line that is exactly `marker`.
pub fn find_marker<S>(lines: &[S], marker: &str) -> Result<usize>
where
    S: AsRef<str>,
{
    lines
        .iter()
        .position(|line| line.as_ref() == marker)
        .ok_or_else(|| TranscriptError::section_not_found(marker))
}

/// Lines of a single transcript, along with the locale detected from them.
#[derive(Debug)]
pub struct Transcript<'a, S> {
    lines: &'a [S],
    locale: Locale,
}

impl<'a, S> Transcript<'a, S>
where
    S: AsRef<str>,
{
    pub fn new(lines: &'a [S]) -> Result<Self> {
        let locale = Locale::detect(lines)?;
        Ok(Self { lines, locale })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn config(&self) -> &'static LocaleConfig {
        self.locale.config()
    }

    pub fn lines(&self) -> &'a [S] {
        self.lines
    }

    /// Range of the course lines, between the course header and the terminator.
    pub fn course_block(&self) -> Result<Range<usize>> {
        let config = self.config();
        let start = find_marker(self.lines, config.course_header)? + 1;
        // Only a terminator after the header counts.
        let end = start + find_marker(&self.lines[start..], config.course_terminator)?;
        log::debug!("Course block spans lines {start}..{end}.");
        Ok(start..end)
    }

    pub fn course_lines(&self) -> Result<&'a [S]> {
        Ok(&self.lines[self.course_block()?])
    }

    /// Parses the course block into records, in document order.
    pub fn records(&self, include_pass_only: bool) -> Result<Vec<Record>> {
        get_records(self.course_lines()?, self.config(), include_pass_only)
    }

    /// Reads the student's details. A transcript without a certification block yields no
    /// verification code rather than an error.
    pub fn personal_info(&self) -> Result<PersonalInfo> {
        let config = self.config();
        let name_index = find_marker(self.lines, config.name_header)? + 1;
        let name_line = self
            .lines
            .get(name_index)
            .map(AsRef::as_ref)
            .ok_or_else(|| TranscriptError::section_not_found(config.name_header))?;
        let (name, identity_number) = name_line.rsplit_once(' ').unwrap_or(("", name_line));

        Ok(PersonalInfo {
            name: name.to_string(),
            identity_number: identity_number.to_string(),
            verification_code: self.verification_code(),
        })
    }

    fn verification_code(&self) -> Option<String> {
        let config = self.config();
        let line = find_marker(self.lines, config.credits_header)
            .ok()
            .and_then(|index| self.lines.get(index + VERIFICATION_OFFSET));
        match line {
            Some(line) => line.as_ref().rsplit(' ').next().map(str::to_string),
            None => {
                log::warn!("No verification code found in the transcript.");
                None
            }
        }
    }
}

/// Details of the student a transcript was issued for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub identity_number: String,
    pub verification_code: Option<String>,
}
