//! The two supported transcript languages and the layout details that differ between them.


use serde::Serialize;

use crate::{Result, TranscriptError};

/// Language of a transcript. Swedish is the primary locale.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    Swedish,
    English,
}

impl Locale {
    /// Prefix of the first line of a Swedish transcript.
    pub const PRIMARY_SENTINEL: &str = "Resultatintyg";

    /// Determines the locale from the first line of the transcript text.
    pub fn detect<S>(lines: &[S]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let first = lines.first().ok_or(TranscriptError::EmptyDocument)?;
        let locale = if first.as_ref().starts_with(Self::PRIMARY_SENTINEL) {
            Locale::Swedish
        } else {
            Locale::English
        };
        log::debug!("Detected {locale:?} transcript from first line {:?}.", first.as_ref());
        Ok(locale)
    }

    pub fn is_primary(self) -> bool {
        self == Locale::Swedish
    }

    pub fn config(self) -> &'static LocaleConfig {
        match self {
            Locale::Swedish => &SWEDISH,
            Locale::English => &ENGLISH,
        }
    }
}

/// Literal marker lines and name rules of one [Locale].
#[derive(Debug, Eq, PartialEq)]
pub struct LocaleConfig {
    pub locale: Locale,
    /// Column header line directly preceding the course lines.
    pub course_header: &'static str,
    /// Line directly following the course lines.
    pub course_terminator: &'static str,
    /// Line preceding the student's name and identity number.
    pub name_header: &'static str,
    /// Header of the credits summary. The verification code ends the third line after it.
    pub credits_header: &'static str,
    pub course_code: CourseCodeRule,
}

static SWEDISH: LocaleConfig = LocaleConfig {
    locale: Locale::Swedish,
    course_header: "Benämning Omfattning Betyg Datum Not",
    course_terminator: "Summering",
    name_header: "Namn Personnummer",
    credits_header: "Totalt varav tillgodoräknat Övrig tillgodoräknad utbildning",
    course_code: CourseCodeRule::Absent,
};

static ENGLISH: LocaleConfig = LocaleConfig {
    locale: Locale::English,
    course_header: "Code Name Scope Grade Date Note",
    course_terminator: "Summation",
    name_header: "Name Personal identity number",
    credits_header: "Total included credited parts Credited education",
    course_code: CourseCodeRule::FixedPrefix { width: 6 },
};

/// How a course code is embedded at the start of the name field of a course line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CourseCodeRule {
    /// The name field holds only the course name.
    Absent,
    /// The name field starts with a code of exactly `width` characters, optionally followed by a
    /// single space.
    FixedPrefix { width: usize },
}

impl CourseCodeRule {
    /// Returns the course name with any course code removed.
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        match *self {
            CourseCodeRule::Absent => name,
            CourseCodeRule::FixedPrefix { width } => match name.char_indices().nth(width) {
                Some((index, ' ')) => &name[index + 1..],
                Some((index, _)) => &name[index..],
                None => "",
            },
        }
    }
}
