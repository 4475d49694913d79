//! Parsing of Ladok transcript text into course records, and the statistics and report tables
//! derived from them.
//!
//! The input is always the text of the transcript as an ordered sequence of lines. Locating and
//! reading that text from a document is left to the caller.

pub mod error;
pub mod grade;
pub mod locale;
pub mod record;
pub mod report;
pub mod sections;
pub mod sort;
pub mod stats;

pub use error::{Result, TranscriptError, TranscriptErrorKind};
pub use grade::Grade;
pub use locale::{CourseCodeRule, Locale, LocaleConfig};
pub use record::{Record, Scope, get_records, parse_record};
pub use sections::{PersonalInfo, Transcript, find_marker};
pub use sort::SortMode;
pub use stats::{Statistic, compute_average, statistics, total_scope};
