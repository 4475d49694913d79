pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Errors from reading a transcript. All of them mean that the transcript cannot be reported on.
#[derive(Clone, Debug, PartialEq, thiserror::Error, strum_macros::EnumDiscriminants)]
#[strum_discriminants(name(TranscriptErrorKind), derive(Hash))]
pub enum TranscriptError {
    #[error("transcript text is empty")]
    EmptyDocument,
    #[error("line {marker:?} not found, the transcript is malformed or in an unsupported layout")]
    SectionNotFound { marker: String },
    #[error("course line {line:?} does not end with a scope, grade and date")]
    MalformedRecord { line: String },
    #[error("unknown grade {grade:?}")]
    UnknownGrade { grade: String },
    #[error("no course scope to average over")]
    DivisionByZero,
    #[error("unknown sort mode {mode:?}, expected one of: name, grade, date")]
    InvalidSortMode { mode: String },
    #[error(transparent)]
    Table(#[from] termtable::TableError),
}

impl TranscriptError {
    pub(crate) fn section_not_found(marker: &str) -> Self {
        Self::SectionNotFound {
            marker: marker.to_string(),
        }
    }

    pub(crate) fn malformed_record(line: &str) -> Self {
        Self::MalformedRecord {
            line: line.to_string(),
        }
    }
}
