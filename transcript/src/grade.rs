use serde::Serialize;

use crate::{Result, TranscriptError};

/// Grade symbol of a course, exactly as it appears on the transcript.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    /// "Godkänd", a pass without a numeric grade.
    pub const PASS_ONLY: &str = "G";
    /// "Underkänd", a fail.
    pub const FAIL: &str = "U";

    const PASS_ONLY_WEIGHT: u32 = 3;
    const FAIL_WEIGHT: u32 = 0;

    pub fn new<S>(symbol: S) -> Self
    where
        S: Into<String>,
    {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_pass_only(&self) -> bool {
        self.0 == Self::PASS_ONLY
    }

    /// Numeric weight of the grade when averaging.
    pub fn weight(&self) -> Result<u32> {
        match self.0.as_str() {
            Self::PASS_ONLY => Ok(Self::PASS_ONLY_WEIGHT),
            Self::FAIL => Ok(Self::FAIL_WEIGHT),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse().map_err(|_| self.unknown())
            }
            _ => Err(self.unknown()),
        }
    }

    fn unknown(&self) -> TranscriptError {
        TranscriptError::UnknownGrade {
            grade: self.0.clone(),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Grade {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use test_casing::test_casing;

    use super::*;

    #[test_casing(5, [("G", 3), ("U", 0), ("7", 7), ("3", 3), ("05", 5)])]
    #[gtest]
    fn test_weight(symbol: &str, expected: u32) {
        expect_that!(Grade::new(symbol).weight(), ok(eq(&expected)));
    }

    #[test_casing(5, ["X", "VG", "", "-1", "99999999999"])]
    #[gtest]
    fn test_weight_unknown(symbol: &str) {
        expect_that!(
            Grade::new(symbol).weight(),
            err(eq(&TranscriptError::UnknownGrade {
                grade: symbol.to_string(),
            }))
        );
    }

    #[gtest]
    fn test_is_pass_only() {
        expect_that!(Grade::new("G").is_pass_only(), eq(true));
        expect_that!(Grade::new("5").is_pass_only(), eq(false));
    }
}
