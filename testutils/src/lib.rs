//! Utilities used in tests in multiple crates within the workspace.

use std::{fmt::Debug, marker::PhantomData};

use googletest::{
    description::Description,
    matcher::{Matcher, MatcherBase, MatcherResult},
};

/// Text of the first page of an English transcript, as extracted from the PDF.
///
/// Averages: 3.75 without pass-only grades over 30hp, 3.6 with them over 37.5hp.
pub const ENGLISH_TRANSCRIPT: &str = "\
Transcript of recordsPrint date
2024-05-01
Name Personal identity number
Alice Maria Andersson 19990101-1234
Completed courses
Code Name Scope Grade Date Note
TDA555 Introduction to Functional Programming 7,5hp 5 2019-10-25
DAT017 Machine oriented programming 7,5hp 4 2020-01-15
TMV206 Linear algebra 7,5hp G 2020-03-20
EDA452 Software Engineering Project 15,0hp 3 2020-06-05
Summation
Total included credited parts Credited education
37,5 hp 0,0 hp 0,0 hp
Verification
The authenticity of this transcript can be verified at www.student.ladok.se with code EN12-AB34
";

/// Text of the first page of a Swedish transcript, as extracted from the PDF.
///
/// Averages: 2.5 without pass-only grades over 15hp, 2.75 with them over 30hp.
pub const SWEDISH_TRANSCRIPT: &str = "\
ResultatintygUtskriftsdatum
2024-05-01
Namn Personnummer
Anna Svensson 19990101-1234
Avslutade kurser
Benämning Omfattning Betyg Datum Not
Inledande programmering 7,5hp 5 2019-10-25
Diskret matematik 7,5hp U 2020-01-15
Kandidatarbete i datateknik 15,0hp G 2020-06-05
Summering
Totalt varav tillgodoräknat Övrig tillgodoräknad utbildning
30,0 hp 0,0 hp 0,0 hp
Kontrollkod
Intygets äkthet kan kontrolleras på www.student.ladok.se med kod SV56-CD78
";

/// Splits transcript text into its lines.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Lines of `text` with every line equal to `marker` removed.
pub fn lines_without<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    text.lines().filter(|line| *line != marker).collect()
}

/// Creates a matcher against an `anyhow::Error` that downcasts to the error type `E`, converts
/// that to its kind `K`, and matches the kind against the inner matcher.
pub fn anyhow_error_kind<E, K, M>(inner: M) -> AnyhowErrorKind<E, K, M> {
    AnyhowErrorKind::<E, K, M> {
        inner,
        phantom_e: Default::default(),
        phantom_k: Default::default(),
    }
}

pub struct AnyhowErrorKind<E, K, M> {
    inner: M,
    phantom_e: PhantomData<E>,
    phantom_k: PhantomData<K>,
}

impl<E, K, M> AnyhowErrorKind<E, K, M> {
    fn type_name() -> &'static str {
        std::any::type_name::<E>()
    }
}

impl<E, K, M> MatcherBase for AnyhowErrorKind<E, K, M> {}

impl<E, K, M> Matcher<&anyhow::Error> for AnyhowErrorKind<E, K, M>
where
    E: std::error::Error + Send + Sync + 'static,
    K: Copy + Debug + for<'e> From<&'e E>,
    M: Matcher<K>,
{
    fn matches(&self, actual: &anyhow::Error) -> MatcherResult {
        actual
            .downcast_ref::<E>()
            .map(|e| self.inner.matches(K::from(e)))
            .unwrap_or(MatcherResult::NoMatch)
    }

    fn explain_match(&self, actual: &anyhow::Error) -> Description {
        match actual.downcast_ref::<E>() {
            Some(e) => Description::new()
                .text(format!(
                    "which is of the expected concrete error type {}",
                    Self::type_name()
                ))
                .text("with kind")
                .nested(self.inner.explain_match(K::from(e))),
            None => Description::new().text(format!(
                "which is not the expected concrete error type {}",
                Self::type_name()
            )),
        }
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => format!(
                "is of concrete error type {} with kind which {}",
                Self::type_name(),
                self.inner.describe(MatcherResult::Match)
            )
            .into(),
            MatcherResult::NoMatch => format!(
                "is not of concrete error type {} with kind which {}",
                Self::type_name(),
                self.inner.describe(MatcherResult::Match)
            )
            .into(),
        }
    }
}
