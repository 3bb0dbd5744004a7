//! Positional, token-for-token comparison of query sequences.
use crate::*;
use itertools::{EitherOrBoth, Itertools as _};
use similar::TextDiff;
use std::fmt;

pub const FAILURE_MESSAGE: &str =
    "Failed asserting that two SQL query sequences are equal (whitespace ignored).";

/// Expected side of a comparison, tokenized once and reusable against any
/// number of actual operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualsSqlQueries {
    expected: QuerySet,
}

impl EqualsSqlQueries {
    pub fn new(expected: impl Into<Query>) -> Self {
        Self {
            expected: normalize(expected),
        }
    }

    pub fn expected(&self) -> &QuerySet {
        &self.expected
    }

    pub fn evaluate(&self, actual: impl Into<Query>) -> std::result::Result<(), MismatchReport> {
        self.evaluate_with(actual, "")
    }

    /// Like [`evaluate`](Self::evaluate), prefixing any failure message with
    /// `description`.
    pub fn evaluate_with(
        &self,
        actual: impl Into<Query>,
        description: &str,
    ) -> std::result::Result<(), MismatchReport> {
        let actual = normalize(actual);
        if actual == self.expected {
            return Ok(());
        }
        Err(MismatchReport {
            expected: self.expected.clone(),
            actual,
            description: description.to_owned(),
        })
    }

    /// Boolean form of [`evaluate`](Self::evaluate); never fails.
    pub fn matches(&self, actual: impl Into<Query>) -> bool {
        normalize(actual) == self.expected
    }
}

/// Compare `expected` and `actual` after normalizing both.
pub fn compare(
    expected: impl Into<Query>,
    actual: impl Into<Query>,
) -> std::result::Result<(), MismatchReport> {
    EqualsSqlQueries::new(expected).evaluate(actual)
}

/// Both sides of a failed comparison.
///
/// `Display` renders the full failure message: the caller's description,
/// [`FAILURE_MESSAGE`] and a unified diff of the exported sides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct MismatchReport {
    expected: QuerySet,
    actual: QuerySet,
    description: String,
}

impl MismatchReport {
    pub fn expected(&self) -> &QuerySet {
        &self.expected
    }

    pub fn actual(&self) -> &QuerySet {
        &self.actual
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn expected_export(&self) -> String {
        self.expected.to_string()
    }

    pub fn actual_export(&self) -> String {
        self.actual.to_string()
    }

    /// Index of the first statement that differs, or that exists on one side only.
    pub fn first_difference(&self) -> Option<usize> {
        self.expected
            .iter()
            .zip_longest(self.actual.iter())
            .position(|pair| match pair {
                EitherOrBoth::Both(expected, actual) => expected != actual,
                EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => true,
            })
    }

    /// Unified line diff from the expected export to the actual export.
    pub fn diff(&self) -> String {
        unified_diff(&self.expected, &self.actual)
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_message(&self.expected, &self.actual, &self.description, f)
    }
}

fn unified_diff(expected: &QuerySet, actual: &QuerySet) -> String {
    let expected = expected.to_string() + "\n";
    let actual = actual.to_string() + "\n";
    TextDiff::from_lines(&expected, &actual)
        .unified_diff()
        .header("Expected", "Actual")
        .to_string()
}

fn write_message(
    expected: &QuerySet,
    actual: &QuerySet,
    description: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let message = format!(
        "{description}\n{FAILURE_MESSAGE}\n{}",
        unified_diff(expected, actual)
    );
    f.write_str(message.trim())
}

/// Panic unless two SQL query sequences are equal, whitespace ignored.
///
/// ```rust
/// sqleq::assert_sql_eq!("SELECT *\nFROM t1", ["SELECT * FROM t1;"]);
/// ```
#[macro_export]
macro_rules! assert_sql_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assert_sql_eq!($expected, $actual, "")
    };
    ($expected:expr, $actual:expr, $($description:tt)+) => {
        if let Err(report) =
            $crate::EqualsSqlQueries::new($expected).evaluate_with($actual, &format!($($description)+))
        {
            panic!("{report}");
        }
    };
}
