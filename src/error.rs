use crate::MismatchReport;
use std::path::PathBuf;

/// Which side of a comparison an operand was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Operand {
    #[display("1")]
    First,
    #[display("2")]
    Second,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Argument #{position} must be a {expected}, found {found}")]
    InvalidOperand {
        position: Operand,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot read file '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Missing implementation: no executed-query provider is configured")]
    MissingCollaborator,

    #[error("{0}")]
    Mismatch(Box<MismatchReport>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON operand: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<MismatchReport> for Error {
    fn from(value: MismatchReport) -> Self {
        Error::Mismatch(Box::new(value))
    }
}

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}

impl Error {
    /// True when the error is a failed comparison rather than a usage or I/O problem.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Error::Mismatch(_))
    }
}

