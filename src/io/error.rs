use thiserror::Error;

use super::Format;

/// Errors raised while reading input tables or writing reports.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read or write stream: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A row of an input table does not have the expected shape.
    ///
    /// `line` is 1-based and counts blank and comment lines.
    #[error("{format} line {line}: {details}")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("{0} is an input table, not a report format")]
    UnsupportedWriteFormat(Format),

    #[error("cannot encode report as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
