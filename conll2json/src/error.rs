//! Error enum
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The input file could not be opened.
    FileNotFound { path: PathBuf, source: io::Error },
    /// A line that does not follow the meta/token layout.
    Format {
        line: usize,
        content: String,
        reason: String,
    },
    /// A line that is not valid UTF-8.
    Encoding { line: usize },
    /// Any other read or write failure.
    Io(io::Error),
    /// The records could not be serialized.
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn format(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            Error::Format {
                line,
                content,
                reason,
            } => write!(f, "format error at line {}: {} ({:?})", line, reason, content),
            Error::Encoding { line } => write!(f, "line {} is not valid UTF-8", line),
            Error::Io(e) => write!(f, "{}", e),
            Error::Json(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileNotFound { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Format { .. } | Error::Encoding { .. } => None,
        }
    }
}
