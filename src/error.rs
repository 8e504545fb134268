use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the upload pipeline and the exporters.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {name}: {reason}")]
    Load { name: String, reason: String },

    #[error("{name} is not a .{expected} file")]
    Extension { name: String, expected: &'static str },

    #[error("cannot extract text from {name}: {reason}")]
    Parse { name: String, reason: String },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("cannot write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize export record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Coarse classification used to report failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Load,
    Parse,
    Clipboard,
    Export,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Load { .. } | Error::Extension { .. } => ErrorKind::Load,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Clipboard(_) => ErrorKind::Clipboard,
            Error::Export { .. } | Error::Serialize(_) => ErrorKind::Export,
        }
    }

    pub(crate) fn load(name: impl Into<String>, err: anyhow::Error) -> Self {
        Error::Load {
            name: name.into(),
            reason: format!("{err:#}"),
        }
    }

    pub(crate) fn parse(name: impl Into<String>, err: anyhow::Error) -> Self {
        Error::Parse {
            name: name.into(),
            reason: format!("{err:#}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
