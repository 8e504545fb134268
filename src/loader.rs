//! Reading an uploaded document fully into memory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io::{HttpRangeReader, LocalFileReader, ReadAt};

/// Extension accepted by default, like the `accept=".docx"` of a file picker.
pub const DOCX_EXTENSION: &str = "docx";

/// Where an upload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Interpret a command-line argument as a URL or a local path.
    pub fn parse(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    /// Last path segment, used in messages and for the extension check.
    pub fn file_name(&self) -> String {
        match self {
            Source::Path(path) => path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            Source::Url(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                path.trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(path)
                    .to_string()
            }
        }
    }

    fn has_extension(&self, extension: &str) -> bool {
        Path::new(&self.file_name())
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// The complete bytes of one upload.
#[derive(Debug, Clone)]
pub struct RawBuffer {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Reads sources into [`RawBuffer`]s, optionally filtering by extension.
#[derive(Debug, Clone)]
pub struct Loader {
    extension: Option<&'static str>,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            extension: Some(DOCX_EXTENSION),
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any file name instead of only `.docx`.
    pub fn accept_any_extension(mut self) -> Self {
        self.extension = None;
        self
    }

    pub async fn load(&self, source: &Source) -> Result<RawBuffer> {
        let name = source.file_name();

        if let Some(expected) = self.extension {
            if !source.has_extension(expected) {
                return Err(Error::Extension { name, expected });
            }
        }

        let bytes = match source {
            Source::Path(path) => {
                let reader = LocalFileReader::new(path).map_err(|e| Error::load(&name, e))?;
                reader.read_all().await.map_err(|e| Error::load(&name, e))?
            }
            Source::Url(url) => {
                let reader = HttpRangeReader::new(url.clone())
                    .await
                    .map_err(|e| Error::load(&name, e))?;
                let bytes = reader.read_all().await.map_err(|e| Error::load(&name, e))?;
                tracing::debug!(%url, transferred = reader.transferred_bytes(), "downloaded document");
                bytes
            }
        };

        tracing::debug!(name = %name, size = bytes.len(), "loaded upload");
        Ok(RawBuffer { name, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_urls_and_paths() {
        assert_eq!(
            Source::parse("https://example.com/files/report.docx?x=1"),
            Source::Url("https://example.com/files/report.docx?x=1".to_string())
        );
        assert_eq!(
            Source::parse("https://example.com/files/report.docx?x=1").file_name(),
            "report.docx"
        );
        assert_eq!(Source::parse("dir/letter.DOCX").file_name(), "letter.DOCX");
        assert!(Source::parse("dir/letter.DOCX").has_extension("docx"));
        assert!(!Source::parse("notes.txt").has_extension("docx"));
    }

    #[tokio::test]
    async fn extension_filter_runs_before_reading() {
        let err = Loader::new()
            .load(&Source::parse("does-not-exist.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Extension { .. }));
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::Path(dir.path().join("missing.docx"));
        let err = Loader::new().load(&source).await.unwrap_err();
        assert!(matches!(err, Error::Load { .. }), "{err}");
    }

    #[tokio::test]
    async fn reads_whole_file_when_filter_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, b"\x00\x01binary").unwrap();

        let buffer = Loader::new()
            .accept_any_extension()
            .load(&Source::Path(path))
            .await
            .unwrap();
        assert_eq!(buffer.name, "blob.bin");
        assert_eq!(buffer.bytes, b"\x00\x01binary");
    }
}
