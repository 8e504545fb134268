//! The two export artifacts: a plain-text download and a JSON record for
//! the clipboard.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Error, Result};

/// Fixed name of the downloaded text file.
pub const DOWNLOAD_FILE_NAME: &str = "contenido-extraido.txt";

pub const DOWNLOAD_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// The clipboard record, `{"doc_content": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "doc_content")]
    pub content: String,
}

impl ExportRecord {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A text file ready to be written; the bytes are exactly the UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    pub fn from_text(text: &str) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME,
            bytes: text.as_bytes().to_vec(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        DOWNLOAD_MIME_TYPE
    }

    /// Write under its fixed name inside `dir`.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        self.save_as(&path).await?;
        Ok(path)
    }

    /// Write to an explicit path, creating parent directories.
    pub async fn save_as(&self, path: &Path) -> Result<()> {
        let to_error = |source: std::io::Error| Error::Export {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(to_error)?;
            }
        }
        fs::write(path, &self.bytes).await.map_err(to_error)?;

        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "saved text download");
        Ok(())
    }
}
