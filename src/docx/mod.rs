//! Text extraction from Word (`.docx`) document packages.
//!
//! The package is opened as a ZIP archive, the main document part is
//! located through `[Content_Types].xml`, and the text of its runs is
//! concatenated in document order.

mod package;
mod text;

pub use package::{
    CONTENT_TYPES_PART, DEFAULT_MAIN_PART, DocumentPackage, MAIN_CONTENT_TYPES,
    main_part_from_content_types,
};
pub use text::{TextLayout, collect_text};

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::io::BufferReader;
use crate::loader::RawBuffer;

/// Turns a loaded buffer into the document's plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor {
    layout: TextLayout,
}

impl DocxExtractor {
    pub fn new(layout: TextLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> TextLayout {
        self.layout
    }

    /// Extract the text of `buffer`, consuming it.
    ///
    /// Any failure (not an archive, corrupt entry, no body, bad XML) is
    /// reported as [`Error::Parse`].
    pub async fn extract(&self, buffer: RawBuffer) -> Result<String> {
        let RawBuffer { name, bytes } = buffer;
        let reader = Arc::new(BufferReader::new(bytes));

        let result = async {
            let package = DocumentPackage::open(reader).await?;
            let xml = package.main_document().await?;
            collect_text(&xml, self.layout)
        }
        .await;

        match result {
            Ok(text) => {
                tracing::info!(name = %name, chars = text.chars().count(), "extracted document text");
                Ok(text)
            }
            Err(err) => {
                tracing::error!(name = %name, error = %format!("{err:#}"), "document extraction failed");
                Err(Error::parse(name, err))
            }
        }
    }
}
