//! Locating parts inside a Word document package.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::sync::Arc;

use crate::io::ReadAt;
use crate::zip::{ZipExtractor, ZipFileEntry};
use anyhow::{Context, Result, anyhow};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Where Word puts the body when `[Content_Types].xml` does not say otherwise.
pub const DEFAULT_MAIN_PART: &str = "word/document.xml";

/// Content types of a main document part: document, macro-enabled document,
/// template and macro-enabled template.
pub const MAIN_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
    "application/vnd.ms-word.document.macroEnabled.main+xml",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml",
    "application/vnd.ms-word.template.macroEnabledTemplate.main+xml",
];

/// An opened document package: the archive plus its part listing.
pub struct DocumentPackage<R: ReadAt> {
    archive: ZipExtractor<R>,
    entries: Vec<ZipFileEntry>,
}

impl<R: ReadAt> DocumentPackage<R> {
    pub async fn open(reader: Arc<R>) -> Result<Self> {
        let archive = ZipExtractor::new(reader);
        let entries = archive.list_files().await?;
        Ok(Self { archive, entries })
    }

    pub fn entry(&self, part_name: &str) -> Option<&ZipFileEntry> {
        self.entries
            .iter()
            .find(|e| !e.is_directory && e.matches_part(part_name))
    }

    /// Contents of a part, or `None` when the package lacks it.
    pub async fn read_part(&self, part_name: &str) -> Result<Option<Vec<u8>>> {
        match self.entry(part_name) {
            Some(entry) => Ok(Some(self.archive.extract_to_memory(entry).await?)),
            None => Ok(None),
        }
    }

    /// Name of the main document part.
    pub async fn main_part_name(&self) -> Result<String> {
        if let Some(xml) = self.read_part(CONTENT_TYPES_PART).await? {
            let declared = main_part_from_content_types(&xml)
                .with_context(|| format!("Malformed {}", CONTENT_TYPES_PART))?;
            if let Some(part) = declared {
                return Ok(part.trim_start_matches('/').to_string());
            }
            tracing::debug!("content types declare no main part, using {}", DEFAULT_MAIN_PART);
        }
        Ok(DEFAULT_MAIN_PART.to_string())
    }

    /// Raw XML of the main document part.
    pub async fn main_document(&self) -> Result<Vec<u8>> {
        let part = self.main_part_name().await?;
        self.read_part(&part)
            .await?
            .ok_or_else(|| anyhow!("No document body: package has no part {}", part))
    }
}

/// The `PartName` of the first `Override` whose content type is a main
/// document type.
pub fn main_part_from_content_types(xml: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::with_capacity(512);

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Override" => {
                let mut part_name = None;
                let mut content_type = None;
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.local_name().as_ref() {
                        b"PartName" => part_name = Some(attr.unescape_value()?.into_owned()),
                        b"ContentType" => content_type = Some(attr.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                if let (Some(part), Some(ct)) = (part_name, content_type) {
                    if MAIN_CONTENT_TYPES.contains(&ct.trim()) {
                        return Ok(Some(part));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}
