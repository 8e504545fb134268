//! Fixture builders for tests: a minimal ZIP writer and Word packages.
//!
//! Shared with the integration tests through `#[path]`, so nothing here may
//! refer to `crate::`.
#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::Crc;
use flate2::write::DeflateEncoder;
use std::io::Write;

pub const MAIN_DOCUMENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

struct Entry {
    name: String,
    method: u16,
    crc: u32,
    uncompressed_size: u32,
    data: Vec<u8>,
}

/// Writes a single-disk archive. With [`ZipBuilder::zip64`] the central
/// directory defers every size and offset to ZIP64 records.
#[derive(Default)]
pub struct ZipBuilder {
    entries: Vec<Entry>,
    comment: Vec<u8>,
    zip64: bool,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(mut self, name: &str, data: &[u8]) -> Self {
        self.entries.push(Entry {
            name: name.to_string(),
            method: 0,
            crc: crc(data),
            uncompressed_size: data.len() as u32,
            data: data.to_vec(),
        });
        self
    }

    pub fn deflated(mut self, name: &str, data: &[u8]) -> Self {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        self.entries.push(Entry {
            name: name.to_string(),
            method: 8,
            crc: crc(data),
            uncompressed_size: data.len() as u32,
            data: encoder.finish().unwrap(),
        });
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.entries.push(Entry {
            name: name.to_string(),
            method: 0,
            crc: 0,
            uncompressed_size: 0,
            data: Vec::new(),
        });
        self
    }

    /// Saturate the 32-bit fields and carry the real values in a ZIP64
    /// extra field per entry, a ZIP64 EOCD record and its locator.
    pub fn zip64(mut self) -> Self {
        self.zip64 = true;
        self
    }

    pub fn comment(mut self, comment: &[u8]) -> Self {
        self.comment = comment.to_vec();
        self
    }

    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut offsets = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            offsets.push(out.len() as u32);
            out.extend_from_slice(b"PK\x03\x04");
            out.write_u16::<LittleEndian>(20).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u16::<LittleEndian>(entry.method).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u16::<LittleEndian>(0x21).unwrap();
            out.write_u32::<LittleEndian>(entry.crc).unwrap();
            out.write_u32::<LittleEndian>(entry.data.len() as u32).unwrap();
            out.write_u32::<LittleEndian>(entry.uncompressed_size).unwrap();
            out.write_u16::<LittleEndian>(entry.name.len() as u16).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.extend_from_slice(entry.name.as_bytes());
            out.extend_from_slice(&entry.data);
        }

        let cd_offset = out.len() as u64;
        for (entry, offset) in self.entries.iter().zip(&offsets) {
            out.extend_from_slice(b"PK\x01\x02");
            out.write_u16::<LittleEndian>(if self.zip64 { 45 } else { 20 }).unwrap();
            out.write_u16::<LittleEndian>(if self.zip64 { 45 } else { 20 }).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u16::<LittleEndian>(entry.method).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u16::<LittleEndian>(0x21).unwrap();
            out.write_u32::<LittleEndian>(entry.crc).unwrap();
            if self.zip64 {
                out.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap();
                out.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap();
            } else {
                out.write_u32::<LittleEndian>(entry.data.len() as u32).unwrap();
                out.write_u32::<LittleEndian>(entry.uncompressed_size).unwrap();
            }
            out.write_u16::<LittleEndian>(entry.name.len() as u16).unwrap();
            out.write_u16::<LittleEndian>(if self.zip64 { 28 } else { 0 }).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u16::<LittleEndian>(0).unwrap();
            out.write_u32::<LittleEndian>(0).unwrap();
            out.write_u32::<LittleEndian>(if self.zip64 { 0xFFFFFFFF } else { *offset })
                .unwrap();
            out.extend_from_slice(entry.name.as_bytes());
            if self.zip64 {
                out.write_u16::<LittleEndian>(0x0001).unwrap();
                out.write_u16::<LittleEndian>(24).unwrap();
                out.write_u64::<LittleEndian>(entry.uncompressed_size as u64).unwrap();
                out.write_u64::<LittleEndian>(entry.data.len() as u64).unwrap();
                out.write_u64::<LittleEndian>(*offset as u64).unwrap();
            }
        }
        let cd_size = out.len() as u64 - cd_offset;
        let count = self.entries.len() as u64;

        if self.zip64 {
            let eocd64_offset = out.len() as u64;
            out.extend_from_slice(b"PK\x06\x06");
            out.write_u64::<LittleEndian>(44).unwrap();
            out.write_u16::<LittleEndian>(45).unwrap();
            out.write_u16::<LittleEndian>(45).unwrap();
            out.write_u32::<LittleEndian>(0).unwrap();
            out.write_u32::<LittleEndian>(0).unwrap();
            out.write_u64::<LittleEndian>(count).unwrap();
            out.write_u64::<LittleEndian>(count).unwrap();
            out.write_u64::<LittleEndian>(cd_size).unwrap();
            out.write_u64::<LittleEndian>(cd_offset).unwrap();

            out.extend_from_slice(b"PK\x06\x07");
            out.write_u32::<LittleEndian>(0).unwrap();
            out.write_u64::<LittleEndian>(eocd64_offset).unwrap();
            out.write_u32::<LittleEndian>(1).unwrap();
        }

        let (count16, cd_size32, cd_offset32) = if self.zip64 {
            (0xFFFF, 0xFFFFFFFF, 0xFFFFFFFF)
        } else {
            (count as u16, cd_size as u32, cd_offset as u32)
        };
        out.extend_from_slice(b"PK\x05\x06");
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(count16).unwrap();
        out.write_u16::<LittleEndian>(count16).unwrap();
        out.write_u32::<LittleEndian>(cd_size32).unwrap();
        out.write_u32::<LittleEndian>(cd_offset32).unwrap();
        out.write_u16::<LittleEndian>(self.comment.len() as u16).unwrap();
        out.extend_from_slice(&self.comment);
        out
    }
}

fn crc(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

/// `[Content_Types].xml` declaring `part` as the main document part.
pub fn content_types(part: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="{part}" ContentType="{MAIN_DOCUMENT_TYPE}"/></Types>"#
    )
}

/// `word/document.xml` wrapping the given body markup.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// Body markup with one single-run paragraph per entry.
pub fn paragraphs(texts: &[&str]) -> String {
    texts
        .iter()
        .map(|t| format!(r#"<w:p><w:r><w:t xml:space="preserve">{t}</w:t></w:r></w:p>"#))
        .collect()
}

/// A complete `.docx` package with the given body markup.
pub fn docx(body: &str) -> Vec<u8> {
    ZipBuilder::new()
        .deflated("[Content_Types].xml", content_types("/word/document.xml").as_bytes())
        .stored("_rels/.rels", b"<Relationships/>")
        .deflated("word/document.xml", document_xml(body).as_bytes())
        .finish()
}

/// A `.docx` package whose body is one paragraph per entry of `texts`.
pub fn docx_with_paragraphs(texts: &[&str]) -> Vec<u8> {
    docx(&paragraphs(texts))
}
