//! ZIP archive parsing and extraction.
//!
//! A Word document is an OPC package, which is a plain ZIP archive. This
//! module reads such archives from any [`ReadAt`](crate::io::ReadAt) source.
//!
//! - [`structures`]: records of the ZIP format (EOCD, ZIP64, headers)
//! - [`parser`]: locating the Central Directory and entry data
//! - [`extractor`]: decompressing and verifying entries
//!
//! Supports ZIP64, STORED and DEFLATE. No encryption, no multi-disk.

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
