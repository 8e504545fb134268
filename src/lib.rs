//! # wordtext
//!
//! Extract the plain text of Word (`.docx`) documents.
//!
//! A document is read fully into memory, opened as a ZIP package, and the
//! text runs of its main part are concatenated in document order. The
//! result lives in a [`Presenter`], which renders it and exports it either
//! as a plain-text file or as a `{"doc_content": ...}` JSON record for the
//! clipboard.
//!
//! ## Features
//!
//! - Documents from the local filesystem or HTTP/HTTPS URLs (Range requests)
//! - Own ZIP reader with ZIP64, STORED and DEFLATE, CRC-checked
//! - Main part resolved through `[Content_Types].xml`
//! - Flat (run concatenation) or paragraph-aware text layout
//! - Overlapping uploads settle in start order; stale results are dropped
//!
//! ## Example
//!
//! ```no_run
//! use wordtext::{DocxExtractor, Loader, Session, Source};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Session::new(Loader::new(), DocxExtractor::default());
//!     session.upload(&Source::parse("report.docx")).await?;
//!
//!     let presenter = session.presenter();
//!     println!("{}", presenter.render());
//!     println!("{}", presenter.clipboard_payload()?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod docx;
pub mod error;
pub mod export;
pub mod io;
pub mod loader;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod zip;

#[cfg(test)]
mod testing;

pub use cli::Cli;
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use docx::{DocxExtractor, TextLayout};
pub use error::{Error, ErrorKind, Result};
pub use export::{DOWNLOAD_FILE_NAME, DownloadArtifact, ExportRecord};
pub use io::{BufferReader, HttpRangeReader, LocalFileReader, ReadAt};
pub use loader::{Loader, RawBuffer, Source};
pub use presenter::{COPY_NOTICE, Completion, PLACEHOLDER, Presenter, UploadTicket, ViewState};
pub use session::Session;
pub use zip::{ZipExtractor, ZipFileEntry};
