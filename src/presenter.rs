//! The extracted-text state and the actions offered on it.

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::export::{DownloadArtifact, ExportRecord};

/// Shown while no document has been extracted.
pub const PLACEHOLDER: &str = "Upload a Word document to extract its content.";

/// Acknowledgement after a successful clipboard copy.
pub const COPY_NOTICE: &str = "Content copied to clipboard";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Empty,
    Populated,
}

/// Sequence number handed out when an upload starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What happened to a finished upload's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer upload had already settled; the result was dropped.
    Superseded,
}

#[derive(Debug, Default)]
pub struct Presenter {
    text: String,
    record: ExportRecord,
    state: ViewState,
    source: Option<String>,
    error: Option<String>,
    issued: u64,
    // newest ticket that was applied or failed
    settled: u64,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn record(&self) -> &ExportRecord {
        &self.record
    }

    /// Name of the upload the current text came from.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The text to display, or the placeholder while there is none. A
    /// document without any text shows the placeholder too.
    pub fn render(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER
        } else {
            &self.text
        }
    }

    /// Message of the latest failed upload, until a newer one succeeds.
    pub fn error_indicator(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_upload(&mut self) -> UploadTicket {
        self.issued += 1;
        UploadTicket(self.issued)
    }

    /// Settle an upload. Results older than an already settled upload are
    /// dropped; a failure leaves the text as it was.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        name: &str,
        result: Result<String>,
    ) -> Result<Completion> {
        let stale = ticket.0 <= self.settled;

        match result {
            Ok(_) if stale => {
                tracing::debug!(ticket = ticket.0, settled = self.settled, name, "discarding superseded upload");
                Ok(Completion::Superseded)
            }
            Ok(text) => {
                self.settled = ticket.0;
                self.record = ExportRecord::new(text.as_str());
                self.text = text;
                self.state = ViewState::Populated;
                self.source = Some(name.to_string());
                self.error = None;
                Ok(Completion::Applied)
            }
            Err(err) => {
                if !stale {
                    self.settled = ticket.0;
                    self.error = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    /// The current text as a download; empty when nothing was extracted.
    pub fn download(&self) -> DownloadArtifact {
        DownloadArtifact::from_text(&self.text)
    }

    /// The export record as pretty-printed JSON.
    pub fn clipboard_payload(&self) -> Result<String> {
        self.record.to_json()
    }

    /// Copy the JSON payload and return the acknowledgement to show.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) -> Result<&'static str> {
        let payload = self.clipboard_payload()?;
        match clipboard.set_text(&payload) {
            Ok(()) => {
                tracing::info!(bytes = payload.len(), "copied export record to clipboard");
                Ok(COPY_NOTICE)
            }
            Err(err) => {
                tracing::error!(error = %err, "clipboard copy failed");
                Err(err)
            }
        }
    }
}
