//! The upload pipeline: read, extract, then settle into the presenter.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::docx::DocxExtractor;
use crate::error::Result;
use crate::loader::{Loader, RawBuffer, Source};
use crate::presenter::{Completion, Presenter};

/// One presenter fed by any number of uploads, possibly overlapping.
///
/// The presenter lock is never held across an `.await`; ordering between
/// overlapping uploads comes from the tickets taken when each one starts.
#[derive(Debug, Default)]
pub struct Session {
    loader: Loader,
    extractor: DocxExtractor,
    presenter: Mutex<Presenter>,
}

impl Session {
    pub fn new(loader: Loader, extractor: DocxExtractor) -> Self {
        Self {
            loader,
            extractor,
            presenter: Mutex::new(Presenter::new()),
        }
    }

    pub fn presenter(&self) -> MutexGuard<'_, Presenter> {
        self.presenter.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load `source` and extract it.
    pub async fn upload(&self, source: &Source) -> Result<Completion> {
        self.upload_from(&source.file_name(), self.loader.load(source))
            .await
    }

    /// Run the pipeline on a read that may still be in flight.
    pub async fn upload_from<F>(&self, name: &str, read: F) -> Result<Completion>
    where
        F: Future<Output = Result<RawBuffer>>,
    {
        let ticket = self.presenter().begin_upload();
        tracing::debug!(ticket = ticket.sequence(), name, "upload started");

        let result = match read.await {
            Ok(buffer) => self.extractor.extract(buffer).await,
            Err(err) => {
                tracing::warn!(name, error = %err, "upload could not be read");
                Err(err)
            }
        };

        self.presenter().complete_upload(ticket, name, result)
    }
}
