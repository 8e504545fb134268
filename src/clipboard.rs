//! Clipboard targets for the JSON export.

use crate::error::{Error, Result};

/// Something that can receive text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match &mut self.inner {
            Some(clipboard) => clipboard,
            slot @ None => slot.insert(
                arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?,
            ),
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// In-process clipboard; keeps the last text written.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write, like one without permission.
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            unavailable: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::Clipboard("write permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
