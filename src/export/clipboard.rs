//! Clipboard sink for exported text
//!
//! The explorer only needs "write this string somewhere". [`SystemClipboard`]
//! is the real implementation backed by `arboard`; tests use
//! [`MemoryClipboard`].

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Destination for copied text
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`.
///
/// The clipboard handle is created fresh on every write so nothing is held
/// open between copies. Common failures: no display server (headless Linux),
/// permission denied.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

/// In-memory sink that records the last write
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail_with: Option<String>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            contents: None,
            fail_with: Some(message.into()),
        }
    }
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{message}");
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_last_write() {
        let mut sink = MemoryClipboard::new();
        sink.write_text("first").unwrap();
        sink.write_text("second").unwrap();
        assert_eq!(sink.contents.as_deref(), Some("second"));
    }

    #[test]
    fn failing_sink_reports_message() {
        let mut sink = MemoryClipboard::failing("permission denied");
        let err = sink.write_text("x").unwrap_err();
        assert_eq!(err.to_string(), "permission denied");
        assert!(sink.contents.is_none());
    }
}
