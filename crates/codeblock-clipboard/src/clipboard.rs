//! Clipboard sinks

use std::io::Write;
use std::sync::{Arc, Mutex};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::error::{Error, Result};

/// Somewhere copied text can be placed
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// In-process clipboard.
///
/// Clones share the same contents, so a test can keep one handle and give
/// the other to a [`crate::CopyButton`].
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text copied, if any.
    pub fn contents(&self) -> Result<Option<String>> {
        let guard = self.contents.lock().map_err(|_| Error::Poisoned)?;
        Ok(guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut guard = self.contents.lock().map_err(|_| Error::Poisoned)?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// Terminal clipboard using the OSC 52 escape sequence.
///
/// Writes `ESC ] 52 ; c ; <base64> BEL` to the wrapped writer. Terminals that
/// support OSC 52 place the decoded text on the system clipboard, including
/// over SSH.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// The escape sequence that copies `text`.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let sequence = Self::sequence(text);
        debug!(bytes = text.len(), "Writing OSC 52 clipboard sequence");
        self.writer.write_all(sequence.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_contents() {
        let observer = MemoryClipboard::new();
        let mut handle = observer.clone();
        assert_eq!(observer.contents().unwrap(), None);

        handle.set_text("pip install replicate").unwrap();
        assert_eq!(
            observer.contents().unwrap().as_deref(),
            Some("pip install replicate")
        );
    }

    #[test]
    fn test_osc52_sequence() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.set_text("hi").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGk=\x07");
    }
}
