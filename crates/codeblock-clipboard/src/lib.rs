//! Clipboard sinks and the timed "copied" confirmation shown by code blocks.
//!
//! [`CopyButton`] copies a block's full, unmodified source through a
//! [`Clipboard`] and reports `true` from [`CopyButton::is_copied`] for
//! [`COPY_RESET_AFTER`] afterwards. The reset runs on the tokio runtime and is
//! aborted when the button is dropped.

pub mod clipboard;
pub mod copy_button;
pub mod error;

pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use copy_button::{COPY_RESET_AFTER, CopyButton};
pub use error::{Error, Result};
