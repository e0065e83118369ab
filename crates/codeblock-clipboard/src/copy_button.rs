//! Copy button state with a timed reset

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::error::{Error, Result};

/// How long the button reports "copied" after a copy.
pub const COPY_RESET_AFTER: Duration = Duration::from_millis(2000);

/// A copy affordance for one code block.
///
/// After [`CopyButton::copy`] the state is `true` until `reset_after` has
/// elapsed. Copying again restarts the window. Dropping the button aborts any
/// pending reset, so no timer outlives it.
#[derive(Debug)]
pub struct CopyButton<C: Clipboard> {
    clipboard: C,
    reset_after: Duration,
    state: Arc<watch::Sender<bool>>,
    /// Bumped on every copy; a reset only applies to the copy that started it.
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl<C: Clipboard> CopyButton<C> {
    pub fn new(clipboard: C) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            clipboard,
            reset_after: COPY_RESET_AFTER,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Change how long the "copied" state lasts.
    pub fn with_reset_after(mut self, reset_after: Duration) -> Self {
        self.reset_after = reset_after;
        self
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    /// Copy `source` to the clipboard and start the confirmation window.
    ///
    /// Must be called from within a tokio runtime, which drives the reset.
    pub fn copy(&mut self, source: &str) -> Result<()> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;

        self.clipboard.set_text(source)?;

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let copy_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(true);
        debug!(bytes = source.len(), copy_generation, "Copied code block source");

        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        let delay = self.reset_after;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if expire(&state, &generation, copy_generation) {
                debug!("Copy confirmation expired");
            }
        }));

        Ok(())
    }

    /// True during the confirmation window after a copy.
    pub fn is_copied(&self) -> bool {
        *self.state.borrow()
    }

    /// Watch the "copied" state as it changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Button text for the current state.
    pub fn label(&self) -> &'static str {
        if self.is_copied() { "Copied" } else { "Copy" }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

/// Clear the copied state if no newer copy has happened since `copy_generation`.
///
/// The check runs under the channel's lock, so a concurrent copy either bumps
/// the generation first (and this is a no-op) or sets the state afterwards.
fn expire(state: &watch::Sender<bool>, generation: &AtomicU64, copy_generation: u64) -> bool {
    state.send_if_modified(|copied| {
        if generation.load(Ordering::SeqCst) != copy_generation || !*copied {
            return false;
        }
        *copied = false;
        true
    })
}

impl<C: Clipboard> Drop for CopyButton<C> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
