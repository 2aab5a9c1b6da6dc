//! Catalog file watcher for `serve`.
//!
//! DESIGN
//! ======
//! The watcher observes the catalog's parent directory (editors often
//! replace files rather than write in place) and filters events down to the
//! catalog file itself. Bursts of events from a single save are collapsed:
//! the callback runs once the file has been quiet for a full debounce
//! window, so it always sees the last write of the burst.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use notify::{Event, RecursiveMode, Watcher};
use tracing::{debug, warn};

/// Quiet period after the last write before a change is reported.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("{} has no file name", .0.display())]
    NoFileName(PathBuf),
    #[error("failed to start file watcher: {0}")]
    Notify(#[from] notify::Error),
}

/// Trailing-edge debounce: a change fires once no event has arrived for
/// `window`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Note an event at `now`. Restarts the quiet window.
    pub fn record(&mut self, now: Instant) {
        self.pending = Some(now);
    }

    /// How long to wait before the pending change is due, or `None` when
    /// nothing is pending.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|last| self.window.saturating_sub(now.saturating_duration_since(last)))
    }

    /// Whether the pending change is due at `now`. Clears it when it is.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(last) if now.saturating_duration_since(last) >= self.window => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

/// Whether `event` is a write to the file named `file_name`.
#[must_use]
pub fn is_relevant(event: &Event, file_name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name))
}

/// Watch `path` on a background thread, calling `on_change` after each
/// debounced write.
///
/// # Errors
///
/// Returns a [`WatchError`] if `path` has no file name or the watcher cannot
/// be registered. Failures after startup are logged and end the thread.
pub fn spawn_watcher<F>(path: &Path, on_change: F) -> Result<JoinHandle<()>, WatchError>
where
    F: Fn() + Send + 'static,
{
    let file_name: OsString = path
        .file_name()
        .ok_or_else(|| WatchError::NoFileName(path.to_path_buf()))?
        .to_owned();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    debug!(dir = %dir.display(), file = ?file_name, "watching catalog");

    Ok(thread::spawn(move || {
        // Dropping the watcher stops event delivery, so it lives with the loop.
        let _watcher = watcher;
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        loop {
            let received = match debouncer.remaining(Instant::now()) {
                Some(wait) => rx.recv_timeout(wait),
                None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(Ok(event)) if is_relevant(&event, &file_name) => {
                    debouncer.record(Instant::now());
                }
                Ok(Ok(_)) | Err(RecvTimeoutError::Timeout) => {}
                Ok(Err(error)) => warn!(%error, "file watcher error"),
                Err(RecvTimeoutError::Disconnected) => break,
            }
            if debouncer.fire(Instant::now()) {
                on_change();
            }
        }
    }))
}
