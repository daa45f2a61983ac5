//! Clipboard export and the copy button's status label.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::BriefError;

/// How long the status label shows the copy result.
pub const STATUS_FLASH: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access failed: {0}")]
    Access(#[from] arboard::Error),

    #[error("clipboard task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Denied(String),
}

impl From<ClipboardError> for BriefError {
    fn from(e: ClipboardError) -> Self {
        BriefError::ClipboardUnavailable(e.to_string())
    }
}

/// Somewhere to put the rendered brief.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
///
/// Each write opens a fresh handle on a blocking thread; the platform layer
/// hands the contents to the clipboard manager when the handle drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text)?;
            Ok::<_, ClipboardError>(())
        })
        .await?
    }
}

/// An in-process clipboard. Can be told to refuse writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    denied: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `reason`.
    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            contents: Arc::default(),
            denied: Some(reason.into()),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard lock poisoned").clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(ref reason) = self.denied {
            return Err(ClipboardError::Denied(reason.clone()));
        }
        *self.contents.lock().expect("clipboard lock poisoned") = Some(text.to_string());
        Ok(())
    }
}

/// A label that can briefly show a message before going back to its idle text.
///
/// Changes are published on a watch channel so a surface can redraw them.
#[derive(Debug, Clone)]
pub struct StatusLabel {
    idle: String,
    text: Arc<watch::Sender<String>>,
}

impl StatusLabel {
    pub fn new(idle: impl Into<String>) -> Self {
        let idle = idle.into();
        let (text, _) = watch::channel(idle.clone());
        Self {
            idle,
            text: Arc::new(text),
        }
    }

    pub fn text(&self) -> String {
        String::clone(&self.text.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.subscribe()
    }

    /// Show `message` for `duration`, then revert to the idle text.
    ///
    /// Always reverts to the idle text, even when flashes overlap.
    pub fn flash(&self, message: impl Into<String>, duration: Duration) -> JoinHandle<()> {
        self.text.send_replace(message.into());
        let text = Arc::clone(&self.text);
        let idle = self.idle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            text.send_replace(idle);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_clipboard_stores_text() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("{}").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn denied_clipboard_keeps_nothing() {
        let clipboard = MemoryClipboard::denied("permission denied");
        let err = clipboard.write_text("{}").await.unwrap_err();
        assert_eq!(err.to_string(), "permission denied");
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn clipboard_error_becomes_unavailable() {
        let err: BriefError = ClipboardError::Denied("no display".to_string()).into();
        assert_eq!(err, BriefError::ClipboardUnavailable("no display".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn flash_reverts_after_duration() {
        let label = StatusLabel::new("idle");
        let handle = label.flash("done", STATUS_FLASH);
        assert_eq!(label.text(), "done");

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(label.text(), "done");

        handle.await.unwrap();
        assert_eq!(label.text(), "idle");
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_each_change() {
        let label = StatusLabel::new("idle");
        let mut rx = label.subscribe();
        let _revert = label.flash("done", STATUS_FLASH);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "done");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "idle");
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_flashes_end_idle() {
        let label = StatusLabel::new("idle");
        let first = label.flash("one", STATUS_FLASH);
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = label.flash("two", STATUS_FLASH);

        first.await.unwrap();
        assert_eq!(label.text(), "idle");
        second.await.unwrap();
        assert_eq!(label.text(), "idle");
    }
}
