use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Lazily opened handle to the system clipboard.
///
/// The handle is kept for the life of the app; on X11 the copied text
/// disappears once its owner is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard.set_text(text.to_string())?;
        }
        tracing::debug!(len = text.len(), "copied to clipboard");
        Ok(())
    }
}
