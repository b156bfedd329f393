use crate::ClipboardError;

/// Write-only access to a system clipboard.
///
/// Implementations are fire-and-forget: returning `Ok` means the write was handed to the host, not
/// that the host acknowledged it.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: Clipboard + ?Sized> Clipboard for &mut T {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}
