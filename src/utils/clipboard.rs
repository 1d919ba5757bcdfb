use super::error::{AppError, Result};
use arboard::Clipboard;
use std::cell::RefCell;

/// Destination for copied prompt text.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// A clipboard connection that can take text.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl ClipboardBackend for Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        Clipboard::set_text(self, text).map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Opens a backend on first write and keeps it for every later one.
///
/// On X11 and Wayland the process owns the copied selection only while a
/// handle is alive, so the handle must outlive the write. A failed open is
/// not cached; the next write tries again.
pub struct HeldClipboard<B, F> {
    open: F,
    handle: RefCell<Option<B>>,
}

impl<B, F> HeldClipboard<B, F>
where
    B: ClipboardBackend,
    F: Fn() -> Result<B>,
{
    pub fn new(open: F) -> Self {
        Self {
            open,
            handle: RefCell::new(None),
        }
    }
}

impl<B, F> ClipboardWriter for HeldClipboard<B, F>
where
    B: ClipboardBackend,
    F: Fn() -> Result<B>,
{
    fn write_text(&self, text: &str) -> Result<()> {
        let mut handle = self
            .handle
            .try_borrow_mut()
            .map_err(|e| AppError::Clipboard(e.to_string()))?;

        if handle.is_none() {
            *handle = Some((self.open)()?);
            tracing::debug!("Clipboard handle opened");
        }

        match handle.as_mut() {
            Some(backend) => backend.set_text(text),
            None => Err(AppError::Clipboard("clipboard unavailable".to_string())),
        }
    }
}

fn open_system_clipboard() -> Result<Clipboard> {
    Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))
}

thread_local! {
    // UI events are dispatched on one thread, so this handle lives as long as the app.
    static SYSTEM_CLIPBOARD: HeldClipboard<Clipboard, fn() -> Result<Clipboard>> =
        HeldClipboard::new(open_system_clipboard as fn() -> Result<Clipboard>);
}

/// The platform clipboard, through a handle held for the life of the UI thread.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        SYSTEM_CLIPBOARD.with(|clipboard| clipboard.write_text(text))
    }
}
