use super::clipboard::ClipboardWriter;
use std::time::Duration;

/// How long the "copied" confirmation stays on a card.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Handed out by [`CopyFeedback::copy`]; only the newest ticket can clear the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
}

impl ResetTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Transient "just copied" state of one card.
///
/// `Idle` while nothing is copied, `Copied` while `copied` holds the prompt
/// text. Every copy bumps the generation so that a reset scheduled by an
/// earlier copy cannot clear a newer confirmation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    copied: Option<String>,
    generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Copied (or Copied -> Copied with a fresh generation).
    pub fn copy(&mut self, text: impl Into<String>) -> ResetTicket {
        self.generation += 1;
        self.copied = Some(text.into());
        ResetTicket {
            generation: self.generation,
        }
    }

    /// Copied -> Idle, if `ticket` belongs to the latest copy. Returns whether it cleared.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation || self.copied.is_none() {
            return false;
        }
        self.copied = None;
        true
    }

    /// Compared by value: two posts with identical text both read as copied.
    pub fn is_copied(&self, text: &str) -> bool {
        self.copied.as_deref() == Some(text)
    }
}

/// Icon shown on a copy button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyIcon {
    Copy,
    Tick,
}

impl CopyIcon {
    pub fn for_text(feedback: &CopyFeedback, text: &str) -> Self {
        if feedback.is_copied(text) {
            CopyIcon::Tick
        } else {
            CopyIcon::Copy
        }
    }

    pub fn alt(&self) -> &'static str {
        match self {
            CopyIcon::Copy => "copy_icon",
            CopyIcon::Tick => "tick_icon",
        }
    }
}

/// Write `text` to the clipboard and move `feedback` to Copied.
///
/// A failed clipboard write is logged and otherwise ignored; the confirmation
/// is shown either way.
pub fn copy_prompt(
    clipboard: &impl ClipboardWriter,
    feedback: &mut CopyFeedback,
    text: &str,
) -> ResetTicket {
    if let Err(e) = clipboard.write_text(text) {
        tracing::warn!(error = %e, "Clipboard write failed");
    }
    let ticket = feedback.copy(text);
    tracing::debug!(
        generation = ticket.generation(),
        chars = text.chars().count(),
        "Prompt copied"
    );
    ticket
}

/// Fire-and-forget reset timer: waits [`COPY_RESET_DELAY`] and hands the ticket back.
pub async fn expire_after<F>(ticket: ResetTicket, apply: F)
where
    F: FnOnce(ResetTicket),
{
    tokio::time::sleep(COPY_RESET_DELAY).await;
    apply(ticket);
}
