//! Browser capabilities as abstract collaborators.
//!
//! The page logic never talks to a real viewport. It asks a [`Platform`] for
//! the handful of capabilities it needs; the site's client script provides
//! them in a browser, and the test double in `tests` records them.

use thiserror::Error;

use crate::config::WatchConfig;
use crate::spy::SectionId;

/// Where a scroll request should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The top of the document.
    Top,
    /// A named section, its top edge aligned with the viewport's top edge.
    Section(SectionId),
}

/// How the viewport should move to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Why a clipboard write did not happen.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The platform exposes no clipboard at all.
    #[error("clipboard capability unavailable")]
    Unavailable,
    /// The user (or platform policy) refused the write.
    #[error("clipboard permission denied")]
    Denied,
}

/// Outcome of a copy-link request. Both variants end in a user-visible
/// acknowledgment; there is no silent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The address reached the clipboard and a confirmation was shown.
    Copied,
    /// The clipboard was unavailable or denied; the address was presented
    /// in a manual-copy prompt instead.
    ManualPrompt,
}

/// Identity of an active visibility subscription.
///
/// The handle carries identity only. Release goes back through
/// [`Platform::release_visibility`] so the owning page controls teardown on
/// every exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatcherHandle(u64);

impl WatcherHandle {
    /// Creates a handle from a raw subscription id.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw subscription id.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// The capabilities a page needs from its host.
///
/// `{set_title, copy_to_clipboard, trigger_print, scroll_to,
/// observe_visibility}` plus the two acknowledgment surfaces for the copy
/// action. Which platform provides them is out of scope here.
pub trait Platform {
    /// Current document title.
    fn title(&self) -> String;

    /// Replaces the document title.
    fn set_title(&mut self, title: &str);

    /// Full address of the page currently displayed.
    fn page_address(&self) -> String;

    /// Writes `text` to the system clipboard.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), CopyError>;

    /// Shows a confirmation notice that `address` was copied.
    fn notify_copied(&mut self, address: &str);

    /// Presents `address` in a prompt the user can copy from manually.
    fn prompt_manual_copy(&mut self, address: &str);

    /// Opens the platform print dialog for the current page.
    fn trigger_print(&mut self);

    /// Moves the viewport to `target`.
    fn scroll_to(&mut self, target: ScrollTarget, behavior: ScrollBehavior);

    /// Starts watching the given section anchors for viewport intersection.
    ///
    /// Reports flow back through [`crate::page::CurriculumPage::on_visibility`].
    /// The returned handle must eventually be passed to
    /// [`Platform::release_visibility`].
    fn observe_visibility(&mut self, sections: &[SectionId], config: &WatchConfig) -> WatcherHandle;

    /// Stops a visibility subscription. No callbacks for `handle` may be
    /// delivered after this returns.
    fn release_visibility(&mut self, handle: WatcherHandle);
}
