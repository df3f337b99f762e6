//! Per-instance curriculum page lifecycle.
//!
//! A [`CurriculumPage`] owns every piece of mutable UI state the page needs:
//! scroll progress, back-to-top visibility, the active-section tracker, and
//! the visibility subscription. State lives exactly as long as the page.
//! Mounting acquires the watcher; unmounting and track changes release it
//! before anything else happens, so callbacks from a previous page instance
//! can never land on the next one.

use crate::config::WatchConfig;
use crate::platform::{CopyOutcome, Platform, ScrollBehavior, ScrollTarget, WatcherHandle};
use crate::progress::{completion, ScrollMetrics};
use crate::spy::{SectionId, SectionTracker, VisibilityReport};
use crate::toc;

/// Scroll offset beyond which the back-to-top button becomes interactive.
pub const BACK_TO_TOP_THRESHOLD: f64 = 600.0;

/// Interaction state for one mounted curriculum page.
pub struct CurriculumPage {
    saved_title: Option<String>,
    progress: f64,
    back_to_top_visible: bool,
    tracker: SectionTracker,
    watcher: Option<WatcherHandle>,
}

impl CurriculumPage {
    /// Mounts the page for a track: remembers the previous document title,
    /// titles the document, scrolls to the top, and attaches the visibility
    /// watcher over the table-of-contents anchors.
    pub fn mount(platform: &mut dyn Platform, track_title: &str) -> Self {
        let saved_title = platform.title();
        platform.set_title(&document_title(track_title));
        platform.scroll_to(ScrollTarget::Top, ScrollBehavior::Smooth);

        let sections = toc::section_ids();
        let watcher = platform.observe_visibility(&sections, &WatchConfig::default());

        Self {
            saved_title: Some(saved_title),
            progress: 0.0,
            back_to_top_visible: false,
            tracker: SectionTracker::new(sections, toc::initial_section()),
            watcher: Some(watcher),
        }
    }

    /// Switches the page to a different track without unmounting.
    ///
    /// The old visibility subscription is released before the new one is
    /// attached; the active-section highlight carries over until the new
    /// watcher reports in.
    pub fn change_track(&mut self, platform: &mut dyn Platform, track_title: &str) {
        if let Some(handle) = self.watcher.take() {
            platform.release_visibility(handle);
        }
        platform.set_title(&document_title(track_title));
        platform.scroll_to(ScrollTarget::Top, ScrollBehavior::Smooth);
        self.watcher = Some(platform.observe_visibility(&toc::section_ids(), &WatchConfig::default()));
    }

    /// Unmounts the page, restoring the previous document title and
    /// releasing the visibility subscription.
    pub fn unmount(mut self, platform: &mut dyn Platform) {
        if let Some(handle) = self.watcher.take() {
            platform.release_visibility(handle);
        }
        if let Some(title) = self.saved_title.take() {
            platform.set_title(&title);
        }
    }

    /// Handles a scroll event: recomputes the progress percentage and the
    /// back-to-top visibility. Also invoked once right after mount with the
    /// initial metrics.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.progress = completion(metrics);
        self.back_to_top_visible = metrics.scroll_top > BACK_TO_TOP_THRESHOLD;
    }

    /// Handles a batch of visibility reports from the watcher.
    pub fn on_visibility(&mut self, reports: &[VisibilityReport]) -> SectionId {
        self.tracker.observe(reports)
    }

    /// A table-of-contents link was activated: the default jump is
    /// suppressed and the target section is scrolled to the viewport top.
    /// Re-issuing this at the target is a no-op scroll.
    pub fn anchor_click(&self, platform: &mut dyn Platform, section: SectionId) {
        platform.scroll_to(ScrollTarget::Section(section), ScrollBehavior::Smooth);
    }

    /// The back-to-top button was activated.
    pub fn back_to_top(&self, platform: &mut dyn Platform) {
        platform.scroll_to(ScrollTarget::Top, ScrollBehavior::Smooth);
    }

    /// Copies the page's full address to the clipboard, falling back to a
    /// manual-copy prompt when the capability is unavailable or denied.
    /// Either way the user sees an acknowledgment.
    pub fn copy_link(&self, platform: &mut dyn Platform) -> CopyOutcome {
        let address = platform.page_address();
        match platform.copy_to_clipboard(&address) {
            Ok(()) => {
                platform.notify_copied(&address);
                CopyOutcome::Copied
            }
            Err(_) => {
                platform.prompt_manual_copy(&address);
                CopyOutcome::ManualPrompt
            }
        }
    }

    /// Opens the print dialog for the current page.
    pub fn print(&self, platform: &mut dyn Platform) {
        platform.trigger_print();
    }

    /// Current scroll-completion percentage, in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the back-to-top button is currently interactive.
    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    /// The section currently highlighted in the table of contents.
    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }
}

/// Document title for a track's curriculum page.
pub fn document_title(track_title: &str) -> String {
    format!("{track_title} — Curriculum")
}
