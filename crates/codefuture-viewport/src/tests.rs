//! Unit tests for the viewport interaction state.

use crate::config::{ViewportConfig, WatchConfig};
use crate::page::{document_title, CurriculumPage, BACK_TO_TOP_THRESHOLD};
use crate::platform::{CopyError, CopyOutcome, Platform, ScrollBehavior, ScrollTarget, WatcherHandle};
use crate::progress::{completion, ScrollMetrics};
use crate::spy::{SectionId, SectionTracker, VisibilityReport};
use crate::toc;

// ============================================================================
// Test Platform
// ============================================================================

/// Everything a page asked its platform to do, in order.
#[derive(Debug, Clone, PartialEq)]
enum Effect {
    TitleSet(String),
    Scrolled(ScrollTarget, ScrollBehavior),
    ClipboardWrite(String),
    CopyNotice(String),
    ManualPrompt(String),
    Printed,
    WatcherAttached(u64),
    WatcherReleased(u64),
}

struct FakeViewport {
    title: String,
    address: String,
    clipboard_works: bool,
    next_watcher: u64,
    effects: Vec<Effect>,
}

impl FakeViewport {
    fn new(address: &str) -> Self {
        Self {
            title: "Code the Future".to_string(),
            address: address.to_string(),
            clipboard_works: true,
            next_watcher: 1,
            effects: Vec::new(),
        }
    }

    fn without_clipboard(address: &str) -> Self {
        let mut platform = Self::new(address);
        platform.clipboard_works = false;
        platform
    }
}

impl Platform for FakeViewport {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.effects.push(Effect::TitleSet(title.to_string()));
    }

    fn page_address(&self) -> String {
        self.address.clone()
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), CopyError> {
        if self.clipboard_works {
            self.effects.push(Effect::ClipboardWrite(text.to_string()));
            Ok(())
        } else {
            Err(CopyError::Denied)
        }
    }

    fn notify_copied(&mut self, address: &str) {
        self.effects.push(Effect::CopyNotice(address.to_string()));
    }

    fn prompt_manual_copy(&mut self, address: &str) {
        self.effects.push(Effect::ManualPrompt(address.to_string()));
    }

    fn trigger_print(&mut self) {
        self.effects.push(Effect::Printed);
    }

    fn scroll_to(&mut self, target: ScrollTarget, behavior: ScrollBehavior) {
        self.effects.push(Effect::Scrolled(target, behavior));
    }

    fn observe_visibility(&mut self, _sections: &[SectionId], _config: &WatchConfig) -> WatcherHandle {
        let id = self.next_watcher;
        self.next_watcher += 1;
        self.effects.push(Effect::WatcherAttached(id));
        WatcherHandle::from_raw(id)
    }

    fn release_visibility(&mut self, handle: WatcherHandle) {
        self.effects.push(Effect::WatcherReleased(handle.as_raw()));
    }
}

fn metrics(scroll_top: f64, scroll_height: f64, client_height: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_top, scroll_height, client_height }
}

fn report(id: &'static str, intersecting: bool, ratio: f64) -> VisibilityReport {
    VisibilityReport { section: SectionId::new(id), intersecting, ratio }
}

// ============================================================================
// Scroll Progress Tests
// ============================================================================

#[test]
fn progress_at_top_is_zero() {
    assert_eq!(completion(metrics(0.0, 3000.0, 800.0)), 0.0);
}

#[test]
fn progress_at_bottom_is_one_hundred() {
    assert_eq!(completion(metrics(2200.0, 3000.0, 800.0)), 100.0);
}

#[test]
fn progress_midway() {
    assert_eq!(completion(metrics(1100.0, 3000.0, 800.0)), 50.0);
}

#[test]
fn progress_clamps_overscroll() {
    // Rubber-band overscroll can report an offset past the maximum.
    assert_eq!(completion(metrics(2500.0, 3000.0, 800.0)), 100.0);
    assert_eq!(completion(metrics(-40.0, 3000.0, 800.0)), 0.0);
}

#[test]
fn progress_handles_unscrollable_document() {
    // scroll height == viewport height: expect 0, not NaN or a panic
    let value = completion(metrics(0.0, 800.0, 800.0));
    assert_eq!(value, 0.0);

    let value = completion(metrics(0.0, 500.0, 800.0));
    assert_eq!(value, 0.0);
}

// ============================================================================
// Section Tracker Tests
// ============================================================================

#[test]
fn tracker_starts_on_first_section() {
    let tracker = SectionTracker::new(toc::section_ids(), toc::initial_section());
    assert_eq!(tracker.active().as_str(), "overview");
}

#[test]
fn most_visible_section_wins() {
    let mut tracker = SectionTracker::new(toc::section_ids(), toc::initial_section());

    let active = tracker.observe(&[
        report("outcomes", true, 0.5),
        report("projects", true, 1.0),
        report("outline", true, 0.25),
    ]);

    assert_eq!(active.as_str(), "projects");
}

#[test]
fn equal_ratios_resolve_in_toc_order() {
    let mut tracker = SectionTracker::new(toc::section_ids(), toc::initial_section());

    // "projects" precedes "safety" in the table of contents, regardless of
    // report order.
    let active = tracker.observe(&[
        report("safety", true, 0.5),
        report("projects", true, 0.5),
    ]);

    assert_eq!(active.as_str(), "projects");
}

#[test]
fn empty_batch_keeps_previous_section() {
    let mut tracker = SectionTracker::new(toc::section_ids(), toc::initial_section());
    tracker.observe(&[report("ops", true, 1.0)]);

    let active = tracker.observe(&[
        report("ops", false, 0.0),
        report("outline", false, 0.0),
    ]);

    assert_eq!(active.as_str(), "ops");
}

#[test]
fn active_section_is_never_unset() {
    let mut tracker = SectionTracker::new(toc::section_ids(), toc::initial_section());

    // Scrolling through the page and back: every observation leaves a valid
    // section highlighted.
    let batches: &[&[VisibilityReport]] = &[
        &[report("overview", true, 1.0)],
        &[report("outcomes", true, 0.8), report("overview", true, 0.2)],
        &[],
        &[report("outcomes", false, 0.0)],
    ];

    for batch in batches {
        let active = tracker.observe(batch);
        assert!(toc::section_ids().contains(&active));
    }
    assert_eq!(tracker.active().as_str(), "outcomes");
}

#[test]
fn unknown_sections_are_ignored() {
    let mut tracker = SectionTracker::new(toc::section_ids(), toc::initial_section());

    let active = tracker.observe(&[
        report("sidebar-ad", true, 1.0),
        report("outline", true, 0.3),
    ]);

    assert_eq!(active.as_str(), "outline");
}

// ============================================================================
// Page Lifecycle Tests
// ============================================================================

#[test]
fn mount_titles_document_and_attaches_watcher() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-7-10");
    let page = CurriculumPage::mount(&mut platform, "Python Starter");

    assert_eq!(platform.title, "Python Starter — Curriculum");
    assert_eq!(page.active_section().as_str(), "overview");
    assert_eq!(page.progress(), 0.0);
    assert!(platform.effects.contains(&Effect::WatcherAttached(1)));
    assert!(platform
        .effects
        .contains(&Effect::Scrolled(ScrollTarget::Top, ScrollBehavior::Smooth)));
}

#[test]
fn unmount_restores_title_and_releases_watcher() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-7-10");
    let page = CurriculumPage::mount(&mut platform, "Python Starter");
    page.unmount(&mut platform);

    assert_eq!(platform.title, "Code the Future");
    assert!(platform.effects.contains(&Effect::WatcherReleased(1)));
}

#[test]
fn track_change_releases_old_watcher_before_attaching_new() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-7-10");
    let mut page = CurriculumPage::mount(&mut platform, "Python Starter");

    page.change_track(&mut platform, "Python Pro Track");

    let released_at = platform
        .effects
        .iter()
        .position(|e| *e == Effect::WatcherReleased(1))
        .expect("first watcher released");
    let attached_at = platform
        .effects
        .iter()
        .position(|e| *e == Effect::WatcherAttached(2))
        .expect("second watcher attached");
    assert!(released_at < attached_at, "stale watcher must detach first");

    assert_eq!(platform.title, "Python Pro Track — Curriculum");
}

#[test]
fn track_change_keeps_highlight_until_new_reports_arrive() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-7-10");
    let mut page = CurriculumPage::mount(&mut platform, "Python Starter");
    page.on_visibility(&[report("fast8", true, 1.0)]);

    page.change_track(&mut platform, "Python Foundations");
    assert_eq!(page.active_section().as_str(), "fast8");

    page.on_visibility(&[report("overview", true, 1.0)]);
    assert_eq!(page.active_section().as_str(), "overview");
}

#[test]
fn scroll_updates_progress_and_back_to_top() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-11-14");
    let mut page = CurriculumPage::mount(&mut platform, "Python Foundations");

    page.on_scroll(metrics(0.0, 4000.0, 800.0));
    assert!(!page.back_to_top_visible());

    page.on_scroll(metrics(599.0, 4000.0, 800.0));
    assert!(!page.back_to_top_visible());

    page.on_scroll(metrics(601.0, 4000.0, 800.0));
    assert!(page.back_to_top_visible());
    assert!(page.progress() > 0.0 && page.progress() <= 100.0);
}

#[test]
fn back_to_top_threshold_is_exclusive() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-11-14");
    let mut page = CurriculumPage::mount(&mut platform, "Python Foundations");

    page.on_scroll(metrics(BACK_TO_TOP_THRESHOLD, 4000.0, 800.0));
    assert!(!page.back_to_top_visible());
}

#[test]
fn anchor_click_scrolls_section_to_top_edge() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-11-14");
    let page = CurriculumPage::mount(&mut platform, "Python Foundations");

    page.anchor_click(&mut platform, SectionId::new("next"));

    assert_eq!(
        platform.effects.last(),
        Some(&Effect::Scrolled(
            ScrollTarget::Section(SectionId::new("next")),
            ScrollBehavior::Smooth
        ))
    );
}

#[test]
fn print_goes_through_platform() {
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-11-14");
    let page = CurriculumPage::mount(&mut platform, "Python Foundations");

    page.print(&mut platform);
    assert!(platform.effects.contains(&Effect::Printed));
}

// ============================================================================
// Copy Link Tests
// ============================================================================

#[test]
fn copy_link_confirms_with_full_address() {
    let address = "https://example.com/curriculum/python-15-18";
    let mut platform = FakeViewport::new(address);
    let page = CurriculumPage::mount(&mut platform, "Python Pro Track");

    let outcome = page.copy_link(&mut platform);

    assert_eq!(outcome, CopyOutcome::Copied);
    assert!(platform.effects.contains(&Effect::ClipboardWrite(address.to_string())));
    assert!(platform.effects.contains(&Effect::CopyNotice(address.to_string())));
}

#[test]
fn copy_link_falls_back_to_manual_prompt() {
    let address = "https://example.com/curriculum/python-15-18";
    let mut platform = FakeViewport::without_clipboard(address);
    let page = CurriculumPage::mount(&mut platform, "Python Pro Track");

    let outcome = page.copy_link(&mut platform);

    assert_eq!(outcome, CopyOutcome::ManualPrompt);
    assert!(platform.effects.contains(&Effect::ManualPrompt(address.to_string())));
    assert!(!platform
        .effects
        .iter()
        .any(|e| matches!(e, Effect::ClipboardWrite(_))));
}

// ============================================================================
// Navigation End-to-End
// ============================================================================

#[test]
fn navigating_between_tracks_never_overlaps_watchers() {
    // /curriculum/python-7-10 -> /curriculum/python-15-18 as separate page
    // instances: the first page's watcher is fully detached before the
    // second page's watcher attaches.
    let mut platform = FakeViewport::new("https://example.com/curriculum/python-7-10");

    let first = CurriculumPage::mount(&mut platform, "Python Starter");
    first.unmount(&mut platform);

    platform.address = "https://example.com/curriculum/python-15-18".to_string();
    let second = CurriculumPage::mount(&mut platform, "Python Pro Track");

    let watcher_log: Vec<&Effect> = platform
        .effects
        .iter()
        .filter(|e| matches!(e, Effect::WatcherAttached(_) | Effect::WatcherReleased(_)))
        .collect();
    assert_eq!(
        watcher_log,
        vec![
            &Effect::WatcherAttached(1),
            &Effect::WatcherReleased(1),
            &Effect::WatcherAttached(2),
        ]
    );

    second.unmount(&mut platform);
    assert_eq!(platform.title, "Code the Future");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn document_title_carries_track_name() {
    assert_eq!(document_title("Python Starter"), "Python Starter — Curriculum");
}

#[test]
fn curriculum_config_matches_page_model() {
    let config = ViewportConfig::curriculum();

    assert_eq!(config.back_to_top_threshold, BACK_TO_TOP_THRESHOLD);
    assert_eq!(config.watch.margins.top_pct, -20.0);
    assert_eq!(config.watch.margins.bottom_pct, -60.0);
    assert_eq!(config.watch.thresholds, vec![0.0, 0.5, 1.0]);
    assert_eq!(config.sections.len(), toc::TOC.len());
    assert_eq!(config.sections[0], "overview");
}
