//! # codefuture-viewport: Page interaction state for the Code the Future site
//!
//! The interactive behavior of the curriculum page (scroll progress,
//! active-section tracking, smooth anchor navigation, copy-link, back-to-top)
//! is modeled here as plain, deterministic state machines. The browser is an
//! external collaborator reached only through the [`Platform`] trait.
//!
//! ## Key Principles
//!
//! - **No IO**: nothing in this crate touches the network, disk, or a real
//!   viewport; all effects go through [`Platform`]
//! - **Per-page ownership**: every mounted page owns its own state; nothing
//!   is shared across page instances
//! - **Guaranteed release**: the visibility watcher is an explicitly
//!   closeable subscription, detached on every exit path (unmount, track
//!   change) so stale callbacks can never outlive their page
//!
//! ## Architecture
//!
//! - [`platform`]: capability traits and effect types (`scroll_to`,
//!   `copy_to_clipboard`, `observe_visibility`, ...)
//! - [`progress`]: scroll-completion percentage for the progress bar
//! - [`spy`]: active-section tracking over visibility reports
//! - [`toc`]: the curriculum table of contents, declared once
//! - [`page`]: the per-instance page lifecycle tying it all together
//! - [`config`]: the serializable configuration embedded into rendered pages

pub mod config;
pub mod page;
pub mod platform;
pub mod progress;
pub mod spy;
pub mod toc;

#[cfg(test)]
mod tests;

pub use config::{ViewportConfig, WatchConfig, WatchMargins};
pub use page::{CurriculumPage, BACK_TO_TOP_THRESHOLD};
pub use platform::{CopyError, CopyOutcome, Platform, ScrollBehavior, ScrollTarget, WatcherHandle};
pub use progress::{completion, ScrollMetrics};
pub use spy::{SectionId, SectionTracker, VisibilityReport};
