//! Serializable viewport configuration.
//!
//! One source of truth for the numbers that drive both the Rust page model
//! and the client script: the site embeds a [`ViewportConfig`] as JSON into
//! the rendered curriculum page, and `public/js/viewport.js` reads it back.

use serde::Serialize;

use crate::page::BACK_TO_TOP_THRESHOLD;
use crate::toc;

/// Margins applied to the viewport before intersection is computed, in
/// percent of viewport height. Negative values shrink the observed region.
///
/// The defaults bias activation toward the upper-middle band of the
/// viewport: a section counts as active once it enters the region between
/// 20% from the top and 60% from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchMargins {
    pub top_pct: f64,
    pub bottom_pct: f64,
}

impl Default for WatchMargins {
    fn default() -> Self {
        Self { top_pct: -20.0, bottom_pct: -60.0 }
    }
}

/// Configuration for one visibility subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchConfig {
    pub margins: WatchMargins,
    /// Intersection ratios at which reports are delivered.
    pub thresholds: Vec<f64>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            margins: WatchMargins::default(),
            thresholds: vec![0.0, 0.5, 1.0],
        }
    }
}

/// Everything the client script needs to mirror the page model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportConfig {
    pub watch: WatchConfig,
    pub back_to_top_threshold: f64,
    /// Section anchor ids in table-of-contents order.
    pub sections: Vec<&'static str>,
}

impl ViewportConfig {
    /// Builds the configuration for the curriculum page.
    pub fn curriculum() -> Self {
        Self {
            watch: WatchConfig::default(),
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            sections: toc::TOC.iter().map(|entry| entry.id.as_str()).collect(),
        }
    }
}
