//! Scroll-completion percentage for the fixed progress indicator.

/// A single scroll measurement reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub scroll_top: f64,
    /// Total document height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub client_height: f64,
}

/// How far through the document the viewport has scrolled, as a percentage
/// clamped to `[0, 100]`.
///
/// When the document does not scroll at all (`scroll_height <=
/// client_height`) the result is 0, never NaN.
pub fn completion(metrics: ScrollMetrics) -> f64 {
    let max = metrics.scroll_height - metrics.client_height;
    if max > 0.0 {
        ((metrics.scroll_top / max) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
