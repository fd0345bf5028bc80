//! Tuning knobs for event enrichment.

use crate::hover::HoverPolicy;

/// Default multi-click window in milliseconds.
pub const DEFAULT_CLICK_TIMEOUT_MS: i64 = 500;
/// Default multi-click position tolerance in cells (Manhattan).
pub const DEFAULT_CLICK_TOLERANCE: i32 = 1;
/// Default drag threshold in cells (Manhattan).
pub const DEFAULT_DRAG_THRESHOLD: i32 = 2;
/// Default lines scrolled per wheel notch.
pub const DEFAULT_LINES_PER_SCROLL: i32 = 3;

/// Configuration for [`crate::MouseHandler`] and [`crate::EventProcessor`].
///
/// Values are not validated here. Each component replaces out-of-range
/// values with its default when it is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseConfig {
    /// Maximum time between releases that still counts as a multi-click.
    pub click_timeout_ms: i64,
    /// Maximum distance between releases that still counts as a multi-click.
    pub click_tolerance: i32,
    /// Distance from the press at which motion becomes a drag.
    pub drag_threshold: i32,
    /// Lines scrolled per wheel notch.
    pub lines_per_scroll: i32,
    /// How hover switches between overlapping components are reported.
    pub hover_policy: HoverPolicy,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            click_timeout_ms: DEFAULT_CLICK_TIMEOUT_MS,
            click_tolerance: DEFAULT_CLICK_TOLERANCE,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            lines_per_scroll: DEFAULT_LINES_PER_SCROLL,
            hover_policy: HoverPolicy::default(),
        }
    }
}

impl MouseConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multi-click timeout.
    pub fn with_click_timeout(mut self, ms: i64) -> Self {
        self.click_timeout_ms = ms;
        self
    }

    /// Set the multi-click tolerance.
    pub fn with_click_tolerance(mut self, cells: i32) -> Self {
        self.click_tolerance = cells;
        self
    }

    /// Set the drag threshold.
    pub fn with_drag_threshold(mut self, cells: i32) -> Self {
        self.drag_threshold = cells;
        self
    }

    /// Set the lines scrolled per wheel notch.
    pub fn with_lines_per_scroll(mut self, lines: i32) -> Self {
        self.lines_per_scroll = lines;
        self
    }

    /// Set the hover switch policy.
    pub fn with_hover_policy(mut self, policy: HoverPolicy) -> Self {
        self.hover_policy = policy;
        self
    }
}
