//! Single/double/triple click detection.
//!
//! [`ClickDetector`] promotes `Release` events into `Click`, `DoubleClick`
//! or `TripleClick`. There is no timer: the timeout is checked lazily when
//! the next release arrives, so the first click of a sequence is reported
//! immediately and a later, close enough release supersedes it with a
//! higher multiplicity.

use crate::config::{DEFAULT_CLICK_TIMEOUT_MS, DEFAULT_CLICK_TOLERANCE};
use crate::event::{EventType, MouseEvent};

/// Highest multiplicity before a sequence starts over.
const MAX_CLICK_COUNT: u8 = 3;

/// Click detector for a single input stream.
#[derive(Clone, Debug)]
pub struct ClickDetector {
    /// The last promoted click, owned by the detector.
    last_click: Option<MouseEvent>,
    /// Number of consecutive clicks (0 before any click, then 1..=3).
    click_count: u8,
    /// Multi-click window in milliseconds.
    timeout_ms: u64,
    /// Multi-click position tolerance in cells.
    tolerance: i32,
}

impl ClickDetector {
    /// Create a new click detector.
    ///
    /// A timeout `<= 0` falls back to 500ms and a negative tolerance falls
    /// back to 1 cell.
    pub fn new(timeout_ms: i64, tolerance: i32) -> Self {
        let timeout_ms = if timeout_ms <= 0 {
            DEFAULT_CLICK_TIMEOUT_MS
        } else {
            timeout_ms
        };
        let tolerance = if tolerance < 0 {
            DEFAULT_CLICK_TOLERANCE
        } else {
            tolerance
        };
        Self {
            last_click: None,
            click_count: 0,
            timeout_ms: timeout_ms as u64,
            tolerance,
        }
    }

    /// The effective timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// The effective tolerance in cells.
    pub fn tolerance(&self) -> i32 {
        self.tolerance
    }

    /// Number of clicks in the current sequence.
    pub fn click_count(&self) -> u8 {
        self.click_count
    }

    /// The last promoted click, if any.
    pub fn last_click(&self) -> Option<&MouseEvent> {
        self.last_click.as_ref()
    }

    /// Record a release and return it promoted to a click type.
    ///
    /// Returns `None`, leaving the state untouched, for anything that is not
    /// a `Release`.
    pub fn detect_click(&mut self, event: &MouseEvent) -> Option<MouseEvent> {
        if event.kind() != EventType::Release {
            return None;
        }

        let is_consecutive = self.last_click.as_ref().is_some_and(|last| {
            let elapsed = event.timestamp().saturating_sub(last.timestamp());
            elapsed <= self.timeout_ms
                && event
                    .position()
                    .within_tolerance(last.position(), self.tolerance)
                && event.button() == last.button()
        });

        self.click_count = if is_consecutive {
            self.click_count + 1
        } else {
            1
        };
        if self.click_count > MAX_CLICK_COUNT {
            self.click_count = 1;
        }

        let kind = match self.click_count {
            2 => EventType::DoubleClick,
            3 => EventType::TripleClick,
            _ => EventType::Click,
        };
        let promoted = event.with_type(kind);
        self.last_click = Some(promoted);

        mouse_trace!(
            TRACE_CLICK,
            "click: count={} {}",
            self.click_count,
            crate::trace::tracemouse(&promoted)
        );
        Some(promoted)
    }

    /// Forget the click history.
    pub fn reset(&mut self) {
        self.last_click = None;
        self.click_count = 0;
    }
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_TIMEOUT_MS, DEFAULT_CLICK_TOLERANCE)
    }
}
