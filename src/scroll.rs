//! Wheel scroll deltas.

use crate::config::DEFAULT_LINES_PER_SCROLL;
use crate::event::{Button, EventType, MouseEvent};

/// Converts wheel events into signed line deltas.
///
/// Negative deltas scroll up (towards the start of the content).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollCalculator {
    lines_per_scroll: i32,
}

impl ScrollCalculator {
    /// Create a new calculator. A value `<= 0` falls back to 3 lines.
    pub fn new(lines_per_scroll: i32) -> Self {
        let lines_per_scroll = if lines_per_scroll <= 0 {
            DEFAULT_LINES_PER_SCROLL
        } else {
            lines_per_scroll
        };
        Self { lines_per_scroll }
    }

    /// Lines scrolled per wheel notch.
    pub fn lines_per_scroll(&self) -> i32 {
        self.lines_per_scroll
    }

    /// Signed line delta for an event; 0 for anything but a wheel scroll.
    pub fn calculate_delta(&self, event: &MouseEvent) -> i32 {
        if event.kind() != EventType::Scroll {
            return 0;
        }
        match event.button() {
            Button::WheelUp => -self.lines_per_scroll,
            Button::WheelDown => self.lines_per_scroll,
            _ => 0,
        }
    }

    /// Check if the event scrolls up.
    pub fn is_scroll_up(&self, event: &MouseEvent) -> bool {
        event.kind() == EventType::Scroll && event.button() == Button::WheelUp
    }

    /// Check if the event scrolls down.
    pub fn is_scroll_down(&self, event: &MouseEvent) -> bool {
        event.kind() == EventType::Scroll && event.button() == Button::WheelDown
    }
}

impl Default for ScrollCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_LINES_PER_SCROLL)
    }
}
