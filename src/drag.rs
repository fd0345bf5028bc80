//! Drag tracking.
//!
//! A drag starts at a press, becomes "dragging" once motion moves at least
//! the threshold (Manhattan distance) away from the press, and ends at the
//! release.

use crate::config::DEFAULT_DRAG_THRESHOLD;
use crate::event::{Button, EventType, Modifiers, MouseEvent};
use crate::types::Position;

// ============================================================================
// Drag state
// ============================================================================

/// Mutable state of an in-progress drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragState {
    active: bool,
    start: Position,
    current: Position,
    button: Button,
    modifiers: Modifiers,
    threshold: u32,
}

impl DragState {
    /// Create an inactive drag state. A threshold `<= 0` falls back to 2.
    pub fn new(threshold: i32) -> Self {
        let threshold = if threshold <= 0 {
            DEFAULT_DRAG_THRESHOLD
        } else {
            threshold
        };
        Self {
            active: false,
            start: Position::ORIGIN,
            current: Position::ORIGIN,
            button: Button::None,
            modifiers: Modifiers::empty(),
            threshold: threshold as u32,
        }
    }

    /// Begin tracking from `pos`, capturing the button and modifiers.
    pub fn start(&mut self, pos: Position, button: Button, modifiers: Modifiers) {
        self.active = true;
        self.start = pos;
        self.current = pos;
        self.button = button;
        self.modifiers = modifiers;
    }

    /// Move the current position. No-op while inactive.
    pub fn update(&mut self, pos: Position) {
        if self.active {
            self.current = pos;
        }
    }

    /// Stop tracking, keeping the captured positions for inspection.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Return to the initial inactive state.
    pub fn reset(&mut self) {
        *self = Self {
            threshold: self.threshold,
            ..Self::new(DEFAULT_DRAG_THRESHOLD)
        };
    }

    /// Check if a press is being tracked.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if the tracked press has moved past the threshold.
    pub fn is_dragging(&self) -> bool {
        self.active && self.distance() >= self.threshold
    }

    /// Distance from the start to the current position, 0 while inactive.
    pub fn distance(&self) -> u32 {
        if self.active {
            self.start.distance(self.current)
        } else {
            0
        }
    }

    /// Where the press happened.
    pub fn start_position(&self) -> Position {
        self.start
    }

    /// The latest tracked position.
    pub fn current_position(&self) -> Position {
        self.current
    }

    /// The button captured at the press.
    pub fn button(&self) -> Button {
        self.button
    }

    /// The modifiers captured at the press.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// The drag threshold in cells.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

// ============================================================================
// Drag tracker
// ============================================================================

/// Outcome of a release seen by [`DragTracker::process_release`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragRelease {
    /// Whether motion crossed the threshold before the release.
    pub was_drag: bool,
    /// Where the press happened.
    pub start: Position,
    /// Where the release happened.
    pub end: Position,
}

impl DragRelease {
    /// Result for a release with no tracked press.
    pub const NONE: DragRelease = DragRelease {
        was_drag: false,
        start: Position::ORIGIN,
        end: Position::ORIGIN,
    };
}

/// Turns press/motion/release sequences into drag events.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    /// Create a new drag tracker. A threshold `<= 0` falls back to 2.
    pub fn new(threshold: i32) -> Self {
        Self {
            state: DragState::new(threshold),
        }
    }

    /// Inspect the underlying state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if a press is being tracked.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Check if the tracked press has moved past the threshold.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Start tracking at a press. Other event types are ignored.
    ///
    /// A press while already tracking restarts from the new press.
    pub fn process_press(&mut self, event: &MouseEvent) {
        if event.kind() != EventType::Press {
            return;
        }
        self.state
            .start(event.position(), event.button(), event.modifiers());
    }

    /// Track motion, returning a `Drag` event once past the threshold.
    ///
    /// The drag event carries the button and modifiers captured at the
    /// press (motion reports often carry none) and the motion's timestamp.
    pub fn process_motion(&mut self, event: &MouseEvent) -> Option<MouseEvent> {
        if !self.state.is_active() {
            return None;
        }
        self.state.update(event.position());
        if !self.state.is_dragging() {
            return None;
        }

        let drag = MouseEvent::at(
            EventType::Drag,
            self.state.button(),
            event.position(),
            self.state.modifiers(),
            event.timestamp(),
        );
        mouse_trace!(
            TRACE_DRAG,
            "drag: distance={} {}",
            self.state.distance(),
            crate::trace::tracemouse(&drag)
        );
        Some(drag)
    }

    /// Finish the tracked press at a release.
    ///
    /// Returns [`DragRelease::NONE`] when no press is being tracked. The
    /// release position alone never makes the cycle a drag.
    pub fn process_release(&mut self, event: &MouseEvent) -> DragRelease {
        if !self.state.is_active() {
            return DragRelease::NONE;
        }
        // only motion can turn a press into a drag
        let was_drag = self.state.is_dragging();
        self.state.update(event.position());
        let result = DragRelease {
            was_drag,
            start: self.state.start_position(),
            end: self.state.current_position(),
        };
        self.state.end();
        result
    }

    /// Drop any tracked press.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
