//! Mouse event values.
//!
//! [`MouseEvent`] is immutable once created. Enrichment stages never mutate
//! an event in place; they derive a new one with [`MouseEvent::with_type`].

use crate::types::{now_ms, Position, Timestamp};

// ============================================================================
// Buttons
// ============================================================================

/// A mouse button, or the wheel direction for scroll events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Button {
    /// No button (motion, releases in legacy protocols, unknown codes).
    #[default]
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Wheel scrolled up.
    WheelUp,
    /// Wheel scrolled down.
    WheelDown,
}

impl Button {
    /// Check if this is a wheel direction.
    pub fn is_wheel(self) -> bool {
        matches!(self, Button::WheelUp | Button::WheelDown)
    }

    /// Check if this is a physical button (left, middle or right).
    pub fn is_button(self) -> bool {
        matches!(self, Button::Left | Button::Middle | Button::Right)
    }
}

// ============================================================================
// Modifiers
// ============================================================================

bitflags::bitflags! {
    /// Keyboard modifiers held during a mouse event.
    ///
    /// Bit values match the modifier bits of the xterm button code, so a
    /// wire code can be masked straight into this set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift was held.
        const SHIFT = 0x04;
        /// Alt (meta) was held.
        const ALT   = 0x08;
        /// Ctrl was held.
        const CTRL  = 0x10;
    }
}

// ============================================================================
// Event types
// ============================================================================

/// What happened, before or after enrichment.
///
/// Parsers only produce `Press`, `Release`, `Motion` and `Scroll`; the
/// remaining variants are synthesized by the trackers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A button went down.
    Press,
    /// A button went up.
    Release,
    /// A release promoted to a single click.
    Click,
    /// A release promoted to a double click.
    DoubleClick,
    /// A release promoted to a triple click.
    TripleClick,
    /// Motion with a button held past the drag threshold.
    Drag,
    /// Pointer motion.
    Motion,
    /// Wheel scroll.
    Scroll,
    /// The pointer entered a component.
    HoverEnter,
    /// The pointer left the hovered component.
    HoverLeave,
    /// The pointer moved within the hovered component.
    HoverMove,
}

impl EventType {
    /// Check if this is a click of any multiplicity.
    pub fn is_click(self) -> bool {
        matches!(
            self,
            EventType::Click | EventType::DoubleClick | EventType::TripleClick
        )
    }

    /// Check if this is a drag.
    pub fn is_drag(self) -> bool {
        self == EventType::Drag
    }

    /// Check if this is a scroll.
    pub fn is_scroll(self) -> bool {
        self == EventType::Scroll
    }

    /// Check if this is a hover transition.
    pub fn is_hover(self) -> bool {
        matches!(
            self,
            EventType::HoverEnter | EventType::HoverLeave | EventType::HoverMove
        )
    }
}

// ============================================================================
// Mouse event structure
// ============================================================================

/// A mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    kind: EventType,
    button: Button,
    position: Position,
    modifiers: Modifiers,
    timestamp: Timestamp,
}

impl MouseEvent {
    /// Create a new mouse event stamped with the current time.
    pub fn new(kind: EventType, button: Button, position: Position, modifiers: Modifiers) -> Self {
        Self::at(kind, button, position, modifiers, now_ms())
    }

    /// Create a new mouse event with an explicit timestamp.
    pub const fn at(
        kind: EventType,
        button: Button,
        position: Position,
        modifiers: Modifiers,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            kind,
            button,
            position,
            modifiers,
            timestamp,
        }
    }

    /// The event type.
    pub fn kind(&self) -> EventType {
        self.kind
    }

    /// The button involved.
    pub fn button(&self) -> Button {
        self.button
    }

    /// Where the event happened.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Modifiers held.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// When the event happened.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Return a copy with only the event type changed.
    pub fn with_type(&self, kind: EventType) -> Self {
        Self { kind, ..*self }
    }

    /// Return a copy with only the timestamp changed.
    pub fn with_timestamp(&self, timestamp: Timestamp) -> Self {
        Self { timestamp, ..*self }
    }
}
