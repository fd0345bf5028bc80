//! Hover tracking over component regions.
//!
//! The caller passes the current component layout on every update; the
//! tracker only remembers which component (by id) is hovered. When regions
//! overlap, the first matching area in the list wins. Areas with an empty
//! id never match.

use crate::event::EventType;
use crate::types::{now_ms, BoundingBox, Position, Timestamp};

/// How a move straight from one component into another is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverPolicy {
    /// Report only `HoverEnter` for the new component.
    #[default]
    Collapse,
    /// Report `HoverLeave` for the old component, then `HoverEnter` for the new one.
    Paired,
}

/// A hoverable region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentArea {
    /// Component identifier. An empty id marks the area as not hoverable.
    pub id: String,
    /// Screen region covered by the component.
    pub bounds: BoundingBox,
}

impl ComponentArea {
    /// Create a new component area.
    pub fn new(id: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// One hover transition produced by [`HoverTracker::transitions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverTransition {
    /// `HoverEnter`, `HoverLeave`, `HoverMove`, or `Motion` when nothing is hovered.
    pub kind: EventType,
    /// The component entered, left or moved within.
    pub component: Option<String>,
}

impl HoverTransition {
    fn new(kind: EventType, component: Option<&str>) -> Self {
        Self {
            kind,
            component: component.map(str::to_owned),
        }
    }
}

// ============================================================================
// Hover state
// ============================================================================

/// Which component is hovered, and where.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    /// Hovered component id; empty when nothing is hovered.
    component_id: String,
    position: Position,
    last_update: Timestamp,
    is_active: bool,
}

impl HoverState {
    /// Create an idle hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start hovering `component_id` at `pos`.
    ///
    /// An empty id means no component, so this leaves instead.
    pub fn enter(&mut self, component_id: &str, pos: Position, timestamp: Timestamp) {
        if component_id.is_empty() {
            self.leave(timestamp);
            return;
        }
        self.component_id.clear();
        self.component_id.push_str(component_id);
        self.position = pos;
        self.last_update = timestamp;
        self.is_active = true;
    }

    /// Move within the hovered component. No-op while idle.
    pub fn move_to(&mut self, pos: Position, timestamp: Timestamp) {
        if self.is_active {
            self.position = pos;
            self.last_update = timestamp;
        }
    }

    /// Stop hovering. No-op while idle.
    pub fn leave(&mut self, timestamp: Timestamp) {
        if self.is_active {
            self.component_id.clear();
            self.is_active = false;
            self.last_update = timestamp;
        }
    }

    /// Return to the idle state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if a component is hovered.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The hovered component id, if any.
    pub fn component_id(&self) -> Option<&str> {
        if self.is_active {
            Some(&self.component_id)
        } else {
            None
        }
    }

    /// Last hovered position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// When the state last changed.
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }
}

// ============================================================================
// Hover tracker
// ============================================================================

/// Turns pointer positions into hover enter/move/leave transitions.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    state: HoverState,
    policy: HoverPolicy,
}

impl HoverTracker {
    /// Create a new hover tracker.
    pub fn new(policy: HoverPolicy) -> Self {
        Self {
            state: HoverState::new(),
            policy,
        }
    }

    /// The policy for component switches.
    pub fn policy(&self) -> HoverPolicy {
        self.policy
    }

    /// Inspect the underlying state.
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Check if a component is hovered.
    pub fn is_hovering(&self) -> bool {
        self.state.is_active()
    }

    /// The hovered component id, if any.
    pub fn current_component(&self) -> Option<&str> {
        self.state.component_id()
    }

    /// Update with a new pointer position and return the resulting event type.
    ///
    /// When a switch produces several transitions, the last one is returned.
    pub fn update(&mut self, pos: Position, areas: &[ComponentArea]) -> EventType {
        self.transitions(pos, areas, now_ms())
            .last()
            .map_or(EventType::Motion, |t| t.kind)
    }

    /// Update with a new pointer position and return every transition.
    ///
    /// The result is never empty: with nothing hovered before or after, it
    /// holds a single `Motion` transition.
    pub fn transitions(
        &mut self,
        pos: Position,
        areas: &[ComponentArea],
        timestamp: Timestamp,
    ) -> Vec<HoverTransition> {
        let hit = areas
            .iter()
            .find(|area| !area.id.is_empty() && area.bounds.contains(pos));

        let transitions = match (hit, self.state.component_id()) {
            (Some(area), Some(current)) if area.id == current => {
                self.state.move_to(pos, timestamp);
                vec![HoverTransition::new(EventType::HoverMove, Some(&area.id))]
            }
            (Some(area), previous) => {
                let mut out = Vec::with_capacity(2);
                if let (Some(old), HoverPolicy::Paired) = (previous, self.policy) {
                    out.push(HoverTransition::new(EventType::HoverLeave, Some(old)));
                }
                out.push(HoverTransition::new(EventType::HoverEnter, Some(&area.id)));
                self.state.enter(&area.id, pos, timestamp);
                out
            }
            (None, Some(old)) => {
                let leave = HoverTransition::new(EventType::HoverLeave, Some(old));
                self.state.leave(timestamp);
                vec![leave]
            }
            (None, None) => vec![HoverTransition::new(EventType::Motion, None)],
        };

        mouse_trace!(
            TRACE_HOVER,
            "hover: ({}, {}) -> {:?}",
            pos.x,
            pos.y,
            transitions
        );
        transitions
    }

    /// Forget the hovered component.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
