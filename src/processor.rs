//! Event enrichment pipeline.
//!
//! [`EventProcessor`] owns one click detector, drag tracker and hover
//! tracker and routes each parsed event through them:
//!
//! | input     | output                                                  |
//! |-----------|---------------------------------------------------------|
//! | `Press`   | the press (drag tracking starts)                        |
//! | `Release` | `[click, release]`, or `[release]` if it ended a drag    |
//! | `Motion`  | a `Drag` event past the threshold, else the motion      |
//! | other     | passed through unchanged                                |
//!
//! Hover is a separate entry point, [`EventProcessor::process_hover`],
//! because it needs the current component layout.

use crate::click::ClickDetector;
use crate::config::MouseConfig;
use crate::drag::DragTracker;
use crate::event::{EventType, MouseEvent};
use crate::hover::{ComponentArea, HoverTracker, HoverTransition};
use crate::types::{Position, Timestamp};

/// Stateful enrichment of a single mouse event stream.
#[derive(Clone, Debug, Default)]
pub struct EventProcessor {
    click: ClickDetector,
    drag: DragTracker,
    hover: HoverTracker,
}

impl EventProcessor {
    /// Create a processor from a configuration.
    pub fn new(config: &MouseConfig) -> Self {
        Self {
            click: ClickDetector::new(config.click_timeout_ms, config.click_tolerance),
            drag: DragTracker::new(config.drag_threshold),
            hover: HoverTracker::new(config.hover_policy),
        }
    }

    /// Route one event through the trackers, returning the enriched events.
    pub fn process(&mut self, event: MouseEvent) -> Vec<MouseEvent> {
        match event.kind() {
            EventType::Press => {
                self.drag.process_press(&event);
                vec![event]
            }
            EventType::Release => {
                let release = self.drag.process_release(&event);
                if release.was_drag {
                    // a drag and a click never share a press/release cycle
                    return vec![event];
                }
                match self.click.detect_click(&event) {
                    Some(click) => vec![click, event],
                    None => vec![event],
                }
            }
            EventType::Motion => match self.drag.process_motion(&event) {
                Some(drag) => vec![drag],
                None => vec![event],
            },
            _ => vec![event],
        }
    }

    /// Update hover state for `pos` against the current component layout.
    pub fn process_hover(&mut self, pos: Position, areas: &[ComponentArea]) -> EventType {
        self.hover.update(pos, areas)
    }

    /// Like [`process_hover`](Self::process_hover) but returns every
    /// transition, with an explicit timestamp.
    pub fn process_hover_transitions(
        &mut self,
        pos: Position,
        areas: &[ComponentArea],
        timestamp: Timestamp,
    ) -> Vec<HoverTransition> {
        self.hover.transitions(pos, areas, timestamp)
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Number of clicks in the current multi-click sequence.
    pub fn click_count(&self) -> u8 {
        self.click.click_count()
    }

    /// Check if a component is hovered.
    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }

    /// The hovered component id, if any.
    pub fn current_hover_component(&self) -> Option<&str> {
        self.hover.current_component()
    }

    /// The click detector.
    pub fn click_detector(&self) -> &ClickDetector {
        &self.click
    }

    /// The drag tracker.
    pub fn drag_tracker(&self) -> &DragTracker {
        &self.drag
    }

    /// The hover tracker.
    pub fn hover_tracker(&self) -> &HoverTracker {
        &self.hover
    }

    /// Reset every tracker to its initial state.
    pub fn reset(&mut self) {
        self.click.reset();
        self.drag.reset();
        self.hover.reset();
    }
}
