//! The embedder-facing mouse handler.
//!
//! [`MouseHandler`] sniffs the protocol of each raw report, decodes it and
//! feeds it through an [`EventProcessor`]. It is the one type most
//! applications need.
//!
//! ```rust
//! use termouse::*;
//!
//! let mut handler = MouseHandler::new(MouseConfig::default());
//!
//! handler.parse_at(b"\x1b[<0;5;5M", 0)?;
//! let events = handler.parse_at(b"\x1b[<0;5;5m", 30)?;
//! assert_eq!(events[0].kind(), EventType::Click);
//! assert_eq!(events[1].kind(), EventType::Release);
//! # Ok::<(), termouse::Error>(())
//! ```

use crate::config::MouseConfig;
use crate::error::Result;
use crate::event::{EventType, MouseEvent};
use crate::hover::{ComponentArea, HoverTransition};
use crate::processor::EventProcessor;
use crate::protocol::MouseProtocol;
use crate::scroll::ScrollCalculator;
use crate::types::{now_ms, Position, Timestamp};

/// Parses raw mouse reports into enriched events.
#[derive(Clone, Debug, Default)]
pub struct MouseHandler {
    config: MouseConfig,
    processor: EventProcessor,
    scroll: ScrollCalculator,
    last_protocol: Option<MouseProtocol>,
}

impl MouseHandler {
    /// Create a new handler.
    pub fn new(config: MouseConfig) -> Self {
        Self {
            processor: EventProcessor::new(&config),
            scroll: ScrollCalculator::new(config.lines_per_scroll),
            last_protocol: None,
            config,
        }
    }

    /// The configuration the handler was built with.
    pub fn config(&self) -> &MouseConfig {
        &self.config
    }

    /// The protocol of the last successfully parsed report.
    pub fn last_protocol(&self) -> Option<MouseProtocol> {
        self.last_protocol
    }

    /// Parse one raw report, stamping it with the current time.
    ///
    /// `raw` may include or omit the `ESC [` introducer. One report can
    /// yield several events (e.g. a click followed by its release).
    pub fn parse(&mut self, raw: &[u8]) -> Result<Vec<MouseEvent>> {
        self.parse_at(raw, now_ms())
    }

    /// Parse one raw report with an explicit timestamp.
    pub fn parse_at(&mut self, raw: &[u8], timestamp: Timestamp) -> Result<Vec<MouseEvent>> {
        let (protocol, payload) = MouseProtocol::detect(raw).inspect_err(|_err| {
            mouse_trace!(TRACE_PARSE, "parse: {} for {:?}", _err, raw);
        })?;
        let event = protocol.parse_at(payload, timestamp).inspect_err(|_err| {
            mouse_trace!(TRACE_PARSE, "parse: {:?} {} for {:?}", protocol, _err, raw);
        })?;
        self.last_protocol = Some(protocol);

        mouse_trace!(
            TRACE_PARSE,
            "parse: {:?} {}",
            protocol,
            crate::trace::tracemouse(&event)
        );
        Ok(self.processor.process(event))
    }

    /// Feed an already decoded event through the processor.
    pub fn process(&mut self, event: MouseEvent) -> Vec<MouseEvent> {
        self.processor.process(event)
    }

    /// Signed scroll delta in lines; negative scrolls up.
    pub fn scroll_delta(&self, event: &MouseEvent) -> i32 {
        self.scroll.calculate_delta(event)
    }

    /// Check if the event scrolls up.
    pub fn is_scroll_up(&self, event: &MouseEvent) -> bool {
        self.scroll.is_scroll_up(event)
    }

    /// Check if the event scrolls down.
    pub fn is_scroll_down(&self, event: &MouseEvent) -> bool {
        self.scroll.is_scroll_down(event)
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.processor.is_dragging()
    }

    /// Number of clicks in the current multi-click sequence.
    pub fn click_count(&self) -> u8 {
        self.processor.click_count()
    }

    /// Update hover state for `pos` against the current component layout.
    pub fn process_hover(&mut self, pos: Position, areas: &[ComponentArea]) -> EventType {
        self.processor.process_hover(pos, areas)
    }

    /// Update hover state and return every transition.
    pub fn process_hover_transitions(
        &mut self,
        pos: Position,
        areas: &[ComponentArea],
        timestamp: Timestamp,
    ) -> Vec<HoverTransition> {
        self.processor.process_hover_transitions(pos, areas, timestamp)
    }

    /// Check if a component is hovered.
    pub fn is_hovering(&self) -> bool {
        self.processor.is_hovering()
    }

    /// The hovered component id, if any.
    pub fn current_hover_component(&self) -> Option<&str> {
        self.processor.current_hover_component()
    }

    /// Top-left position keeping a menu opened at `cursor` on screen.
    #[cfg(feature = "menu")]
    pub fn calculate_menu_position(
        &self,
        cursor: Position,
        menu_w: i32,
        menu_h: i32,
        screen_w: i32,
        screen_h: i32,
    ) -> Position {
        crate::menu::calculate_menu_position(cursor, menu_w, menu_h, screen_w, screen_h)
    }

    /// Reset all tracking state.
    pub fn reset(&mut self) {
        self.processor.reset();
        self.last_protocol = None;
    }
}
