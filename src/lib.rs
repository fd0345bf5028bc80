//! # termouse
//!
//! Terminal mouse input for TUI frameworks: decodes SGR, X10 and URxvt
//! mouse reports and enriches them into clicks, double/triple clicks,
//! drags, hover transitions and scroll deltas.
//!
//! ## Features
//!
//! - **menu**: Context menu placement helpers (default)
//! - **trace**: Trace file output for debugging
//!
//! ## Example
//!
//! ```rust
//! use termouse::*;
//!
//! let mut handler = MouseHandler::new(MouseConfig::default());
//!
//! // Left press then release at column 9, row 4
//! handler.parse_at(b"\x1b[<0;10;5M", 1_000)?;
//! let events = handler.parse_at(b"\x1b[<0;10;5m", 1_040)?;
//! assert_eq!(events[0].kind(), EventType::Click);
//! assert_eq!(events[0].position(), Position::new(9, 4));
//!
//! // A second release soon after upgrades to a double click
//! handler.parse_at(b"\x1b[<0;10;5M", 1_200)?;
//! let events = handler.parse_at(b"\x1b[<0;10;5m", 1_230)?;
//! assert_eq!(events[0].kind(), EventType::DoubleClick);
//! # Ok::<(), termouse::Error>(())
//! ```
//!
//! All trackers are plain `&mut self` state machines: drive one handler
//! from one input stream, in arrival order.

#![warn(missing_docs)]

/// Write a trace line when the `trace` feature and the given level are on.
macro_rules! mouse_trace {
    ($flag:ident, $($arg:tt)*) => {
        #[cfg(feature = "trace")]
        {
            if $crate::trace::trace_enabled($crate::trace::$flag) {
                $crate::trace::tracef(&format!($($arg)*));
            }
        }
    };
}

pub mod click;
pub mod config;
pub mod drag;
pub mod error;
pub mod event;
pub mod handler;
pub mod hover;
pub mod mode;
pub mod processor;
pub mod protocol;
pub mod scroll;
pub mod sgr;
pub mod types;
pub mod urxvt;
pub mod x10;

#[cfg(feature = "menu")]
pub mod menu;

#[cfg(feature = "trace")]
pub mod trace;

// Re-export commonly used items at crate root
pub use click::ClickDetector;
pub use config::MouseConfig;
pub use drag::{DragRelease, DragState, DragTracker};
pub use error::{Error, Result};
pub use event::{Button, EventType, Modifiers, MouseEvent};
pub use handler::MouseHandler;
pub use hover::{ComponentArea, HoverPolicy, HoverState, HoverTracker, HoverTransition};
pub use mode::MouseMode;
pub use processor::EventProcessor;
pub use protocol::{is_mouse_prefix, parse_mouse_event, sequence_length, MouseProtocol};
pub use scroll::ScrollCalculator;
pub use types::*;

#[cfg(feature = "menu")]
pub use menu::{calculate_menu_position, MenuPositioner};

/// The termouse version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
