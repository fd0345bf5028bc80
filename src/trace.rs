//! # Tracing and Debugging Support
//!
//! This module provides tracing for the mouse pipeline: parsed reports,
//! click promotions, drags and hover transitions can be logged to a trace
//! file. These functions are only available when the `trace` feature is
//! enabled.
//!
//! ## Example
//!
//! ```rust,ignore
//! use termouse::trace::*;
//!
//! // Trace clicks and drags only
//! trace(TRACE_CLICK | TRACE_DRAG);
//!
//! // Log a custom message
//! tracef("starting session");
//! ```

use crate::event::{Button, Modifiers, MouseEvent};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Trace level constants
// ============================================================================

/// Disable tracing.
pub const TRACE_DISABLE: u32 = 0x0000;

/// Trace decoded reports and parse failures.
pub const TRACE_PARSE: u32 = 0x0001;

/// Trace click promotions.
pub const TRACE_CLICK: u32 = 0x0002;

/// Trace synthesized drag events.
pub const TRACE_DRAG: u32 = 0x0004;

/// Trace hover transitions.
pub const TRACE_HOVER: u32 = 0x0008;

/// Maximum trace level - enables all trace features.
pub const TRACE_MAXIMUM: u32 = 0xFFFF;

/// Default trace file name, relative to the current directory.
pub const TRACE_FILE: &str = "trace";

// ============================================================================
// Global trace state
// ============================================================================

#[derive(Default)]
struct TraceState {
    /// Current trace level bitmask.
    level: u32,
    /// Trace output file.
    file: Option<File>,
}

static TRACE_STATE: OnceLock<Mutex<TraceState>> = OnceLock::new();

fn trace_state() -> MutexGuard<'static, TraceState> {
    // recover from a poisoned lock
    TRACE_STATE
        .get_or_init(|| Mutex::new(TraceState::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// Main trace functions
// ============================================================================

/// Set the trace level, opening `./trace` if needed.
///
/// Passing [`TRACE_DISABLE`] closes the trace file.
///
/// ```rust,ignore
/// use termouse::trace::*;
///
/// trace(TRACE_PARSE | TRACE_HOVER);
/// trace(TRACE_DISABLE);
/// ```
pub fn trace(level: u32) {
    let mut state = trace_state();

    if level == TRACE_DISABLE {
        state.file = None;
    } else if state.file.is_none() {
        state.file = open_trace_file(Path::new(TRACE_FILE)).ok();
    }
    state.level = level;
}

/// Set the trace level and send output to `path`, truncating it.
pub fn trace_to(path: impl AsRef<Path>, level: u32) -> io::Result<()> {
    let file = open_trace_file(path.as_ref())?;
    let mut state = trace_state();
    state.file = Some(file);
    state.level = level;
    Ok(())
}

fn open_trace_file(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Get the current trace level.
pub fn trace_level() -> u32 {
    trace_state().level
}

/// Check if a specific trace feature is enabled.
pub fn trace_enabled(flag: u32) -> bool {
    let state = trace_state();
    state.level != TRACE_DISABLE && (state.level & flag) != 0
}

/// Write a timestamped message to the trace file.
pub fn tracef(msg: &str) {
    let mut state = trace_state();

    if state.level == TRACE_DISABLE {
        return;
    }

    if let Some(ref mut file) = state.file {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros())
            .unwrap_or(0);

        let _ = writeln!(file, "[{:012}] {}", timestamp, msg);
        let _ = file.flush();
    }
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Return a short name for a button.
pub fn tracebutton(button: Button) -> &'static str {
    match button {
        Button::None => "NONE",
        Button::Left => "LEFT",
        Button::Middle => "MIDDLE",
        Button::Right => "RIGHT",
        Button::WheelUp => "WHEEL_UP",
        Button::WheelDown => "WHEEL_DOWN",
    }
}

/// Return a string representation of a modifier set.
pub fn tracemods(mods: Modifiers) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if mods.contains(Modifiers::SHIFT) {
        parts.push("SHIFT");
    }
    if mods.contains(Modifiers::ALT) {
        parts.push("ALT");
    }
    if mods.contains(Modifiers::CTRL) {
        parts.push("CTRL");
    }

    if parts.is_empty() {
        "NONE".to_string()
    } else {
        parts.join("|")
    }
}

/// Return a string representation of a mouse event.
pub fn tracemouse(event: &MouseEvent) -> String {
    format!(
        "MEVENT {{ kind: {:?}, button: {}, x: {}, y: {}, mods: {}, ts: {} }}",
        event.kind(),
        tracebutton(event.button()),
        event.position().x,
        event.position().y,
        tracemods(event.modifiers()),
        event.timestamp()
    )
}

// ============================================================================
// Tests
// ============================================================================
