//! rxvt-unicode mouse protocol (mode 1015).
//!
//! URxvt format: `Cb;Cx;CyM` (after the `ESC [` introducer)
//! - Cb = button code, same layout as SGR
//! - Cx, Cy = 1-based decimal coordinates, no upper limit
//! - always terminated by uppercase `M`; there is no release report

use crate::error::{Error, Result};
use crate::event::MouseEvent;
use crate::protocol::{build_event, check_range, encode_code, parse_params};
use crate::types::{now_ms, Timestamp};

/// Terminator of every URxvt report.
pub const TERMINATOR: u8 = b'M';

/// Parse a URxvt payload, stamping the event with the current time.
pub fn parse(payload: &[u8]) -> Result<MouseEvent> {
    parse_at(payload, now_ms())
}

/// Parse a URxvt payload with an explicit timestamp.
pub fn parse_at(payload: &[u8], timestamp: Timestamp) -> Result<MouseEvent> {
    let params = match payload.split_last() {
        Some((&TERMINATOR, params)) => params,
        _ => return Err(Error::malformed("URxvt report must end with 'M'")),
    };
    let (code, x, y) = parse_params(params)?;
    Ok(build_event(code, x, y, false, timestamp))
}

/// Encode an event as a URxvt payload (without the `ESC [` introducer).
pub fn encode(event: &MouseEvent) -> Result<String> {
    check_range(event.position(), i32::MAX - 1)?;
    let code = encode_code(event.button(), event.kind(), event.modifiers());
    Ok(format!(
        "{};{};{}M",
        code,
        event.position().x + 1,
        event.position().y + 1
    ))
}
