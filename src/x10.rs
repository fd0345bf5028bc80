//! Legacy X10/normal mouse protocol (mode 1000).
//!
//! X10 format: `MCbCxCy` (after the `ESC [` introducer, 4 bytes total)
//! - Cb = button code + 32
//! - Cx = x + 33 (1-based, offset by 32)
//! - Cy = y + 33 (1-based, offset by 32)
//!
//! X10 cannot tell a press from a release, so every non-wheel, non-motion
//! report decodes as a press. Coordinates above [`MAX_COORD`] cannot be
//! represented.

use crate::error::{Error, Result};
use crate::event::MouseEvent;
use crate::protocol::{build_event, check_range, encode_code};
use crate::types::{now_ms, Coord, Timestamp};

/// Marker byte preceding the three data bytes.
pub const MARKER: u8 = b'M';

/// Payload length: marker plus three data bytes.
pub const PAYLOAD_LEN: usize = 4;

/// Offset added to every data byte.
pub const BYTE_OFFSET: u8 = 32;

/// Largest encodable 0-based coordinate (255 - 32 - 1).
pub const MAX_COORD: Coord = 222;

/// Parse an X10 payload, stamping the event with the current time.
pub fn parse(payload: &[u8]) -> Result<MouseEvent> {
    parse_at(payload, now_ms())
}

/// Parse an X10 payload with an explicit timestamp.
pub fn parse_at(payload: &[u8], timestamp: Timestamp) -> Result<MouseEvent> {
    let [marker, cb, cx, cy] = payload else {
        return Err(Error::malformed(format!(
            "X10 report must be {} bytes, got {}",
            PAYLOAD_LEN,
            payload.len()
        )));
    };
    if *marker != MARKER {
        return Err(Error::malformed("X10 report must start with 'M'"));
    }

    let code = unbias(*cb)?;
    let x1 = unbias(*cx)?;
    let y1 = unbias(*cy)?;
    // X10 has no release report
    Ok(build_event(
        u32::from(code),
        Coord::from(x1),
        Coord::from(y1),
        false,
        timestamp,
    ))
}

fn unbias(byte: u8) -> Result<u8> {
    byte.checked_sub(BYTE_OFFSET)
        .ok_or_else(|| Error::malformed(format!("X10 byte 0x{:02X} below offset", byte)))
}

/// Encode an event as an X10 payload (without the `ESC [` introducer).
pub fn encode(event: &MouseEvent) -> Result<Vec<u8>> {
    let pos = event.position();
    check_range(pos, MAX_COORD)?;
    let code = encode_code(event.button(), event.kind(), event.modifiers());

    // code <= 0x7f and coordinates <= MAX_COORD, so every byte fits
    Ok(vec![
        MARKER,
        code as u8 + BYTE_OFFSET,
        pos.x as u8 + BYTE_OFFSET + 1,
        pos.y as u8 + BYTE_OFFSET + 1,
    ])
}
