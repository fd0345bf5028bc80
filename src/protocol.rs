//! Shared mouse protocol machinery.
//!
//! All three wire protocols carry the same xterm button code:
//!
//! ```text
//! bit:   6     5     4     3     2     1 0
//!      wheel motion ctrl  alt  shift  button
//! ```
//!
//! The per-protocol modules ([`crate::sgr`], [`crate::x10`],
//! [`crate::urxvt`]) only differ in how the code and coordinates are framed;
//! they all go through [`decode_code`] / [`encode_code`] here.
//!
//! This module also owns protocol sniffing ([`MouseProtocol::detect`]) and
//! sequence framing for input readers ([`sequence_length`],
//! [`is_mouse_prefix`]).

use crate::error::{Error, Result};
use crate::event::{Button, EventType, Modifiers, MouseEvent};
use crate::types::{Coord, Position, Timestamp};
use crate::{sgr, urxvt, x10};

use std::str::FromStr;

// ============================================================================
// Button code layout
// ============================================================================

/// Mask selecting the button base (low two bits, motion and wheel bits).
pub const BASE_MASK: u32 = 0x63;
/// Mask selecting the modifier bits.
pub const MODIFIER_MASK: u32 = 0x1c;
/// Set while the pointer is moving.
pub const MOTION_BIT: u32 = 0x20;

/// Base code for the left button.
pub const CODE_LEFT: u32 = 0;
/// Base code for the middle button.
pub const CODE_MIDDLE: u32 = 1;
/// Base code for the right button.
pub const CODE_RIGHT: u32 = 2;
/// Base code for motion with no button held.
pub const CODE_MOTION: u32 = 32;
/// Base code for motion with no button held, as sent by any-motion tracking.
pub const CODE_MOTION_NO_BUTTON: u32 = 35;
/// Base code for wheel up.
pub const CODE_WHEEL_UP: u32 = 64;
/// Base code for wheel down.
pub const CODE_WHEEL_DOWN: u32 = 65;

/// The result of splitting a wire button code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedCode {
    /// The button named by the base code. Unknown bases map to `None`.
    pub button: Button,
    /// Modifiers carried in bits 2–4.
    pub modifiers: Modifiers,
    /// Whether the motion bit was set.
    pub motion: bool,
}

impl DecodedCode {
    /// Classify the code into an event type.
    ///
    /// Wheel buttons are always `Scroll`, motion codes are `Motion`, and
    /// everything else is `Release` or `Press` depending on `release`.
    pub fn kind(&self, release: bool) -> EventType {
        if self.button.is_wheel() {
            EventType::Scroll
        } else if self.motion {
            EventType::Motion
        } else if release {
            EventType::Release
        } else {
            EventType::Press
        }
    }
}

/// Split a wire button code into button, modifiers and motion flag.
///
/// Unknown base codes decode to [`Button::None`] rather than failing, so
/// newer terminals sending extra buttons do not break parsing.
pub fn decode_code(code: u32) -> DecodedCode {
    let button = match code & BASE_MASK {
        CODE_LEFT => Button::Left,
        CODE_MIDDLE => Button::Middle,
        CODE_RIGHT => Button::Right,
        CODE_WHEEL_UP => Button::WheelUp,
        CODE_WHEEL_DOWN => Button::WheelDown,
        _ => Button::None,
    };
    DecodedCode {
        button,
        modifiers: Modifiers::from_bits_truncate((code & MODIFIER_MASK) as u8),
        motion: code & MOTION_BIT != 0,
    }
}

/// Build the wire button code for an event.
///
/// Motion, drag and button-less events are encoded with the plain motion
/// base (32); wheel events keep their wheel base.
///
/// The wire format has no code for a press or release without a button, so
/// `Button::None` always encodes as motion and decodes back as
/// `EventType::Motion`. Round trips hold only for events that carry a
/// button or are motion already.
pub fn encode_code(button: Button, kind: EventType, modifiers: Modifiers) -> u32 {
    let base = match button {
        Button::Left => CODE_LEFT,
        Button::Middle => CODE_MIDDLE,
        Button::Right => CODE_RIGHT,
        Button::WheelUp => CODE_WHEEL_UP,
        Button::WheelDown => CODE_WHEEL_DOWN,
        Button::None => CODE_MOTION,
    };
    let base = if matches!(kind, EventType::Motion | EventType::Drag) && !button.is_wheel() {
        CODE_MOTION
    } else {
        base
    };
    base | u32::from(modifiers.bits())
}

/// Assemble a parsed event from its wire parts.
pub(crate) fn build_event(
    code: u32,
    x1: Coord,
    y1: Coord,
    release: bool,
    timestamp: Timestamp,
) -> MouseEvent {
    let decoded = decode_code(code);
    MouseEvent::at(
        decoded.kind(release),
        decoded.button,
        Position::new(x1.saturating_sub(1), y1.saturating_sub(1)),
        decoded.modifiers,
        timestamp,
    )
}

/// Split a `code;x;y` parameter string into its three numeric fields.
pub(crate) fn parse_params(params: &[u8]) -> Result<(u32, Coord, Coord)> {
    let text = std::str::from_utf8(params)
        .map_err(|_| Error::malformed("parameters are not valid UTF-8"))?;
    let fields: Vec<&str> = text.split(';').collect();
    if fields.len() != 3 {
        return Err(Error::malformed(format!(
            "expected 3 fields, got {}",
            fields.len()
        )));
    }

    let code = parse_field::<u32>(fields[0], "button code")?;
    let x = parse_field::<Coord>(fields[1], "x coordinate")?;
    let y = parse_field::<Coord>(fields[2], "y coordinate")?;
    Ok((code, x, y))
}

fn parse_field<T: FromStr>(field: &str, name: &str) -> Result<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(format!("{} is not numeric: {:?}", name, field)));
    }
    field
        .parse()
        .map_err(|_| Error::malformed(format!("{} out of range: {:?}", name, field)))
}

/// Check a position is encodable as 1-based coordinates up to `max`.
pub(crate) fn check_range(pos: Position, max: Coord) -> Result<()> {
    if pos.x < 0 || pos.y < 0 || pos.x > max || pos.y > max {
        return Err(Error::CoordinateOutOfRange {
            x: pos.x,
            y: pos.y,
            max,
        });
    }
    Ok(())
}

// ============================================================================
// Protocol detection
// ============================================================================

/// Control Sequence Introducer preceding every mouse report.
pub const CSI: &[u8] = b"\x1b[";

/// Mouse report encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseProtocol {
    /// SGR extended mode: `<code;x;y` + `M`/`m`.
    Sgr,
    /// Legacy binary mode: `M` + three biased bytes.
    X10,
    /// rxvt-unicode mode: `code;x;y` + `M`.
    Urxvt,
}

impl MouseProtocol {
    /// Identify the protocol of a report.
    ///
    /// `raw` may start with the `ESC [` introducer or already have it
    /// stripped. Returns the protocol and the payload the matching parser
    /// expects.
    pub fn detect(raw: &[u8]) -> Result<(MouseProtocol, &[u8])> {
        let payload = raw.strip_prefix(CSI).unwrap_or(raw);

        // X10 first: its raw code byte may itself be '<'
        if payload.len() == x10::PAYLOAD_LEN && payload[0] == x10::MARKER {
            return Ok((MouseProtocol::X10, payload));
        }
        if payload.first() == Some(&b'<') {
            return Ok((MouseProtocol::Sgr, payload));
        }
        if payload.last() == Some(&b'M') && payload.contains(&b';') {
            return Ok((MouseProtocol::Urxvt, payload));
        }
        Err(Error::UnknownProtocol)
    }

    /// Decode a payload with this protocol's parser.
    pub fn parse_at(&self, payload: &[u8], timestamp: Timestamp) -> Result<MouseEvent> {
        match self {
            MouseProtocol::Sgr => sgr::parse_at(payload, timestamp),
            MouseProtocol::X10 => x10::parse_at(payload, timestamp),
            MouseProtocol::Urxvt => urxvt::parse_at(payload, timestamp),
        }
    }

    /// Encode an event with this protocol, including the `ESC [` introducer.
    pub fn encode(&self, event: &MouseEvent) -> Result<Vec<u8>> {
        let payload = match self {
            MouseProtocol::Sgr => sgr::encode(event)?.into_bytes(),
            MouseProtocol::X10 => x10::encode(event)?,
            MouseProtocol::Urxvt => urxvt::encode(event)?.into_bytes(),
        };
        let mut out = Vec::with_capacity(CSI.len() + payload.len());
        out.extend_from_slice(CSI);
        out.extend_from_slice(&payload);
        Ok(out)
    }
}

/// Sniff the protocol of `raw` and decode it.
pub fn parse_mouse_event(raw: &[u8], timestamp: Timestamp) -> Result<MouseEvent> {
    let (protocol, payload) = MouseProtocol::detect(raw)?;
    protocol.parse_at(payload, timestamp)
}

// ============================================================================
// Sequence framing
// ============================================================================

/// Check if the given input might be the start of a mouse sequence.
pub fn is_mouse_prefix(data: &[u8]) -> bool {
    match data {
        [] => false,
        [0x1b] | [0x1b, b'['] => true,
        [0x1b, b'[', b'<' | b'M', ..] => true,
        [0x1b, b'[', rest @ ..] => {
            let params = rest.strip_suffix(b"M").unwrap_or(rest);
            params.first().is_some_and(u8::is_ascii_digit)
                && params.iter().all(|&b| b.is_ascii_digit() || b == b';')
        }
        _ => false,
    }
}

/// Get the length of a complete mouse sequence at the start of `data`, or
/// `None` if it is incomplete or not a mouse sequence.
pub fn sequence_length(data: &[u8]) -> Option<usize> {
    let rest = data.strip_prefix(CSI)?;

    match *rest.first()? {
        // SGR: parameters up to the M/m terminator
        b'<' => {
            for (i, &b) in rest.iter().enumerate().skip(1) {
                match b {
                    b'M' | b'm' => return Some(CSI.len() + i + 1),
                    b'0'..=b'9' | b';' => {}
                    _ => return None,
                }
            }
            None
        }
        // X10: marker plus three raw bytes
        x10::MARKER => {
            let len = CSI.len() + x10::PAYLOAD_LEN;
            (data.len() >= len).then_some(len)
        }
        // URxvt: digits and semicolons up to M
        b'0'..=b'9' => {
            for (i, &b) in rest.iter().enumerate() {
                match b {
                    b'M' => return Some(CSI.len() + i + 1),
                    b'0'..=b'9' | b';' => {}
                    _ => return None,
                }
            }
            None
        }
        _ => None,
    }
}
