//! SGR extended mouse protocol (mode 1006).
//!
//! SGR format: `<Cb;Cx;CyM` or `<Cb;Cx;Cym` (after the `ESC [` introducer)
//! - Cb = button code, see [`crate::protocol`]
//! - Cx, Cy = 1-based decimal coordinates, no upper limit
//! - `M` = press, `m` = release

use crate::error::{Error, Result};
use crate::event::{EventType, MouseEvent};
use crate::protocol::{build_event, check_range, encode_code, parse_params};
use crate::types::{now_ms, Timestamp};

/// Leading byte of an SGR payload.
pub const PREFIX: u8 = b'<';

/// Parse an SGR payload, stamping the event with the current time.
pub fn parse(payload: &[u8]) -> Result<MouseEvent> {
    parse_at(payload, now_ms())
}

/// Parse an SGR payload with an explicit timestamp.
pub fn parse_at(payload: &[u8], timestamp: Timestamp) -> Result<MouseEvent> {
    let body = match payload.split_first() {
        Some((&PREFIX, body)) => body,
        _ => return Err(Error::malformed("SGR report must start with '<'")),
    };
    let (&terminator, params) = body
        .split_last()
        .ok_or_else(|| Error::malformed("empty SGR report"))?;
    let release = match terminator {
        b'M' => false,
        b'm' => true,
        other => {
            return Err(Error::malformed(format!(
                "SGR report must end with 'M' or 'm', got {:?}",
                other as char
            )))
        }
    };

    let (code, x, y) = parse_params(params)?;
    Ok(build_event(code, x, y, release, timestamp))
}

/// Encode an event as an SGR payload (without the `ESC [` introducer).
pub fn encode(event: &MouseEvent) -> Result<String> {
    check_range(event.position(), i32::MAX - 1)?;
    let code = encode_code(event.button(), event.kind(), event.modifiers());
    let terminator = if event.kind() == EventType::Release {
        'm'
    } else {
        'M'
    };
    Ok(format!(
        "<{};{};{}{}",
        code,
        event.position().x + 1,
        event.position().y + 1,
        terminator
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Button, Modifiers};
    use crate::types::Position;

    #[test]
    fn test_parse_press_release() {
        // Button 1 press at (1,1)
        let event = parse_at(b"<0;1;1M", 10).unwrap();
        assert_eq!(event.kind(), EventType::Press);
        assert_eq!(event.button(), Button::Left);
        assert_eq!(event.position(), Position::new(0, 0));
        assert_eq!(event.timestamp(), 10);

        // Button 1 release at (10,20)
        let event = parse_at(b"<0;10;20m", 0).unwrap();
        assert_eq!(event.kind(), EventType::Release);
        assert_eq!(event.position(), Position::new(9, 19));
    }

    #[test]
    fn test_parse_scroll_ignores_terminator() {
        let event = parse_at(b"<64;5;5M", 0).unwrap();
        assert_eq!(event.kind(), EventType::Scroll);
        assert_eq!(event.button(), Button::WheelUp);

        let event = parse_at(b"<65;5;5m", 0).unwrap();
        assert_eq!(event.kind(), EventType::Scroll);
        assert_eq!(event.button(), Button::WheelDown);
    }

    #[test]
    fn test_parse_motion() {
        let event = parse_at(b"<35;12;7M", 0).unwrap();
        assert_eq!(event.kind(), EventType::Motion);
        assert_eq!(event.button(), Button::None);
        assert_eq!(event.position(), Position::new(11, 6));

        let event = parse_at(b"<32;12;7M", 0).unwrap();
        assert_eq!(event.kind(), EventType::Motion);
        assert_eq!(event.button(), Button::None);
    }

    #[test]
    fn test_parse_modifiers() {
        let event = parse_at(b"<4;5;5M", 0).unwrap();
        assert_eq!(event.modifiers(), Modifiers::SHIFT);

        let event = parse_at(b"<26;5;5M", 0).unwrap();
        assert_eq!(event.button(), Button::Right);
        assert_eq!(event.modifiers(), Modifiers::ALT | Modifiers::CTRL);
    }

    #[test]
    fn test_parse_large_coordinates() {
        let event = parse_at(b"<0;1000;500M", 0).unwrap();
        assert_eq!(event.position(), Position::new(999, 499));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(b"0;1;1M").is_err());
        assert!(parse(b"<0;1;1").is_err());
        assert!(parse(b"<0;1;1X").is_err());
        assert!(parse(b"<0;1M").is_err());
        assert!(parse(b"<0;x;1M").is_err());
        assert!(parse(b"<").is_err());
        assert!(parse(b"").is_err());
    }

    #[test]
    fn test_encode() {
        let event = MouseEvent::at(
            EventType::Release,
            Button::Middle,
            Position::new(9, 19),
            Modifiers::SHIFT,
            0,
        );
        assert_eq!(encode(&event).unwrap(), "<5;10;20m");
    }

    #[test]
    fn test_encode_rejects_negative() {
        let event = MouseEvent::at(
            EventType::Press,
            Button::Left,
            Position::new(-1, 0),
            Modifiers::empty(),
            0,
        );
        assert!(encode(&event).is_err());
    }

    #[test]
    fn test_round_trip() {
        let buttons = [Button::Left, Button::Middle, Button::Right];
        for button in buttons {
            for mods in [Modifiers::empty(), Modifiers::SHIFT | Modifiers::CTRL, Modifiers::all()] {
                let event =
                    MouseEvent::at(EventType::Press, button, Position::new(300, 2), mods, 0);
                let decoded = parse_at(encode(&event).unwrap().as_bytes(), 0).unwrap();
                assert_eq!(decoded, event);
            }
        }
    }
}
