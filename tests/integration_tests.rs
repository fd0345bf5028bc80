//! Integration tests for termouse
//!
//! These tests drive the public API the way an input loop would: raw
//! reports in, enriched events out, with explicit timestamps so timing is
//! deterministic.

use termouse::*;

fn kinds(events: &[MouseEvent]) -> Vec<EventType> {
    events.iter().map(MouseEvent::kind).collect()
}

fn release_at(x: i32, y: i32, ts: Timestamp) -> MouseEvent {
    MouseEvent::at(
        EventType::Release,
        Button::Left,
        Position::new(x, y),
        Modifiers::empty(),
        ts,
    )
}

/// Test SGR press/release framing through the handler
#[test]
fn test_sgr_press_release() {
    let mut handler = MouseHandler::default();

    let events = handler.parse_at(b"\x1b[<0;10;20M", 0).unwrap();
    assert_eq!(kinds(&events), vec![EventType::Press]);
    assert_eq!(events[0].position(), Position::new(9, 19));

    let events = handler.parse_at(b"\x1b[<0;10;20m", 50).unwrap();
    assert_eq!(kinds(&events), vec![EventType::Click, EventType::Release]);
    assert_eq!(events[0].timestamp(), 50);
    assert_eq!(events[1].timestamp(), 50);
}

/// Test that a stripped introducer is accepted
#[test]
fn test_payload_without_introducer() {
    let mut handler = MouseHandler::default();
    let events = handler.parse_at(b"<2;1;1M", 0).unwrap();
    assert_eq!(events[0].button(), Button::Right);
}

/// Test the documented multi-click sequence
#[test]
fn test_click_sequence() {
    let mut detector = ClickDetector::new(500, 1);
    let mut seen = Vec::new();
    for ts in [0, 100, 250, 400] {
        seen.push(detector.detect_click(&release_at(10, 10, ts)).unwrap().kind());
    }
    assert_eq!(
        seen,
        vec![
            EventType::Click,
            EventType::DoubleClick,
            EventType::TripleClick,
            EventType::Click
        ]
    );
}

/// Test the multi-click timeout boundary is inclusive
#[test]
fn test_click_timeout_boundary() {
    let mut detector = ClickDetector::new(500, 1);
    detector.detect_click(&release_at(0, 0, 0));
    let second = detector.detect_click(&release_at(0, 0, 500)).unwrap();
    assert_eq!(second.kind(), EventType::DoubleClick);

    detector.reset();
    detector.detect_click(&release_at(0, 0, 0));
    let second = detector.detect_click(&release_at(0, 0, 501)).unwrap();
    assert_eq!(second.kind(), EventType::Click);
}

/// Test the first click is reported before any follow-up arrives
#[test]
fn test_first_click_reported_immediately() {
    let mut handler = MouseHandler::default();
    handler.parse_at(b"<0;3;3M", 0).unwrap();
    let events = handler.parse_at(b"<0;3;3m", 10).unwrap();
    assert_eq!(events[0].kind(), EventType::Click);
    assert_eq!(handler.click_count(), 1);
}

/// Test drag threshold and captured press fields
#[test]
fn test_drag_threshold() {
    let mut tracker = DragTracker::new(2);
    tracker.process_press(&MouseEvent::at(
        EventType::Press,
        Button::Middle,
        Position::new(20, 5),
        Modifiers::SHIFT,
        0,
    ));

    let near = MouseEvent::at(
        EventType::Motion,
        Button::None,
        Position::new(21, 5),
        Modifiers::empty(),
        10,
    );
    assert!(tracker.process_motion(&near).is_none());

    let far = MouseEvent::at(
        EventType::Motion,
        Button::None,
        Position::new(21, 6),
        Modifiers::CTRL,
        20,
    );
    let drag = tracker.process_motion(&far).unwrap();
    assert_eq!(drag.kind(), EventType::Drag);
    assert_eq!(drag.button(), Button::Middle);
    assert_eq!(drag.modifiers(), Modifiers::SHIFT);
    assert_eq!(drag.timestamp(), 20);
}

/// Test a drag gesture over SGR with any-motion reports
#[test]
fn test_drag_gesture_suppresses_click() {
    let mut handler = MouseHandler::default();
    handler.parse_at(b"\x1b[<0;1;1M", 0).unwrap();
    handler.parse_at(b"\x1b[<35;2;1M", 10).unwrap();
    let events = handler.parse_at(b"\x1b[<35;4;1M", 20).unwrap();
    assert_eq!(kinds(&events), vec![EventType::Drag]);

    let events = handler.parse_at(b"\x1b[<0;4;1m", 30).unwrap();
    assert_eq!(kinds(&events), vec![EventType::Release]);
    assert_eq!(handler.click_count(), 0);

    // the next plain click starts a fresh sequence
    handler.parse_at(b"\x1b[<0;4;1M", 40).unwrap();
    let events = handler.parse_at(b"\x1b[<0;4;1m", 50).unwrap();
    assert_eq!(events[0].kind(), EventType::Click);
}

/// Test a press and a distant release with no motion report still clicks
#[test]
fn test_release_far_from_press_without_motion() {
    let mut handler = MouseHandler::default();
    handler.parse_at(b"\x1b[<0;1;1M", 0).unwrap();
    let events = handler.parse_at(b"\x1b[<0;3;1m", 10).unwrap();
    assert_eq!(kinds(&events), vec![EventType::Click, EventType::Release]);
    assert!(!handler.is_dragging());
}

/// Test hover containment and transitions
#[test]
fn test_hover_transitions() {
    let bb = BoundingBox::new(5, 3, 20, 5);
    assert!(bb.contains(Position::new(5, 3)));
    assert!(!bb.contains(Position::new(25, 3)));

    let areas = vec![ComponentArea::new("button", bb)];
    let mut handler = MouseHandler::default();
    assert_eq!(handler.process_hover(Position::new(0, 0), &areas), EventType::Motion);
    assert_eq!(handler.process_hover(Position::new(5, 3), &areas), EventType::HoverEnter);
    assert_eq!(handler.process_hover(Position::new(24, 7), &areas), EventType::HoverMove);
    assert_eq!(handler.current_hover_component(), Some("button"));
    assert_eq!(handler.process_hover(Position::new(25, 3), &areas), EventType::HoverLeave);
    assert_eq!(handler.current_hover_component(), None);
}

/// Test paired hover switches emit leave before enter
#[test]
fn test_hover_paired_policy() {
    let areas = vec![
        ComponentArea::new("left", BoundingBox::new(0, 0, 10, 10)),
        ComponentArea::new("right", BoundingBox::new(10, 0, 10, 10)),
    ];
    let mut handler = MouseHandler::new(MouseConfig::new().with_hover_policy(HoverPolicy::Paired));
    handler.process_hover(Position::new(9, 0), &areas);

    let transitions = handler.process_hover_transitions(Position::new(10, 0), &areas, 5);
    assert_eq!(
        transitions,
        vec![
            HoverTransition {
                kind: EventType::HoverLeave,
                component: Some("left".to_string()),
            },
            HoverTransition {
                kind: EventType::HoverEnter,
                component: Some("right".to_string()),
            },
        ]
    );
}

/// Test scroll deltas are symmetric
#[test]
fn test_scroll_symmetry() {
    let mut handler = MouseHandler::new(MouseConfig::new().with_lines_per_scroll(4));
    let up = handler.parse_at(b"\x1b[<64;1;1M", 0).unwrap()[0];
    let down = handler.parse_at(b"\x1b[M!!!", 0).unwrap();
    assert_eq!(handler.scroll_delta(&up), -4);
    // X10 'M!!!' is a middle press, not a wheel event
    assert_eq!(handler.scroll_delta(&down[0]), 0);

    let down = handler.parse_at(b"\x1b[Ma!!", 0).unwrap()[0];
    assert_eq!(handler.scroll_delta(&down), 4);
    assert!(handler.is_scroll_down(&down));
    assert!(!handler.is_scroll_up(&down));
}

/// Test the round-trip property for every protocol
#[test]
fn test_protocol_round_trip() {
    let buttons = [Button::Left, Button::Middle, Button::Right];
    let mods = [
        Modifiers::empty(),
        Modifiers::SHIFT,
        Modifiers::ALT | Modifiers::CTRL,
    ];
    for protocol in [MouseProtocol::Sgr, MouseProtocol::X10, MouseProtocol::Urxvt] {
        for button in buttons {
            for m in mods {
                for pos in [Position::new(0, 0), Position::new(222, 17), Position::new(100, 222)] {
                    let event = MouseEvent::at(EventType::Press, button, pos, m, 0);
                    let raw = protocol.encode(&event).unwrap();
                    let decoded = parse_mouse_event(&raw, 0).unwrap();
                    assert_eq!(decoded.button(), button, "{:?}", protocol);
                    assert_eq!(decoded.position(), pos, "{:?}", protocol);
                    assert_eq!(decoded.modifiers(), m, "{:?}", protocol);
                }
            }
        }
    }
}

/// Test wheel events round-trip as scrolls
#[test]
fn test_wheel_round_trip() {
    for protocol in [MouseProtocol::Sgr, MouseProtocol::X10, MouseProtocol::Urxvt] {
        for button in [Button::WheelUp, Button::WheelDown] {
            let event = MouseEvent::at(
                EventType::Scroll,
                button,
                Position::new(3, 3),
                Modifiers::empty(),
                0,
            );
            let decoded = parse_mouse_event(&protocol.encode(&event).unwrap(), 0).unwrap();
            assert_eq!(decoded, event);
        }
    }
}

/// Test parse errors never produce events
#[test]
fn test_parse_errors() {
    let mut handler = MouseHandler::default();
    assert_eq!(handler.parse(b"hello"), Err(Error::UnknownProtocol));
    assert!(matches!(
        handler.parse(b"\x1b[<0;1;1;1M"),
        Err(Error::MalformedSequence(_))
    ));
    assert!(matches!(
        handler.parse(b"\x1b[<0;a;1M"),
        Err(Error::MalformedSequence(_))
    ));
    assert!(matches!(
        handler.parse(b"\x1b[M\x10!!"),
        Err(Error::MalformedSequence(_))
    ));
    assert!(!handler.is_dragging());
    assert_eq!(handler.click_count(), 0);
}

/// Test unknown button codes decode permissively
#[test]
fn test_unknown_button_code() {
    let event = parse_mouse_event(b"\x1b[<66;1;1M", 0).unwrap();
    assert_eq!(event.button(), Button::None);
    assert_eq!(event.kind(), EventType::Press);
}

/// Test X10 coordinate ceiling
#[test]
fn test_x10_ceiling() {
    let event = MouseEvent::at(
        EventType::Press,
        Button::Left,
        Position::new(223, 0),
        Modifiers::empty(),
        0,
    );
    assert!(matches!(
        MouseProtocol::X10.encode(&event),
        Err(Error::CoordinateOutOfRange { max: 222, .. })
    ));
    assert!(MouseProtocol::Sgr.encode(&event).is_ok());
}

/// Test framing a buffer holding several reports
#[test]
fn test_sequence_framing() {
    let input: &[u8] = b"\x1b[<0;5;5M\x1b[<0;5;5m\x1b[M !!";
    let mut handler = MouseHandler::default();
    let mut rest = input;
    let mut all = Vec::new();
    while !rest.is_empty() {
        assert!(is_mouse_prefix(rest));
        let len = sequence_length(rest).unwrap();
        all.extend(handler.parse_at(&rest[..len], 0).unwrap());
        rest = &rest[len..];
    }
    assert_eq!(
        kinds(&all),
        vec![
            EventType::Press,
            EventType::Click,
            EventType::Release,
            EventType::Press
        ]
    );
}

/// Test mode sequences
#[test]
fn test_mode_sequences() {
    let modes = [MouseMode::ButtonMotion, MouseMode::Sgr];
    assert_eq!(mode::enable_all(&modes), "\x1b[?1002h\x1b[?1006h");
    assert_eq!(mode::disable_all(&modes), "\x1b[?1006l\x1b[?1002l");
}

/// Test Manhattan distance properties
#[test]
fn test_distance_properties() {
    let points = [
        Position::new(0, 0),
        Position::new(-3, 7),
        Position::new(12, -1),
    ];
    for a in points {
        assert_eq!(a.distance(a), 0);
        for b in points {
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

/// Test reset is idempotent
#[test]
fn test_reset_idempotent() {
    let areas = vec![ComponentArea::new("x", BoundingBox::new(0, 0, 3, 3))];
    let mut handler = MouseHandler::default();
    handler.parse_at(b"<0;1;1M", 0).unwrap();
    handler.parse_at(b"<35;9;9M", 1).unwrap();
    handler.process_hover(Position::new(1, 1), &areas);

    handler.reset();
    let first = (handler.is_dragging(), handler.click_count(), handler.is_hovering());
    handler.reset();
    let second = (handler.is_dragging(), handler.click_count(), handler.is_hovering());
    assert_eq!(first, (false, 0, false));
    assert_eq!(first, second);
}

#[cfg(feature = "menu")]
mod menu_tests {
    use termouse::*;

    /// Test menu placement at the screen corner
    #[test]
    fn test_menu_corner() {
        assert_eq!(
            calculate_menu_position(Position::new(70, 20), 20, 10, 80, 24),
            Position::new(60, 14)
        );
    }

    /// Test an oversized menu is pinned to the origin
    #[test]
    fn test_menu_oversized() {
        let handler = MouseHandler::default();
        assert_eq!(
            handler.calculate_menu_position(Position::new(70, 20), 100, 30, 80, 24),
            Position::new(0, 0)
        );
    }

    /// Test the positioner query helpers
    #[test]
    fn test_menu_helpers() {
        let positioner = MenuPositioner::new();
        assert!(positioner.would_overflow(
            Position::new(70, 20),
            Size::new(20, 10),
            Size::new(80, 24)
        ));
        assert!(positioner.fits_on_screen(Size::new(20, 10), Size::new(80, 24)));
    }
}
