//! Terminal mouse mode sequences.
//!
//! Generates the DEC private mode set/reset strings that turn mouse
//! reporting on and off. Writing them to the terminal is left to the
//! caller.

/// DEC private modes related to mouse reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseMode {
    /// Normal tracking: press and release (1000).
    X10,
    /// Button-event tracking: motion while a button is held (1002).
    ButtonMotion,
    /// Any-event tracking: all motion (1003).
    AnyMotion,
    /// Focus in/out reports (1004).
    FocusEvents,
    /// SGR extended coordinates (1006).
    Sgr,
    /// rxvt-unicode extended coordinates (1015).
    Urxvt,
    /// SGR with pixel coordinates (1016).
    SgrPixels,
}

impl MouseMode {
    /// The DEC private mode number.
    pub fn code(&self) -> u16 {
        match self {
            MouseMode::X10 => 1000,
            MouseMode::ButtonMotion => 1002,
            MouseMode::AnyMotion => 1003,
            MouseMode::FocusEvents => 1004,
            MouseMode::Sgr => 1006,
            MouseMode::Urxvt => 1015,
            MouseMode::SgrPixels => 1016,
        }
    }

    /// Get the escape sequence to enable this mode.
    pub fn enable_sequence(&self) -> String {
        format!("\x1b[?{}h", self.code())
    }

    /// Get the escape sequence to disable this mode.
    pub fn disable_sequence(&self) -> String {
        format!("\x1b[?{}l", self.code())
    }
}

/// Concatenate the enable sequences for `modes`, in order.
pub fn enable_all(modes: &[MouseMode]) -> String {
    modes.iter().map(MouseMode::enable_sequence).collect()
}

/// Concatenate the disable sequences for `modes`, in reverse order.
pub fn disable_all(modes: &[MouseMode]) -> String {
    modes.iter().rev().map(MouseMode::disable_sequence).collect()
}
