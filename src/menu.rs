//! Context menu placement.
//!
//! This module keeps a popup menu opened at the cursor fully on screen.
//! This feature must be enabled with the `menu` feature flag.

use crate::types::{Coord, Position, Size};

/// Places popup menus so they stay on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuPositioner;

impl MenuPositioner {
    /// Create a new positioner.
    pub fn new() -> Self {
        Self
    }

    /// Top-left position for a menu opened at `cursor`.
    ///
    /// A menu larger than the screen in either dimension is pinned to the
    /// origin. Otherwise each axis that would run past the screen edge is
    /// shifted back so the menu ends exactly at the edge.
    pub fn calculate(&self, cursor: Position, menu: Size, screen: Size) -> Position {
        if !self.fits_on_screen(menu, screen) {
            return Position::ORIGIN;
        }

        let mut pos = cursor;
        if i64::from(pos.x) + i64::from(menu.width()) > i64::from(screen.width()) {
            pos.x = (screen.width() - menu.width()).max(0);
        }
        if i64::from(pos.y) + i64::from(menu.height()) > i64::from(screen.height()) {
            pos.y = (screen.height() - menu.height()).max(0);
        }
        pos
    }

    /// Check if a menu opened at `cursor` would run past the screen edge.
    pub fn would_overflow(&self, cursor: Position, menu: Size, screen: Size) -> bool {
        i64::from(cursor.x) + i64::from(menu.width()) > i64::from(screen.width())
            || i64::from(cursor.y) + i64::from(menu.height()) > i64::from(screen.height())
    }

    /// Check if the menu fits on the screen at all.
    pub fn fits_on_screen(&self, menu: Size, screen: Size) -> bool {
        menu.width() <= screen.width() && menu.height() <= screen.height()
    }
}

/// Top-left position for a `menu_w × menu_h` menu opened at `cursor` on a
/// `screen_w × screen_h` screen. Negative dimensions count as 0.
pub fn calculate_menu_position(
    cursor: Position,
    menu_w: Coord,
    menu_h: Coord,
    screen_w: Coord,
    screen_h: Coord,
) -> Position {
    MenuPositioner.calculate(
        cursor,
        Size::new(menu_w, menu_h),
        Size::new(screen_w, screen_h),
    )
}
