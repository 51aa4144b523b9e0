//! Core types for the keybind system: Keycode and KeyArg

use std::fmt;

/// Platform-level identifier for a physical key, mouse button or scroll
/// direction.
///
/// Keyboard codes follow the GLFW numbering (printable keys use their
/// uppercase ASCII value, so `W` is 87). Mouse buttons and scroll directions
/// live in ranges above every keyboard code so the three never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keycode(pub u32);

impl Keycode {
    pub const SPACE: Keycode = Keycode(32);
    pub const APOSTROPHE: Keycode = Keycode(39);
    pub const COMMA: Keycode = Keycode(44);
    pub const MINUS: Keycode = Keycode(45);
    pub const PERIOD: Keycode = Keycode(46);
    pub const SLASH: Keycode = Keycode(47);
    pub const SEMICOLON: Keycode = Keycode(59);
    pub const EQUAL: Keycode = Keycode(61);
    pub const LEFT_BRACKET: Keycode = Keycode(91);
    pub const BACKSLASH: Keycode = Keycode(92);
    pub const RIGHT_BRACKET: Keycode = Keycode(93);
    pub const GRAVE: Keycode = Keycode(96);

    pub const ESCAPE: Keycode = Keycode(256);
    pub const ENTER: Keycode = Keycode(257);
    pub const TAB: Keycode = Keycode(258);
    pub const BACKSPACE: Keycode = Keycode(259);
    pub const INSERT: Keycode = Keycode(260);
    pub const DELETE: Keycode = Keycode(261);
    pub const RIGHT: Keycode = Keycode(262);
    pub const LEFT: Keycode = Keycode(263);
    pub const DOWN: Keycode = Keycode(264);
    pub const UP: Keycode = Keycode(265);
    pub const PAGE_UP: Keycode = Keycode(266);
    pub const PAGE_DOWN: Keycode = Keycode(267);
    pub const HOME: Keycode = Keycode(268);
    pub const END: Keycode = Keycode(269);
    pub const CAPS_LOCK: Keycode = Keycode(280);

    /// F1; F2..F25 follow consecutively
    pub const F1: Keycode = Keycode(290);

    /// Numpad 0; numpad 1..9 follow consecutively
    pub const NUMPAD_0: Keycode = Keycode(320);
    pub const NUMPAD_DECIMAL: Keycode = Keycode(330);
    pub const NUMPAD_DIVIDE: Keycode = Keycode(331);
    pub const NUMPAD_MULTIPLY: Keycode = Keycode(332);
    pub const NUMPAD_SUBTRACT: Keycode = Keycode(333);
    pub const NUMPAD_ADD: Keycode = Keycode(334);
    pub const NUMPAD_ENTER: Keycode = Keycode(335);

    pub const LEFT_SHIFT: Keycode = Keycode(340);
    pub const LEFT_CONTROL: Keycode = Keycode(341);
    pub const LEFT_ALT: Keycode = Keycode(342);
    pub const LEFT_SUPER: Keycode = Keycode(343);
    pub const RIGHT_SHIFT: Keycode = Keycode(344);
    pub const RIGHT_CONTROL: Keycode = Keycode(345);
    pub const RIGHT_ALT: Keycode = Keycode(346);
    pub const RIGHT_SUPER: Keycode = Keycode(347);

    /// Base of the mouse button range (`mouse1` is left)
    pub const MOUSE_BASE: u32 = 1000;
    pub const MOUSE_LEFT: Keycode = Keycode(Self::MOUSE_BASE);
    pub const MOUSE_RIGHT: Keycode = Keycode(Self::MOUSE_BASE + 1);
    pub const MOUSE_MIDDLE: Keycode = Keycode(Self::MOUSE_BASE + 2);
    /// Highest mouse button number the registry knows about (`mouse8`)
    pub const MOUSE_BUTTONS: u32 = 8;

    pub const SCROLL_UP: Keycode = Keycode(1100);
    pub const SCROLL_DOWN: Keycode = Keycode(1101);
    pub const SCROLL_LEFT: Keycode = Keycode(1102);
    pub const SCROLL_RIGHT: Keycode = Keycode(1103);

    /// Keycode of a printable ASCII key (letters are case-folded)
    pub const fn ascii(c: u8) -> Keycode {
        Keycode(c.to_ascii_uppercase() as u32)
    }

    /// Function key `F{n}` for n in 1..=25
    pub const fn function(n: u8) -> Keycode {
        Keycode(Self::F1.0 + n as u32 - 1)
    }

    /// Numpad digit key
    pub const fn numpad(n: u8) -> Keycode {
        Keycode(Self::NUMPAD_0.0 + n as u32)
    }

    /// Mouse button `n`, 1-based (`mouse(1)` is the left button)
    pub const fn mouse(n: u8) -> Keycode {
        Keycode(Self::MOUSE_BASE + n as u32 - 1)
    }

    /// Whether this code belongs to the mouse button range
    pub const fn is_mouse_button(self) -> bool {
        self.0 >= Self::MOUSE_BASE && self.0 < Self::MOUSE_BASE + Self::MOUSE_BUTTONS
    }

    /// Whether this code is one of the four scroll directions
    pub const fn is_scroll(self) -> bool {
        self.0 >= Self::SCROLL_UP.0 && self.0 <= Self::SCROLL_RIGHT.0
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transient argument handed to every key target callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyArg {
    /// Auto-repeat of a key that is already claimed
    pub repeat: bool,
    /// Seconds elapsed this frame, capped at the dispatcher's `max_dt`
    pub dt: f32,
    /// Scroll delta, or a generic "strength" (1.0 for keys)
    pub amount: f32,
    /// Cursor displacement since the key was claimed
    pub mouse_rel_x: f32,
    pub mouse_rel_y: f32,
}

impl Default for KeyArg {
    fn default() -> Self {
        Self {
            repeat: false,
            dt: 0.0,
            amount: 1.0,
            mouse_rel_x: 0.0,
            mouse_rel_y: 0.0,
        }
    }
}

impl KeyArg {
    /// Argument for a press event
    pub fn press(repeat: bool) -> Self {
        Self {
            repeat,
            ..Self::default()
        }
    }

    /// Argument for a scroll "press" carrying the scroll delta
    pub fn scroll(amount: f32) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }
}
