//! Keycode registry: human-readable key names to physical keycodes
//!
//! Names are matched case-insensitively. Unknown names yield `None` so the
//! keybind parser can report the offending line itself.

use super::types::Keycode;

/// Look up the keycode for a key name from a keybinds file
///
/// Accepts single printable characters (`w`, `1`, `/`), named keys
/// (`space`, `left_shift`, `page_up`), function keys (`f1`..`f25`), numpad
/// keys (`kp_0`..`kp_9`, `kp_add`), mouse buttons (`mouse1`..`mouse8`,
/// `mouse_left`) and scroll directions (`scroll_up`, `scroll_down`,
/// `scroll_left`, `scroll_right`).
pub fn keycode_from_name(name: &str) -> Option<Keycode> {
    let name = name.to_ascii_lowercase();

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return printable(c);
    }

    if let Some(code) = named(&name) {
        return Some(code);
    }

    if let Some(n) = numbered(&name, "f", 25) {
        return Some(Keycode::function(n));
    }
    if let Some(n) = numbered(&name, "mouse", Keycode::MOUSE_BUTTONS as u8) {
        return Some(Keycode::mouse(n));
    }
    for prefix in ["kp_", "numpad", "num"] {
        if let Some(n) = name.strip_prefix(prefix).and_then(digit) {
            return Some(Keycode::numpad(n));
        }
    }

    None
}

/// Single-character key names
fn printable(c: char) -> Option<Keycode> {
    match c {
        'a'..='z' | '0'..='9' => Some(Keycode::ascii(c as u8)),
        '\'' => Some(Keycode::APOSTROPHE),
        ',' => Some(Keycode::COMMA),
        '-' => Some(Keycode::MINUS),
        '.' => Some(Keycode::PERIOD),
        '/' => Some(Keycode::SLASH),
        ';' => Some(Keycode::SEMICOLON),
        '=' => Some(Keycode::EQUAL),
        '[' => Some(Keycode::LEFT_BRACKET),
        '\\' => Some(Keycode::BACKSLASH),
        ']' => Some(Keycode::RIGHT_BRACKET),
        '`' => Some(Keycode::GRAVE),
        _ => None,
    }
}

/// Multi-character key names that are not numbered families
fn named(name: &str) -> Option<Keycode> {
    let code = match name {
        "space" => Keycode::SPACE,
        "apostrophe" => Keycode::APOSTROPHE,
        "comma" => Keycode::COMMA,
        "minus" => Keycode::MINUS,
        "period" => Keycode::PERIOD,
        "slash" => Keycode::SLASH,
        "semicolon" => Keycode::SEMICOLON,
        "equal" | "equals" => Keycode::EQUAL,
        "left_bracket" => Keycode::LEFT_BRACKET,
        "backslash" => Keycode::BACKSLASH,
        "right_bracket" => Keycode::RIGHT_BRACKET,
        "grave" | "grave_accent" | "backtick" => Keycode::GRAVE,

        "escape" | "esc" => Keycode::ESCAPE,
        "enter" | "return" => Keycode::ENTER,
        "tab" => Keycode::TAB,
        "backspace" => Keycode::BACKSPACE,
        "insert" | "ins" => Keycode::INSERT,
        "delete" | "del" => Keycode::DELETE,
        "right" => Keycode::RIGHT,
        "left" => Keycode::LEFT,
        "down" => Keycode::DOWN,
        "up" => Keycode::UP,
        "page_up" | "pageup" | "pgup" => Keycode::PAGE_UP,
        "page_down" | "pagedown" | "pgdn" => Keycode::PAGE_DOWN,
        "home" => Keycode::HOME,
        "end" => Keycode::END,
        "caps_lock" | "capslock" => Keycode::CAPS_LOCK,

        "kp_decimal" => Keycode::NUMPAD_DECIMAL,
        "kp_divide" => Keycode::NUMPAD_DIVIDE,
        "kp_multiply" => Keycode::NUMPAD_MULTIPLY,
        "kp_subtract" => Keycode::NUMPAD_SUBTRACT,
        "kp_add" => Keycode::NUMPAD_ADD,
        "kp_enter" => Keycode::NUMPAD_ENTER,

        "left_shift" | "lshift" | "shift" => Keycode::LEFT_SHIFT,
        "left_control" | "left_ctrl" | "lctrl" | "ctrl" | "control" => Keycode::LEFT_CONTROL,
        "left_alt" | "lalt" | "alt" => Keycode::LEFT_ALT,
        "left_super" | "lsuper" | "super" => Keycode::LEFT_SUPER,
        "right_shift" | "rshift" => Keycode::RIGHT_SHIFT,
        "right_control" | "right_ctrl" | "rctrl" => Keycode::RIGHT_CONTROL,
        "right_alt" | "ralt" => Keycode::RIGHT_ALT,
        "right_super" | "rsuper" => Keycode::RIGHT_SUPER,

        "mouse_left" | "left_mouse" => Keycode::MOUSE_LEFT,
        "mouse_right" | "right_mouse" => Keycode::MOUSE_RIGHT,
        "mouse_middle" | "middle_mouse" => Keycode::MOUSE_MIDDLE,

        "scroll_up" => Keycode::SCROLL_UP,
        "scroll_down" => Keycode::SCROLL_DOWN,
        "scroll_left" => Keycode::SCROLL_LEFT,
        "scroll_right" => Keycode::SCROLL_RIGHT,

        _ => return None,
    };
    Some(code)
}

/// Parse `{prefix}{n}` for n in 1..=max
fn numbered(name: &str, prefix: &str, max: u8) -> Option<u8> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    (1..=max).contains(&n).then_some(n)
}

fn digit(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [d @ b'0'..=b'9'] => Some(d - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(keycode_from_name("w"), Some(Keycode(87)));
        assert_eq!(keycode_from_name("s"), Some(Keycode(83)));
        assert_eq!(keycode_from_name("0"), Some(Keycode(48)));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(keycode_from_name("W"), keycode_from_name("w"));
        assert_eq!(keycode_from_name("Left_Shift"), Some(Keycode::LEFT_SHIFT));
        assert_eq!(keycode_from_name("SCROLL_UP"), Some(Keycode::SCROLL_UP));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(keycode_from_name("f1"), Some(Keycode::F1));
        assert_eq!(keycode_from_name("F12"), Some(Keycode(301)));
        assert_eq!(keycode_from_name("f25"), Some(Keycode(314)));
        assert_eq!(keycode_from_name("f26"), None);
        assert_eq!(keycode_from_name("f0"), None);
        assert_eq!(keycode_from_name("f01"), None);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(keycode_from_name("mouse1"), Some(Keycode::MOUSE_LEFT));
        assert_eq!(keycode_from_name("mouse2"), Some(Keycode::MOUSE_RIGHT));
        assert_eq!(keycode_from_name("mouse_middle"), Some(Keycode::MOUSE_MIDDLE));
        assert_eq!(keycode_from_name("mouse8"), Some(Keycode::mouse(8)));
        assert_eq!(keycode_from_name("mouse9"), None);
    }

    #[test]
    fn test_numpad() {
        assert_eq!(keycode_from_name("kp_5"), Some(Keycode::numpad(5)));
        assert_eq!(keycode_from_name("numpad0"), Some(Keycode::NUMPAD_0));
        assert_eq!(keycode_from_name("kp_add"), Some(Keycode::NUMPAD_ADD));
        assert_eq!(keycode_from_name("kp_10"), None);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(keycode_from_name(","), Some(Keycode::COMMA));
        assert_eq!(keycode_from_name("["), Some(Keycode::LEFT_BRACKET));
        assert_eq!(keycode_from_name("`"), Some(Keycode::GRAVE));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(keycode_from_name(""), None);
        assert_eq!(keycode_from_name("hyper"), None);
        assert_eq!(keycode_from_name("!"), None);
        assert_eq!(keycode_from_name("é"), None);
    }
}
