//! Adapter from winit window events to registry keycodes and input events

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use super::dispatch::InputEvent;
use super::types::Keycode;

/// Pixels per scroll "line" for touchpads that report pixel deltas
const PIXELS_PER_LINE: f32 = 20.0;

/// Convert a winit physical key to a registry keycode
///
/// Returns None for keys the registry has no name for.
pub fn keycode_from_winit(physical_key: PhysicalKey) -> Option<Keycode> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let keycode = match code {
        WinitKeyCode::KeyA => Keycode::ascii(b'a'),
        WinitKeyCode::KeyB => Keycode::ascii(b'b'),
        WinitKeyCode::KeyC => Keycode::ascii(b'c'),
        WinitKeyCode::KeyD => Keycode::ascii(b'd'),
        WinitKeyCode::KeyE => Keycode::ascii(b'e'),
        WinitKeyCode::KeyF => Keycode::ascii(b'f'),
        WinitKeyCode::KeyG => Keycode::ascii(b'g'),
        WinitKeyCode::KeyH => Keycode::ascii(b'h'),
        WinitKeyCode::KeyI => Keycode::ascii(b'i'),
        WinitKeyCode::KeyJ => Keycode::ascii(b'j'),
        WinitKeyCode::KeyK => Keycode::ascii(b'k'),
        WinitKeyCode::KeyL => Keycode::ascii(b'l'),
        WinitKeyCode::KeyM => Keycode::ascii(b'm'),
        WinitKeyCode::KeyN => Keycode::ascii(b'n'),
        WinitKeyCode::KeyO => Keycode::ascii(b'o'),
        WinitKeyCode::KeyP => Keycode::ascii(b'p'),
        WinitKeyCode::KeyQ => Keycode::ascii(b'q'),
        WinitKeyCode::KeyR => Keycode::ascii(b'r'),
        WinitKeyCode::KeyS => Keycode::ascii(b's'),
        WinitKeyCode::KeyT => Keycode::ascii(b't'),
        WinitKeyCode::KeyU => Keycode::ascii(b'u'),
        WinitKeyCode::KeyV => Keycode::ascii(b'v'),
        WinitKeyCode::KeyW => Keycode::ascii(b'w'),
        WinitKeyCode::KeyX => Keycode::ascii(b'x'),
        WinitKeyCode::KeyY => Keycode::ascii(b'y'),
        WinitKeyCode::KeyZ => Keycode::ascii(b'z'),

        WinitKeyCode::Digit0 => Keycode::ascii(b'0'),
        WinitKeyCode::Digit1 => Keycode::ascii(b'1'),
        WinitKeyCode::Digit2 => Keycode::ascii(b'2'),
        WinitKeyCode::Digit3 => Keycode::ascii(b'3'),
        WinitKeyCode::Digit4 => Keycode::ascii(b'4'),
        WinitKeyCode::Digit5 => Keycode::ascii(b'5'),
        WinitKeyCode::Digit6 => Keycode::ascii(b'6'),
        WinitKeyCode::Digit7 => Keycode::ascii(b'7'),
        WinitKeyCode::Digit8 => Keycode::ascii(b'8'),
        WinitKeyCode::Digit9 => Keycode::ascii(b'9'),

        WinitKeyCode::Space => Keycode::SPACE,
        WinitKeyCode::Quote => Keycode::APOSTROPHE,
        WinitKeyCode::Comma => Keycode::COMMA,
        WinitKeyCode::Minus => Keycode::MINUS,
        WinitKeyCode::Period => Keycode::PERIOD,
        WinitKeyCode::Slash => Keycode::SLASH,
        WinitKeyCode::Semicolon => Keycode::SEMICOLON,
        WinitKeyCode::Equal => Keycode::EQUAL,
        WinitKeyCode::BracketLeft => Keycode::LEFT_BRACKET,
        WinitKeyCode::Backslash => Keycode::BACKSLASH,
        WinitKeyCode::BracketRight => Keycode::RIGHT_BRACKET,
        WinitKeyCode::Backquote => Keycode::GRAVE,

        WinitKeyCode::Escape => Keycode::ESCAPE,
        WinitKeyCode::Enter => Keycode::ENTER,
        WinitKeyCode::Tab => Keycode::TAB,
        WinitKeyCode::Backspace => Keycode::BACKSPACE,
        WinitKeyCode::Insert => Keycode::INSERT,
        WinitKeyCode::Delete => Keycode::DELETE,
        WinitKeyCode::ArrowRight => Keycode::RIGHT,
        WinitKeyCode::ArrowLeft => Keycode::LEFT,
        WinitKeyCode::ArrowDown => Keycode::DOWN,
        WinitKeyCode::ArrowUp => Keycode::UP,
        WinitKeyCode::PageUp => Keycode::PAGE_UP,
        WinitKeyCode::PageDown => Keycode::PAGE_DOWN,
        WinitKeyCode::Home => Keycode::HOME,
        WinitKeyCode::End => Keycode::END,
        WinitKeyCode::CapsLock => Keycode::CAPS_LOCK,

        WinitKeyCode::F1 => Keycode::function(1),
        WinitKeyCode::F2 => Keycode::function(2),
        WinitKeyCode::F3 => Keycode::function(3),
        WinitKeyCode::F4 => Keycode::function(4),
        WinitKeyCode::F5 => Keycode::function(5),
        WinitKeyCode::F6 => Keycode::function(6),
        WinitKeyCode::F7 => Keycode::function(7),
        WinitKeyCode::F8 => Keycode::function(8),
        WinitKeyCode::F9 => Keycode::function(9),
        WinitKeyCode::F10 => Keycode::function(10),
        WinitKeyCode::F11 => Keycode::function(11),
        WinitKeyCode::F12 => Keycode::function(12),
        WinitKeyCode::F13 => Keycode::function(13),
        WinitKeyCode::F14 => Keycode::function(14),
        WinitKeyCode::F15 => Keycode::function(15),
        WinitKeyCode::F16 => Keycode::function(16),
        WinitKeyCode::F17 => Keycode::function(17),
        WinitKeyCode::F18 => Keycode::function(18),
        WinitKeyCode::F19 => Keycode::function(19),
        WinitKeyCode::F20 => Keycode::function(20),
        WinitKeyCode::F21 => Keycode::function(21),
        WinitKeyCode::F22 => Keycode::function(22),
        WinitKeyCode::F23 => Keycode::function(23),
        WinitKeyCode::F24 => Keycode::function(24),
        WinitKeyCode::F25 => Keycode::function(25),

        WinitKeyCode::Numpad0 => Keycode::numpad(0),
        WinitKeyCode::Numpad1 => Keycode::numpad(1),
        WinitKeyCode::Numpad2 => Keycode::numpad(2),
        WinitKeyCode::Numpad3 => Keycode::numpad(3),
        WinitKeyCode::Numpad4 => Keycode::numpad(4),
        WinitKeyCode::Numpad5 => Keycode::numpad(5),
        WinitKeyCode::Numpad6 => Keycode::numpad(6),
        WinitKeyCode::Numpad7 => Keycode::numpad(7),
        WinitKeyCode::Numpad8 => Keycode::numpad(8),
        WinitKeyCode::Numpad9 => Keycode::numpad(9),
        WinitKeyCode::NumpadDecimal => Keycode::NUMPAD_DECIMAL,
        WinitKeyCode::NumpadDivide => Keycode::NUMPAD_DIVIDE,
        WinitKeyCode::NumpadMultiply => Keycode::NUMPAD_MULTIPLY,
        WinitKeyCode::NumpadSubtract => Keycode::NUMPAD_SUBTRACT,
        WinitKeyCode::NumpadAdd => Keycode::NUMPAD_ADD,
        WinitKeyCode::NumpadEnter => Keycode::NUMPAD_ENTER,

        WinitKeyCode::ShiftLeft => Keycode::LEFT_SHIFT,
        WinitKeyCode::ControlLeft => Keycode::LEFT_CONTROL,
        WinitKeyCode::AltLeft => Keycode::LEFT_ALT,
        WinitKeyCode::SuperLeft => Keycode::LEFT_SUPER,
        WinitKeyCode::ShiftRight => Keycode::RIGHT_SHIFT,
        WinitKeyCode::ControlRight => Keycode::RIGHT_CONTROL,
        WinitKeyCode::AltRight => Keycode::RIGHT_ALT,
        WinitKeyCode::SuperRight => Keycode::RIGHT_SUPER,

        _ => return None,
    };
    Some(keycode)
}

/// Convert a winit mouse button to a registry keycode
pub fn keycode_from_mouse_button(button: MouseButton) -> Option<Keycode> {
    match button {
        MouseButton::Left => Some(Keycode::mouse(1)),
        MouseButton::Right => Some(Keycode::mouse(2)),
        MouseButton::Middle => Some(Keycode::mouse(3)),
        MouseButton::Back => Some(Keycode::mouse(4)),
        MouseButton::Forward => Some(Keycode::mouse(5)),
        MouseButton::Other(n) if (n as u32) < Keycode::MOUSE_BUTTONS => {
            Some(Keycode::mouse(n as u8 + 1))
        }
        MouseButton::Other(_) => None,
    }
}

/// Scroll delta in lines as `(dx, dy)`
pub fn scroll_lines(delta: MouseScrollDelta) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (x, y),
        MouseScrollDelta::PixelDelta(pos) => (
            pos.x as f32 / PIXELS_PER_LINE,
            pos.y as f32 / PIXELS_PER_LINE,
        ),
    }
}

/// Translate a winit window event into a dispatcher input event
///
/// Returns None for events the dispatcher does not consume (including
/// keys without a registry keycode).
pub fn input_event_from_winit(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let keycode = keycode_from_winit(event.physical_key)?;
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyDown {
                    keycode,
                    repeat: event.repeat,
                },
                ElementState::Released => InputEvent::KeyUp { keycode },
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let keycode = keycode_from_mouse_button(*button)?;
            Some(match state {
                ElementState::Pressed => InputEvent::KeyDown {
                    keycode,
                    repeat: false,
                },
                ElementState::Released => InputEvent::KeyUp { keycode },
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = scroll_lines(*delta);
            Some(InputEvent::Scroll { dx, dy })
        }
        WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::registry::keycode_from_name;
    use winit::dpi::PhysicalPosition;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_letters_match_registry() {
        assert_eq!(
            keycode_from_winit(PhysicalKey::Code(WinitKeyCode::KeyW)),
            keycode_from_name("w")
        );
        assert_eq!(
            keycode_from_winit(PhysicalKey::Code(WinitKeyCode::KeyS)),
            Some(Keycode(83))
        );
    }

    #[test]
    fn test_named_keys_match_registry() {
        let pairs = [
            (WinitKeyCode::Space, "space"),
            (WinitKeyCode::ShiftLeft, "left_shift"),
            (WinitKeyCode::ControlLeft, "left_control"),
            (WinitKeyCode::Escape, "escape"),
            (WinitKeyCode::F5, "f5"),
            (WinitKeyCode::F13, "f13"),
            (WinitKeyCode::F25, "f25"),
            (WinitKeyCode::Numpad7, "kp_7"),
            (WinitKeyCode::Backquote, "grave"),
        ];
        for (code, name) in pairs {
            assert_eq!(
                keycode_from_winit(PhysicalKey::Code(code)),
                keycode_from_name(name),
                "{name}"
            );
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(keycode_from_winit(PhysicalKey::Code(WinitKeyCode::F30)), None);
        assert_eq!(
            keycode_from_winit(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            None
        );
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(
            keycode_from_mouse_button(MouseButton::Left),
            Some(Keycode::MOUSE_LEFT)
        );
        assert_eq!(
            keycode_from_mouse_button(MouseButton::Right),
            keycode_from_name("mouse2")
        );
        assert_eq!(
            keycode_from_mouse_button(MouseButton::Other(7)),
            Some(Keycode::mouse(8))
        );
        assert_eq!(keycode_from_mouse_button(MouseButton::Other(8)), None);
    }

    #[test]
    fn test_scroll_lines() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, -1.0)), (0.0, -1.0));
        assert_eq!(
            scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(40.0, 10.0))),
            (2.0, 0.5)
        );
    }

    #[test]
    fn test_focus_events() {
        assert_eq!(
            input_event_from_winit(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(input_event_from_winit(&WindowEvent::Focused(true)), None);
    }
}
