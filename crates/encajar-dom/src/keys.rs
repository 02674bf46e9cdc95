//! Keyboard code translation.

use encajar_core::Key;

/// Convert a DOM `KeyboardEvent.code` to a widget [`Key`].
#[must_use]
pub fn code_to_key(code: &str) -> Key {
    match code {
        "ArrowLeft" => Key::Left,
        "ArrowRight" => Key::Right,
        "ArrowUp" => Key::Up,
        "ArrowDown" => Key::Down,
        "Home" => Key::Home,
        "End" => Key::End,
        "Enter" | "NumpadEnter" => Key::Enter,
        "Space" => Key::Space,
        "Escape" => Key::Escape,
        "Tab" => Key::Tab,
        _ => Key::Other,
    }
}
