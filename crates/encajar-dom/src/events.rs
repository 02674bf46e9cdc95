//! Browser event translation — converts web events to widget events.

use crate::keys::code_to_key;
use encajar_core::{ButtonTarget, Event};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};

/// Resolve an event target to its nearest `button` ancestor.
fn resolve_button(event: &web_sys::Event) -> Option<ButtonTarget> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let button = element.closest("button").ok()??;
    Some(ButtonTarget {
        id: button.get_attribute("id"),
        controls: button.get_attribute("aria-controls"),
        class: button.get_attribute("class").unwrap_or_default(),
    })
}

/// Convert a click event.
pub(crate) fn click(event: &web_sys::Event) -> Option<Event> {
    Some(Event::Click {
        button: resolve_button(event),
    })
}

/// Convert a keydown event. The event target is the focused element.
pub(crate) fn keydown(event: &web_sys::Event) -> Option<Event> {
    let keyboard = event.dyn_ref::<KeyboardEvent>()?;
    Some(Event::KeyDown {
        key: code_to_key(&keyboard.code()),
        focused: resolve_button(event),
    })
}

/// Convert a change event from an inner checkbox.
pub(crate) fn change(event: &web_sys::Event) -> Option<Event> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    Some(Event::Change {
        checked: input.checked(),
    })
}
