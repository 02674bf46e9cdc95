//! Input events for widgets.
//!
//! Events arrive already resolved against the widget's own subtree: the
//! host layer (browser or test harness) maps a raw platform event to the
//! nearest relevant control before handing it to the widget. Widgets never
//! perform hit-testing themselves.

use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer activation inside the subtree.
    Click {
        /// The nearest `button` ancestor of the click target, if any.
        button: Option<ButtonTarget>,
    },
    /// Key pressed inside the subtree.
    KeyDown {
        /// Key pressed
        key: Key,
        /// The focused `button`, when focus is on one.
        focused: Option<ButtonTarget>,
    },
    /// An inner form control changed value (toggle checkbox).
    Change {
        /// New checked state
        checked: bool,
    },
}

/// A `button` element resolved as the subject of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTarget {
    /// `id` attribute, if set.
    pub id: Option<String>,
    /// `aria-controls` attribute, if set.
    pub controls: Option<String>,
    /// Full `class` attribute value.
    pub class: String,
}

impl ButtonTarget {
    /// Check whether the button carries a class name.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class.split_whitespace().any(|c| c == name)
    }
}

/// Keyboard keys widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Home
    Home,
    /// End
    End,
    /// Enter
    Enter,
    /// Space bar
    Space,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// Any key widgets do not bind
    Other,
}
