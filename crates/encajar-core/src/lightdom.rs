//! Light-DOM child model.
//!
//! Widgets never walk the host platform's child elements directly. The
//! host layer snapshots each caller-supplied child into a [`LightChild`]
//! (slot name plus `data-*` attributes) and widgets rebuild their models
//! from that snapshot. The children themselves stay owned by the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A caller-supplied child element, as seen by a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightChild {
    /// `slot` attribute, if any.
    slot: Option<String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    data: BTreeMap<String, String>,
}

impl LightChild {
    /// Create a child with no slot and no data attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slot name.
    #[must_use]
    pub fn slot(mut self, name: impl Into<String>) -> Self {
        self.slot = Some(name.into());
        self
    }

    /// Set a `data-*` attribute (key without the `data-` prefix).
    #[must_use]
    pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Get the slot name.
    #[must_use]
    pub fn get_slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Look up a `data-*` attribute (key without the `data-` prefix).
    #[must_use]
    pub fn get_data(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_child_builder() {
        let child = LightChild::new()
            .slot("tab-0")
            .data("label", "First")
            .data("icon", "🏠");

        assert_eq!(child.get_slot(), Some("tab-0"));
        assert_eq!(child.get_data("label"), Some("First"));
        assert_eq!(child.get_data("icon"), Some("🏠"));
        assert_eq!(child.get_data("visible"), None);
    }

    #[test]
    fn test_light_child_no_slot() {
        let child = LightChild::new();
        assert_eq!(child.get_slot(), None);
    }
}
