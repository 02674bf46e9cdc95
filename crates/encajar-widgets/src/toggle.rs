//! Toggle switch widget.
//!
//! Mirrors its host attributes (`checked`, `disabled`, `name`, `size`)
//! onto an inner checkbox. User toggling flows back the other way: the
//! host `checked` attribute is updated to match and a bubbling `toggle`
//! event is emitted. Attribute-driven updates are not echoed as events.

use encajar_core::{Event, HostDirective, LightChild, Markup, Selector, Subtree, Widget};
use serde::{Deserialize, Serialize};

/// Outward event name fired when the user toggles the switch.
pub const TOGGLE_EVENT: &str = "toggle";

const WRAPPER_CLASS: &str = "x-toggle";
const INPUT_CLASS: &str = "x-toggle__input";
const SWITCH_CLASS: &str = "x-toggle__switch";

/// Switch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToggleSize {
    /// Small
    Sm,
    /// Medium (default)
    #[default]
    Md,
    /// Large
    Lg,
}

impl ToggleSize {
    /// Parse the `size` attribute; missing or unknown values fall back to
    /// [`ToggleSize::Md`].
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("sm") => Self::Sm,
            Some("lg") => Self::Lg,
            _ => Self::Md,
        }
    }

    /// Modifier-class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    fn modifier_class(self) -> String {
        format!("{SWITCH_CLASS}--{}", self.as_str())
    }
}

/// Observed host attributes, as an explicit dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAttr {
    /// `name`
    Name,
    /// `size`
    Size,
    /// `checked`
    Checked,
    /// `disabled`
    Disabled,
}

impl ToggleAttr {
    /// Names of all observed attributes.
    pub const OBSERVED: [&'static str; 4] = ["name", "size", "checked", "disabled"];

    /// Look up the handler for an attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "checked" => Some(Self::Checked),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Message emitted when the user toggles the switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleChanged {
    /// New checked state
    pub checked: bool,
    /// Form name of the toggle
    pub name: String,
    /// Submitted value of the inner checkbox
    pub value: String,
}

/// Toggle switch widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toggle {
    checked: bool,
    disabled: bool,
    name: String,
    value: String,
    size: ToggleSize,
}

impl Default for Toggle {
    fn default() -> Self {
        Self {
            checked: false,
            disabled: false,
            name: String::new(),
            // Checkbox platform default when no value is assigned.
            value: "on".to_string(),
            size: ToggleSize::Md,
        }
    }
}

impl Toggle {
    /// Create an unchecked medium toggle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the form name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn size(mut self, size: ToggleSize) -> Self {
        self.size = size;
        self
    }

    /// Get the checked state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get the disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Get the submitted value.
    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Get the size.
    #[must_use]
    pub const fn get_size(&self) -> ToggleSize {
        self.size
    }

    /// Set the checked state programmatically. Returns the host
    /// reflection the caller must apply; state flows through the same
    /// attribute path as declarative updates, without a `toggle` event.
    pub fn set_checked(&mut self, checked: bool) -> HostDirective {
        self.checked = checked;
        HostDirective::ReflectAttribute {
            name: "checked",
            value: checked.then(String::new),
        }
    }

    /// Set the disabled state programmatically.
    pub fn set_disabled(&mut self, disabled: bool) -> HostDirective {
        self.disabled = disabled;
        HostDirective::ReflectAttribute {
            name: "disabled",
            value: disabled.then(String::new),
        }
    }

    /// Set the submitted value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    fn apply_checked(&self, subtree: &mut dyn Subtree) {
        let input = Selector::Class(INPUT_CLASS.to_string());
        if self.checked {
            subtree.set_attr(&input, "checked", "");
        } else {
            subtree.remove_attr(&input, "checked");
        }
    }

    fn apply_disabled(&self, subtree: &mut dyn Subtree) {
        let input = Selector::Class(INPUT_CLASS.to_string());
        if self.disabled {
            subtree.set_attr(&input, "disabled", "");
        } else {
            subtree.remove_attr(&input, "disabled");
        }
    }

    fn apply_name(&self, subtree: &mut dyn Subtree) {
        if !self.name.is_empty() {
            let input = Selector::Class(INPUT_CLASS.to_string());
            subtree.set_attr(&input, "name", &self.name);
        }
    }

    fn apply_size(&self, subtree: &mut dyn Subtree) {
        let switch = Selector::Class(SWITCH_CLASS.to_string());
        for size in ToggleSize::ALL {
            subtree.remove_class(&switch, &size.modifier_class());
        }
        subtree.add_class(&switch, &self.size.modifier_class());
    }
}

impl Widget for Toggle {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &ToggleAttr::OBSERVED
    }

    fn style_href(&self) -> &'static str {
        "toggle-component.css"
    }

    fn template(&self) -> Markup {
        Markup::new("label")
            .class(WRAPPER_CLASS)
            .child(
                Markup::new("input")
                    .class(INPUT_CLASS)
                    .attr("type", "checkbox"),
            )
            .child(Markup::new("div").class(SWITCH_CLASS))
            .child(Markup::new("slot"))
    }

    fn rebuild(&mut self, _children: &[LightChild]) {}

    fn render(&self, subtree: &mut dyn Subtree) {
        self.apply_checked(subtree);
        self.apply_disabled(subtree);
        self.apply_name(subtree);
        self.apply_size(subtree);
    }

    fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
        subtree: &mut dyn Subtree,
    ) -> Vec<HostDirective> {
        match ToggleAttr::from_name(name) {
            Some(ToggleAttr::Checked) => {
                self.checked = value.is_some();
                self.apply_checked(subtree);
            }
            Some(ToggleAttr::Disabled) => {
                self.disabled = value.is_some();
                self.apply_disabled(subtree);
            }
            Some(ToggleAttr::Name) => {
                self.name = value.unwrap_or_default().to_string();
                self.apply_name(subtree);
            }
            Some(ToggleAttr::Size) => {
                self.size = ToggleSize::from_attr(value);
                self.apply_size(subtree);
            }
            None => {}
        }
        Vec::new()
    }

    fn event(&mut self, event: &Event, subtree: &mut dyn Subtree) -> Vec<HostDirective> {
        if let Event::Change { checked } = event {
            self.checked = *checked;
            self.apply_checked(subtree);
            let message = ToggleChanged {
                checked: *checked,
                name: self.name.clone(),
                value: self.value.clone(),
            };
            return vec![
                HostDirective::ReflectAttribute {
                    name: "checked",
                    value: checked.then(String::new),
                },
                HostDirective::Notify {
                    event: TOGGLE_EVENT,
                    detail: serde_json::to_value(&message).unwrap_or(serde_json::Value::Null),
                },
            ];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encajar_test::Harness;

    // ===== ToggleSize Tests =====

    #[test]
    fn test_size_from_attr() {
        assert_eq!(ToggleSize::from_attr(Some("sm")), ToggleSize::Sm);
        assert_eq!(ToggleSize::from_attr(Some("lg")), ToggleSize::Lg);
        assert_eq!(ToggleSize::from_attr(Some("md")), ToggleSize::Md);
        assert_eq!(ToggleSize::from_attr(Some("huge")), ToggleSize::Md);
        assert_eq!(ToggleSize::from_attr(None), ToggleSize::Md);
    }

    // ===== Builder Tests =====

    #[test]
    fn test_toggle_builder() {
        let toggle = Toggle::new()
            .checked(true)
            .disabled(true)
            .name("notifications")
            .size(ToggleSize::Lg);

        assert!(toggle.is_checked());
        assert!(toggle.is_disabled());
        assert_eq!(toggle.get_size(), ToggleSize::Lg);
        assert_eq!(toggle.get_value(), "on");
    }

    // ===== Attribute Mirror Tests =====

    #[test]
    fn test_connect_mirrors_attributes() {
        let harness = Harness::new(Toggle::new())
            .attr("checked", "")
            .attr("name", "dark-mode")
            .attr("size", "sm")
            .connect();

        let input = harness.query(".x-toggle__input").unwrap();
        assert!(input.has_attr("checked"));
        assert_eq!(input.get_attr("name"), Some("dark-mode"));
        assert!(harness
            .query(".x-toggle__switch")
            .unwrap()
            .has_class("x-toggle__switch--sm"));
    }

    #[test]
    fn test_default_size_class() {
        let harness = Harness::new(Toggle::new()).connect();
        assert!(harness
            .query(".x-toggle__switch")
            .unwrap()
            .has_class("x-toggle__switch--md"));
    }

    #[test]
    fn test_size_change_swaps_modifier() {
        let mut harness = Harness::new(Toggle::new()).attr("size", "sm").connect();
        harness.set_attribute("size", "lg");

        let switch = harness.query(".x-toggle__switch").unwrap();
        assert!(switch.has_class("x-toggle__switch--lg"));
        assert!(!switch.has_class("x-toggle__switch--sm"));
    }

    #[test]
    fn test_disabled_mirrored_to_input() {
        let mut harness = Harness::new(Toggle::new()).connect();
        harness.set_attribute("disabled", "");
        assert!(harness
            .query(".x-toggle__input")
            .unwrap()
            .has_attr("disabled"));

        harness.remove_attribute("disabled");
        assert!(!harness
            .query(".x-toggle__input")
            .unwrap()
            .has_attr("disabled"));
    }

    #[test]
    fn test_external_checked_change_is_silent() {
        let mut harness = Harness::new(Toggle::new()).connect();
        harness.set_attribute("checked", "");

        assert!(harness.widget.is_checked());
        assert!(harness.events().is_empty());
    }

    // ===== User Change Tests =====

    #[test]
    fn test_user_toggle_reflects_and_notifies() {
        let mut harness = Harness::new(Toggle::new()).attr("name", "wifi").connect();

        harness.change(true);

        assert!(harness.widget.is_checked());
        assert_eq!(harness.host_attr("checked"), Some(""));
        let (event, detail) = &harness.events()[0];
        assert_eq!(event, TOGGLE_EVENT);
        assert_eq!(detail["checked"], true);
        assert_eq!(detail["name"], "wifi");
        assert_eq!(detail["value"], "on");
    }

    #[test]
    fn test_user_untoggle_clears_host_attribute() {
        let mut harness = Harness::new(Toggle::new()).attr("checked", "").connect();

        harness.change(false);

        assert!(!harness.widget.is_checked());
        assert_eq!(harness.host_attr("checked"), None);
        assert!(!harness
            .query(".x-toggle__input")
            .unwrap()
            .has_attr("checked"));
    }

    // ===== Programmatic Accessor Tests =====

    #[test]
    fn test_set_checked_returns_reflection() {
        let mut toggle = Toggle::new();
        let directive = toggle.set_checked(true);
        assert!(toggle.is_checked());
        assert_eq!(
            directive,
            HostDirective::ReflectAttribute {
                name: "checked",
                value: Some(String::new()),
            }
        );

        let directive = toggle.set_checked(false);
        assert_eq!(
            directive,
            HostDirective::ReflectAttribute {
                name: "checked",
                value: None,
            }
        );
    }

    #[test]
    fn test_set_value_feeds_event_detail() {
        let mut harness = Harness::new(Toggle::new()).connect();
        harness.widget.set_value("enabled");
        harness.change(true);
        assert_eq!(harness.events()[0].1["value"], "enabled");
    }
}
