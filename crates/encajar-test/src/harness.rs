//! Interaction harness for Encajar widgets.
//!
//! Plays the role of the host element around a widget under test: it
//! holds the host attributes, replays them through the widget's dispatch
//! table (with the old/new equality short-circuit), resolves simulated
//! clicks and key presses against the fake subtree, and records outward
//! events, removal, and timer directives for assertions.

use crate::dom::FakeSubtree;
use encajar_core::{attribute, Event, HostDirective, Key, LightChild, Markup, Selector, Widget};
use std::collections::BTreeMap;

/// Test harness wiring one widget to a fake host.
pub struct Harness<W: Widget> {
    /// The widget under test.
    pub widget: W,
    subtree: FakeSubtree,
    children: Vec<LightChild>,
    host_attrs: BTreeMap<String, String>,
    events: Vec<(String, serde_json::Value)>,
    removed: bool,
    scheduled: Option<u32>,
    default_prevented: bool,
}

impl<W: Widget> Harness<W> {
    /// Create a harness around a widget. Call [`connect`](Self::connect)
    /// after declaring initial attributes and children.
    #[must_use]
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            subtree: FakeSubtree::new(),
            children: Vec::new(),
            host_attrs: BTreeMap::new(),
            events: Vec::new(),
            removed: false,
            scheduled: None,
            default_prevented: false,
        }
    }

    /// Declare a host attribute present before attach.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.host_attrs.insert(name.into(), value.into());
        self
    }

    /// Declare a light-DOM child present before attach.
    #[must_use]
    pub fn child(mut self, child: LightChild) -> Self {
        self.children.push(child);
        self
    }

    /// Attach the widget: initial attributes, model rebuild, subtree
    /// materialization, full render.
    #[must_use]
    pub fn connect(mut self) -> Self {
        let attrs: Vec<(String, String)> = self
            .host_attrs
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let children = self.children.clone();
        let directives = self.widget.connected(&children, &attrs, &mut self.subtree);
        self.process(directives);
        self
    }

    // === Simulation ===

    /// Mutate a host attribute externally.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.write_host_attr(name, Some(value));
    }

    /// Remove a host attribute externally.
    pub fn remove_attribute(&mut self, name: &str) {
        self.write_host_attr(name, None);
    }

    /// Simulate a click on the first element matching the selector. The
    /// target resolves to its nearest `button` ancestor, as on the host
    /// platform.
    pub fn click(&mut self, selector: &str) {
        self.default_prevented = false;
        let button = self.subtree.button_target(selector);
        let directives = self.widget.event(&Event::Click { button }, &mut self.subtree);
        self.process(directives);
    }

    /// Move focus to the first element matching the selector.
    pub fn focus(&mut self, selector: &str) {
        if let Ok(sel) = Selector::parse(selector) {
            encajar_core::Subtree::focus(&mut self.subtree, &sel);
        }
    }

    /// Simulate a key press on the currently focused element.
    pub fn press_key(&mut self, key: Key) {
        self.default_prevented = false;
        let focused = self
            .subtree
            .focused_id()
            .map(|id| format!("#{id}"))
            .and_then(|sel| self.subtree.button_target(&sel));
        let directives = self
            .widget
            .event(&Event::KeyDown { key, focused }, &mut self.subtree);
        self.process(directives);
    }

    /// Simulate a structural light-DOM change: replace the children and
    /// let the widget re-derive its model and re-render whole.
    pub fn set_children(&mut self, children: Vec<LightChild>) {
        self.children = children;
        self.widget.rebuild(&self.children);
        self.widget.render(&mut self.subtree);
    }

    /// Simulate the inner form control changing value.
    pub fn change(&mut self, checked: bool) {
        self.default_prevented = false;
        let directives = self
            .widget
            .event(&Event::Change { checked }, &mut self.subtree);
        self.process(directives);
    }

    // === Queries ===

    /// Read a host attribute.
    #[must_use]
    pub fn host_attr(&self, name: &str) -> Option<&str> {
        self.host_attrs.get(name).map(String::as_str)
    }

    /// Outward events recorded so far, in dispatch order.
    #[must_use]
    pub fn events(&self) -> &[(String, serde_json::Value)] {
        &self.events
    }

    /// Whether the widget asked its host to remove itself.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.removed
    }

    /// Delay of the pending self-removal timer, if one is scheduled.
    #[must_use]
    pub const fn scheduled_removal(&self) -> Option<u32> {
        self.scheduled
    }

    /// Whether the last simulated input suppressed default handling.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Query the fake subtree for the first matching element.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&Markup> {
        self.subtree.query(selector)
    }

    /// Query the fake subtree for all matching elements.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&Markup> {
        self.subtree.query_all(selector)
    }

    /// Id of the element that last received focus.
    #[must_use]
    pub fn focused_id(&self) -> Option<&str> {
        self.subtree.focused_id()
    }

    /// Direct access to the fake subtree.
    #[must_use]
    pub const fn subtree(&self) -> &FakeSubtree {
        &self.subtree
    }

    // === Assertions ===

    /// Assert that an element matching the selector exists.
    ///
    /// # Panics
    ///
    /// Panics if no element matches.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.query(selector).is_some(),
            "Expected element matching '{selector}' to exist"
        );
        self
    }

    /// Assert an attribute value on the first matching element.
    ///
    /// # Panics
    ///
    /// Panics if no element matches or the attribute differs.
    pub fn assert_attr(&self, selector: &str, name: &str, expected: &str) -> &Self {
        let Some(element) = self.query(selector) else {
            panic!("No element matching '{selector}'");
        };
        assert_eq!(
            element.get_attr(name),
            Some(expected),
            "Attribute '{name}' mismatch on '{selector}'"
        );
        self
    }

    fn write_host_attr(&mut self, name: &str, value: Option<&str>) {
        let old = self.host_attrs.get(name).cloned();
        match value {
            Some(v) => self.host_attrs.insert(name.to_string(), v.to_string()),
            None => self.host_attrs.remove(name),
        };
        if !attribute::changed(old.as_deref(), value) {
            return;
        }
        if !self.widget.observed_attributes().iter().any(|a| *a == name) {
            return;
        }
        let directives = self.widget.attribute_changed(name, value, &mut self.subtree);
        self.process(directives);
    }

    fn process(&mut self, directives: Vec<HostDirective>) {
        for directive in directives {
            match directive {
                HostDirective::ReflectAttribute { name, value } => {
                    self.write_host_attr(name, value.as_deref());
                }
                HostDirective::Notify { event, detail } => {
                    self.events.push((event.to_string(), detail));
                }
                HostDirective::RemoveHost => self.removed = true,
                HostDirective::CancelRemovalTimer => self.scheduled = None,
                HostDirective::ScheduleRemoval { seconds } => self.scheduled = Some(seconds),
                HostDirective::PreventDefault => self.default_prevented = true,
            }
        }
    }
}
