//! Tabbed panel widget.
//!
//! Slotted children named `tab-<n>` become a model of [`TabDescriptor`]s;
//! the widget keeps a button list and a panel list synchronized with that
//! model and with the host's `current-tab`/`hide-class` attributes, and
//! implements the roving-tabindex keyboard protocol over the visible tabs.

use encajar_core::{
    attribute, ButtonTarget, Event, HostDirective, Key, LightChild, Markup, Selector, Subtree,
    Widget,
};
use serde::{Deserialize, Serialize};

/// Outward event name fired when the active tab changes by activation.
pub const CHANGE_EVENT: &str = "x-tabs:change";

const BUTTON_CLASS: &str = "x-tabs__button";
const BUTTON_ACTIVE_CLASS: &str = "x-tabs--button";
const LIST_CLASS: &str = "x-tabs__list";
const LIST_ITEM_CLASS: &str = "x-tabs__list-item";
const PANELS_CLASS: &str = "x-tabs__panels";
const PANEL_CLASS: &str = "x-tabs__panel";
const ICON_CLASS: &str = "x-tabs__icon";
const LABEL_CLASS: &str = "x-tabs__label";

const DEFAULT_HIDE_CLASS: &str = "hidden";
const SLOT_PREFIX: &str = "tab-";

/// One tab derived from an eligible slotted child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    /// Display text.
    pub label: String,
    /// Stable identifier `tab-{index}`. The button element id is
    /// `{id}-tab`, the panel element id is `{id}`.
    pub id: String,
    /// Raw markup/glyph rendered before the label.
    pub icon: Option<String>,
    /// Whether the tab participates in the button list and keyboard
    /// traversal. Invisible tabs keep their index and their panel.
    pub is_visible: bool,
    /// Slot name of the source child. The child stays owned by the
    /// caller; this is only a reference to it.
    pub slot: String,
}

impl TabDescriptor {
    fn button_id(&self) -> String {
        format!("{}-tab", self.id)
    }
}

/// Message emitted when a tab is committed as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsChanged {
    /// Index that was active before the commit
    pub previous_index: usize,
    /// Newly active index
    pub current_index: usize,
    /// Descriptor of the tab that became active
    pub current_tab: TabDescriptor,
}

/// Outcome of a key press while focus is on a tab button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// Move focus to the button of the tab at this absolute index.
    Focus(usize),
    /// The focused tab was committed as active.
    Committed(TabsChanged),
    /// Key is bound but produced no movement or commit.
    Consumed,
    /// Not a bound key, or focus is not on a tab button.
    Ignored,
}

/// Observed host attributes, as an explicit dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabsAttr {
    /// `current-tab`
    CurrentTab,
    /// `hide-class`
    HideClass,
}

impl TabsAttr {
    /// Names of all observed attributes.
    pub const OBSERVED: [&'static str; 2] = ["current-tab", "hide-class"];

    /// Look up the handler for an attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "current-tab" => Some(Self::CurrentTab),
            "hide-class" => Some(Self::HideClass),
            _ => None,
        }
    }
}

/// Scan slotted children and derive the ordered tab collection.
///
/// Children whose slot name starts with `tab-` are eligible. The numeric
/// suffix decides the tab's position; a suffix that does not parse falls
/// back to the child's position among eligible children. A duplicate
/// position silently overwrites the earlier child; a position at or past
/// the eligible-child count is dropped. The result is dense: positions
/// match declared slot order after compaction.
#[must_use]
pub fn build_tabs(children: &[LightChild]) -> Vec<TabDescriptor> {
    let matched: Vec<&LightChild> = children
        .iter()
        .filter(|c| c.get_slot().is_some_and(|s| s.starts_with(SLOT_PREFIX)))
        .collect();

    let mut slots: Vec<Option<TabDescriptor>> = vec![None; matched.len()];
    for (position, child) in matched.iter().enumerate() {
        let slot = child.get_slot().unwrap_or("");
        let suffix = slot.strip_prefix(SLOT_PREFIX).unwrap_or(slot);
        let index = attribute::parse_leading_digits(suffix).unwrap_or(position);
        if index >= slots.len() {
            continue;
        }
        let label = child.get_data("label").map_or_else(
            || format!("Tab {}", index + 1),
            std::string::ToString::to_string,
        );
        slots[index] = Some(TabDescriptor {
            label,
            id: format!("tab-{index}"),
            icon: child.get_data("icon").map(std::string::ToString::to_string),
            is_visible: child.get_data("visible") != Some("false"),
            slot: slot.to_string(),
        });
    }
    slots.into_iter().flatten().collect()
}

/// Tabbed panel widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tabs {
    /// Tab collection, rebuilt whole on every structural re-scan.
    tabs: Vec<TabDescriptor>,
    /// Active index as last written; read through [`Self::current_tab`],
    /// which clamps out-of-range values to 0.
    active: usize,
    /// Class toggled on inactive panels.
    hide_class: String,
}

impl Default for Tabs {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
            hide_class: DEFAULT_HIDE_CLASS.to_string(),
        }
    }
}

impl Tabs {
    /// Create an empty tabs widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tab collection.
    #[must_use]
    pub fn with_tabs(mut self, tabs: impl IntoIterator<Item = TabDescriptor>) -> Self {
        self.tabs = tabs.into_iter().collect();
        self
    }

    /// Set the active index.
    #[must_use]
    pub const fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// Get the active index, clamped to 0 when out of range.
    #[must_use]
    pub fn current_tab(&self) -> usize {
        if self.active < self.tabs.len() {
            self.active
        } else {
            0
        }
    }

    /// Count of visible tabs.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.tabs.iter().filter(|t| t.is_visible).count()
    }

    /// Get the tab collection.
    #[must_use]
    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Get a tab by index.
    #[must_use]
    pub fn tab(&self, index: usize) -> Option<&TabDescriptor> {
        self.tabs.get(index)
    }

    /// Get the hide class currently in effect.
    #[must_use]
    pub fn hide_class(&self) -> &str {
        &self.hide_class
    }

    /// Programmatically activate a tab by index.
    ///
    /// Routes through the same validation as pointer and keyboard
    /// activation: out-of-range or invisible targets are ignored and
    /// return `None`.
    pub fn activate(&mut self, index: usize) -> Option<TabsChanged> {
        self.commit(index)
    }

    /// Commit `index` as the active tab. Rejects out-of-range and
    /// invisible targets with no state change.
    fn commit(&mut self, index: usize) -> Option<TabsChanged> {
        let tab = self.tabs.get(index)?;
        if !tab.is_visible {
            return None;
        }
        let previous = self.current_tab();
        let message = TabsChanged {
            previous_index: previous,
            current_index: index,
            current_tab: tab.clone(),
        };
        self.active = index;
        Some(message)
    }

    /// Resolve a key press into a navigation outcome.
    ///
    /// Navigation runs over the visible subsequence, wrapping at both
    /// ends; the outcome carries absolute indices. Arrow/Home/End move
    /// focus only; Enter/Space commit the focused tab.
    pub fn on_key(&mut self, key: Key, focused: Option<&ButtonTarget>) -> KeyResponse {
        let Some(button) = focused else {
            return KeyResponse::Ignored;
        };
        if !button.has_class(BUTTON_CLASS) {
            return KeyResponse::Ignored;
        }
        let Some(controls) = button.controls.as_deref() else {
            return KeyResponse::Ignored;
        };
        let visible = self.visible_positions();
        let Some(pos) = visible.iter().position(|&i| self.tabs[i].id == controls) else {
            return KeyResponse::Ignored;
        };

        let new_pos = match key {
            Key::Left | Key::Up => {
                if pos > 0 {
                    pos - 1
                } else {
                    visible.len() - 1
                }
            }
            Key::Right | Key::Down => {
                if pos + 1 < visible.len() {
                    pos + 1
                } else {
                    0
                }
            }
            Key::Home => 0,
            Key::End => visible.len() - 1,
            Key::Enter | Key::Space => {
                let committed = self
                    .index_of_id(controls)
                    .and_then(|index| self.commit(index));
                return committed.map_or(KeyResponse::Consumed, KeyResponse::Committed);
            }
            _ => return KeyResponse::Ignored,
        };

        if new_pos == pos {
            KeyResponse::Consumed
        } else {
            KeyResponse::Focus(visible[new_pos])
        }
    }

    /// Absolute indices of visible tabs, in order.
    fn visible_positions(&self) -> Vec<usize> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_visible)
            .map(|(i, _)| i)
            .collect()
    }

    fn index_of_id(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Button list contents: one item per visible tab.
    #[must_use]
    pub fn buttons_markup(&self) -> Vec<Markup> {
        let active = self.current_tab();
        let mut items = Vec::new();
        for (index, tab) in self.tabs.iter().enumerate() {
            if !tab.is_visible {
                continue;
            }
            let selected = index == active;
            let mut button = Markup::new("button")
                .class(BUTTON_CLASS)
                .attr("type", "button")
                .attr("role", "tab")
                .attr("id", tab.button_id())
                .attr("aria-controls", tab.id.clone())
                .attr("aria-selected", selected.to_string())
                .attr("tabindex", if selected { "0" } else { "-1" });
            if selected {
                button = button.class(BUTTON_ACTIVE_CLASS);
            }
            if let Some(icon) = &tab.icon {
                button = button.child(Markup::new("span").class(ICON_CLASS).raw(icon.clone()));
            }
            button = button.child(Markup::new("span").class(LABEL_CLASS).text(tab.label.clone()));

            items.push(
                Markup::new("li")
                    .class(LIST_ITEM_CLASS)
                    .attr("role", "presentation")
                    .child(button),
            );
        }
        items
    }

    /// Panel list contents: one panel per tab, visible or not. Panels of
    /// invisible tabs stay addressable by id; only the button list and
    /// keyboard traversal skip them.
    #[must_use]
    pub fn panels_markup(&self) -> Vec<Markup> {
        self.tabs
            .iter()
            .map(|tab| {
                Markup::new("div")
                    .class(PANEL_CLASS)
                    .attr("role", "tabpanel")
                    .attr("id", tab.id.clone())
                    .attr("aria-labelledby", tab.button_id())
                    .attr("tabindex", "0")
                    .child(Markup::new("slot").attr("name", tab.slot.clone()))
            })
            .collect()
    }

    /// Refresh activation-dependent state on already-rendered buttons and
    /// panels: `aria-selected`, roving `tabindex`, the active modifier
    /// class, and panel visibility.
    pub fn apply_active(&self, subtree: &mut dyn Subtree) {
        let active = self.current_tab();
        for (index, tab) in self.tabs.iter().enumerate() {
            let selected = index == active;
            if tab.is_visible {
                let button = Selector::Id(tab.button_id());
                subtree.set_attr(&button, "aria-selected", &selected.to_string());
                subtree.set_attr(&button, "tabindex", if selected { "0" } else { "-1" });
                if selected {
                    subtree.add_class(&button, BUTTON_ACTIVE_CLASS);
                } else {
                    subtree.remove_class(&button, BUTTON_ACTIVE_CLASS);
                }
            }

            let panel = Selector::Id(tab.id.clone());
            if selected {
                subtree.remove_class(&panel, &self.hide_class);
                subtree.remove_attr(&panel, "hidden");
            } else {
                subtree.add_class(&panel, &self.hide_class);
                subtree.set_attr(&panel, "hidden", "");
            }
        }
    }

    /// Activate a tab through the commit path and return the host side
    /// effects a commit produces. Rejected targets yield no directives.
    ///
    /// Pointer activation and the programmatic public operation both
    /// route through here.
    pub fn switch_to(&mut self, index: usize, subtree: &mut dyn Subtree) -> Vec<HostDirective> {
        match self.commit(index) {
            Some(message) => {
                self.apply_active(subtree);
                Self::commit_directives(&message)
            }
            None => Vec::new(),
        }
    }

    /// Host side effects of a commit: reflect `current-tab`, then notify.
    fn commit_directives(message: &TabsChanged) -> Vec<HostDirective> {
        vec![
            HostDirective::ReflectAttribute {
                name: "current-tab",
                value: Some(message.current_index.to_string()),
            },
            HostDirective::Notify {
                event: CHANGE_EVENT,
                detail: serde_json::to_value(message).unwrap_or(serde_json::Value::Null),
            },
        ]
    }

    fn focus_button(&self, subtree: &mut dyn Subtree, index: usize) {
        if let Some(tab) = self.tabs.get(index) {
            subtree.focus(&Selector::Id(tab.button_id()));
        }
    }
}

impl Widget for Tabs {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &TabsAttr::OBSERVED
    }

    fn style_href(&self) -> &'static str {
        "tabs-component.css"
    }

    fn template(&self) -> Markup {
        Markup::new("div")
            .class("x-tabs")
            .child(
                Markup::new("ul")
                    .class(LIST_CLASS)
                    .attr("role", "tablist"),
            )
            .child(Markup::new("div").class(PANELS_CLASS))
    }

    fn rebuild(&mut self, children: &[LightChild]) {
        self.tabs = build_tabs(children);
    }

    fn render(&self, subtree: &mut dyn Subtree) {
        subtree.replace_children(
            &Selector::Class(LIST_CLASS.to_string()),
            self.buttons_markup(),
        );
        subtree.replace_children(
            &Selector::Class(PANELS_CLASS.to_string()),
            self.panels_markup(),
        );
        self.apply_active(subtree);
    }

    fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
        subtree: &mut dyn Subtree,
    ) -> Vec<HostDirective> {
        match TabsAttr::from_name(name) {
            Some(TabsAttr::CurrentTab) => {
                self.active = attribute::parse_index(value);
                self.apply_active(subtree);
            }
            Some(TabsAttr::HideClass) => {
                let new_class = match value {
                    Some(v) if !v.is_empty() => v.to_string(),
                    _ => DEFAULT_HIDE_CLASS.to_string(),
                };
                if new_class != self.hide_class {
                    let panels = Selector::Class(PANEL_CLASS.to_string());
                    subtree.remove_class(&panels, &self.hide_class);
                    self.hide_class = new_class;
                    self.apply_active(subtree);
                }
            }
            None => {}
        }
        // Attribute-driven updates are not echoed as change notifications.
        Vec::new()
    }

    fn event(&mut self, event: &Event, subtree: &mut dyn Subtree) -> Vec<HostDirective> {
        match event {
            Event::Click { button } => {
                let Some(button) = button else {
                    return Vec::new();
                };
                if !button.has_class(BUTTON_CLASS) {
                    return Vec::new();
                }
                let Some(index) = button
                    .controls
                    .as_deref()
                    .and_then(|id| self.index_of_id(id))
                else {
                    return Vec::new();
                };
                self.switch_to(index, subtree)
            }
            Event::KeyDown { key, focused } => match self.on_key(*key, focused.as_ref()) {
                KeyResponse::Focus(index) => {
                    self.focus_button(subtree, index);
                    vec![HostDirective::PreventDefault]
                }
                KeyResponse::Committed(message) => {
                    self.apply_active(subtree);
                    let mut directives = Self::commit_directives(&message);
                    directives.push(HostDirective::PreventDefault);
                    directives
                }
                KeyResponse::Consumed => vec![HostDirective::PreventDefault],
                KeyResponse::Ignored => Vec::new(),
            },
            Event::Change { .. } => Vec::new(),
        }
    }
}
